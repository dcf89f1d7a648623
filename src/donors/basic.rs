use super::*;
use core::fmt;

/// A donor that always produces the same, given value.
///
/// See the [`constant`] function for more information.
#[derive(Clone, Debug, Default)]
pub struct Constant<T> {
    value: T,
}

/// Create a donor that always produces a clone of `value`.
///
/// Pulling a constant never changes it and never fails.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut leaves = d::constant(2);
///
/// assert_eq!(leaves.next()?, 2);
/// assert_eq!(leaves.next()?, 2);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn constant<T>(value: T) -> Constant<T> {
    Constant { value }
}

impl<T> Donor<T> for Constant<T>
where
    T: Clone,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        Ok(self.value.clone())
    }
}

/// A donor defined by a closure.
///
/// See the [`from_fn`] function for more information.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Create a donor that calls `f` on every pull.
///
/// This is the quickest way to write a one-off donor: `f` may capture and
/// update whatever state it needs.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut powers = 1u32;
/// let mut powers_of_two = d::from_fn(move || {
///     let value = powers;
///     powers *= 2;
///     Ok(value)
/// });
///
/// assert_eq!(powers_of_two.next()?, 1);
/// assert_eq!(powers_of_two.next()?, 2);
/// assert_eq!(powers_of_two.next()?, 4);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn from_fn<F, T>(f: F) -> FromFn<F>
where
    F: FnMut() -> Result<T>,
{
    FromFn { f }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F, T> Donor<T> for FromFn<F>
where
    F: FnMut() -> Result<T>,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        (self.f)()
    }
}

/// A donor that builds a brand new object on every pull.
///
/// See the [`maker`] function for more information.
#[derive(Clone, Debug)]
pub struct Maker<B> {
    builder: B,
}

/// Create a donor that runs `builder` on every pull, turning a fixture builder
/// into a donor for another builder's property.
///
/// The builder is not owned exclusively: pass a reference, an `Rc`, or an
/// `Arc` to let many donors (and other code) use the same template. Errors
/// from the builder, such as an exhausted sequence behind one of its
/// properties, are returned unchanged.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{build_fn, donors as d, Donor};
///
/// #[derive(Debug, PartialEq)]
/// struct Leaf {
///     length_mm: u32,
/// }
///
/// let leaf = build_fn(|| Ok(Leaf { length_mm: 40 }));
///
/// let mut leaves = d::maker(&leaf);
/// assert_eq!(leaves.next()?, Leaf { length_mm: 40 });
///
/// let mut pairs = d::vec_of(d::maker(&leaf), 2);
/// let pair: Vec<Leaf> = pairs.next()?;
/// assert_eq!(pair.len(), 2);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn maker<B>(builder: B) -> Maker<B> {
    Maker { builder }
}

impl<B> Maker<B> {
    /// Get a reference to the underlying builder.
    #[inline]
    #[must_use]
    pub fn builder(&self) -> &B {
        &self.builder
    }
}

impl<B, T> Donor<T> for Maker<B>
where
    B: Build<T>,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        crate::log::trace!("building a fresh instance for a maker donor");
        self.builder.build()
    }
}
