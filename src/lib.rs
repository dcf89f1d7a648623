#![doc = include_str!("../README.md")]
#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod _guide;
pub mod donors;
pub mod error;
mod log;
mod rng;

pub use error::{Error, ErrorKind, ErrorMessage, Result, ResultExt};

/// A trait for values that can be pulled, one at a time, to fill in a property
/// of a fixture.
///
/// A donor is pulled, never pushed: whoever builds an object calls
/// [`next`][Donor::next] once per property per object. Every donor owns its own
/// cursor. Two donors created from the same configuration never share state;
/// if you want several handles onto one cursor, opt into it explicitly with
/// [`donors::shared`].
///
/// Donors are not synchronized. Pull each donor from one thread at a time.
///
/// # Example: Using the Provided Donors
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut names = d::sequence(["Alice", "Bob"])?;
/// let mut ids = d::indexed_sequence(|i| Ok(1000 + i));
///
/// assert_eq!((names.next()?, ids.next()?), ("Alice", 1000));
/// assert_eq!((names.next()?, ids.next()?), ("Bob", 1001));
///
/// // `names` is finite, `ids` is not.
/// assert!(names.next().unwrap_err().is_exhausted());
/// assert_eq!(ids.next()?, 1002);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
///
/// # Example: Implementing `Donor` by Hand
///
/// ```
/// use donatis::{Donor, Result};
///
/// /// Even numbers, counting up from zero.
/// #[derive(Default)]
/// pub struct Evens {
///     next: u64,
/// }
///
/// impl Donor<u64> for Evens {
///     fn next(&mut self) -> Result<u64> {
///         let value = self.next;
///         self.next += 2;
///         Ok(value)
///     }
/// }
///
/// let mut evens = Evens::default();
/// assert_eq!(evens.next().unwrap(), 0);
/// assert_eq!(evens.next().unwrap(), 2);
/// ```
pub trait Donor<T> {
    // Required methods.

    /// Pull the next value out of this donor.
    ///
    /// # Calling the `next` Method
    ///
    /// Each call may advance the donor's internal cursor. On error, the donor
    /// is left in the last state from which it successfully produced a value,
    /// so a corrected retry continues from the same place. The one exception
    /// is exhaustion of a finite sequence, which is terminal.
    ///
    /// # Implementing the `next` Method
    ///
    /// Only advance `self` once the value has been successfully computed, and
    /// return errors from user-supplied functions as they are, without
    /// wrapping them.
    fn next(&mut self) -> Result<T>;

    // Provided methods.

    /// Map a function over the values produced by this donor.
    ///
    /// The wrapped donor has already advanced by the time `f` runs, so an
    /// error from `f` consumes that value.
    ///
    /// # Example
    ///
    /// ```
    /// # fn foo() -> donatis::Result<()> {
    /// use donatis::{donors as d, Donor};
    ///
    /// let mut emails = d::indexed_sequence(|i| Ok(i))
    ///     .map(|i| Ok(format!("user{i}@example.com")));
    ///
    /// assert_eq!(emails.next()?, "user0@example.com");
    /// assert_eq!(emails.next()?, "user1@example.com");
    /// # Ok(())
    /// # }
    /// # foo().unwrap();
    /// ```
    #[inline]
    #[must_use = "donor combinators do nothing until you call their `next` method"]
    fn map<F, U>(self, f: F) -> donors::Map<Self, F, T>
    where
        Self: Sized,
        F: FnMut(T) -> Result<U>,
    {
        donors::Map::new(self, f)
    }

    /// Borrows a donor, rather than consuming it.
    ///
    /// This is useful to allow applying donor adapters while still retaining
    /// ownership of the original donor, and its cursor.
    ///
    /// # Example
    ///
    /// ```
    /// # fn foo() -> donatis::Result<()> {
    /// use donatis::{donors as d, Donor};
    ///
    /// let mut numbers = d::indexed_sequence(|i| Ok(i));
    ///
    /// {
    ///     let mut doubled = numbers.by_ref().map(|i| Ok(i * 2));
    ///     assert_eq!(doubled.next()?, 0);
    ///     assert_eq!(doubled.next()?, 2);
    /// }
    ///
    /// // The original donor picks up where the borrowed one left off.
    /// assert_eq!(numbers.next()?, 2);
    /// # Ok(())
    /// # }
    /// # foo().unwrap();
    /// ```
    #[inline]
    #[must_use = "donor combinators do nothing until you call their `next` method"]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Turn this donor into an iterator of its values.
    ///
    /// The iterator ends when the donor reports exhaustion. Any other error is
    /// yielded as `Some(Err(_))`, and iteration may continue afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// # fn foo() -> donatis::Result<()> {
    /// use donatis::{donors as d, Donor};
    ///
    /// let fruit = d::sequence(["apple", "banana"])?
    ///     .values()
    ///     .collect::<donatis::Result<Vec<_>>>()?;
    ///
    /// assert_eq!(fruit, ["apple", "banana"]);
    /// # Ok(())
    /// # }
    /// # foo().unwrap();
    /// ```
    #[inline]
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    fn values(self) -> donors::Values<Self, T>
    where
        Self: Sized,
    {
        donors::Values::new(self)
    }
}

fn _static_assert_object_safety(_: &dyn Donor<u8>, _: &dyn Build<u8>) {}

impl<D, T> Donor<T> for &mut D
where
    D: Donor<T> + ?Sized,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        (**self).next()
    }
}

#[cfg(feature = "alloc")]
impl<D, T> Donor<T> for alloc::boxed::Box<D>
where
    D: Donor<T> + ?Sized,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        (**self).next()
    }
}

/// A trait for fixture builders: templates that construct a fresh object on
/// every call.
///
/// `build` takes `&self` because one builder template is typically shared by
/// many users, including [`donors::maker`] donors. Builders whose properties
/// are backed by stateful donors keep those donors behind
/// [`donors::shared`] handles.
///
/// Use [`build_fn`] to turn a closure into a builder.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Build, Result};
///
/// #[derive(Debug, PartialEq)]
/// struct Banana {
///     ripeness: f64,
/// }
///
/// struct BananaMaker {
///     ripeness: d::Shared<d::RepeatingSequence<f64>>,
/// }
///
/// impl Build<Banana> for BananaMaker {
///     fn build(&self) -> Result<Banana> {
///         Ok(Banana {
///             ripeness: self.ripeness.pull()?,
///         })
///     }
/// }
///
/// let maker = BananaMaker {
///     ripeness: d::shared(d::repeating_sequence([0.5, 0.9])?),
/// };
///
/// assert_eq!(maker.build()?, Banana { ripeness: 0.5 });
/// assert_eq!(maker.build()?, Banana { ripeness: 0.9 });
/// assert_eq!(maker.build()?, Banana { ripeness: 0.5 });
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub trait Build<T> {
    /// Construct a new, independent instance.
    fn build(&self) -> Result<T>;
}

impl<B, T> Build<T> for &B
where
    B: Build<T> + ?Sized,
{
    #[inline]
    fn build(&self) -> Result<T> {
        (**self).build()
    }
}

#[cfg(feature = "alloc")]
impl<B, T> Build<T> for alloc::boxed::Box<B>
where
    B: Build<T> + ?Sized,
{
    #[inline]
    fn build(&self) -> Result<T> {
        (**self).build()
    }
}

#[cfg(feature = "alloc")]
impl<B, T> Build<T> for alloc::rc::Rc<B>
where
    B: Build<T> + ?Sized,
{
    #[inline]
    fn build(&self) -> Result<T> {
        (**self).build()
    }
}

#[cfg(feature = "alloc")]
impl<B, T> Build<T> for alloc::sync::Arc<B>
where
    B: Build<T> + ?Sized,
{
    #[inline]
    fn build(&self) -> Result<T> {
        (**self).build()
    }
}

/// A builder defined by a closure.
///
/// See the [`build_fn`] function to create new instances and for example
/// usage.
#[derive(Clone, Debug)]
pub struct BuildFn<F> {
    f: F,
}

/// Create a builder that calls `f` to construct each instance.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{build_fn, Build};
///
/// let origin = build_fn(|| Ok((0, 0)));
/// assert_eq!(origin.build()?, (0, 0));
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn build_fn<F, T>(f: F) -> BuildFn<F>
where
    F: Fn() -> Result<T>,
{
    BuildFn { f }
}

impl<F, T> Build<T> for BuildFn<F>
where
    F: Fn() -> Result<T>,
{
    #[inline]
    fn build(&self) -> Result<T> {
        (self.f)()
    }
}
