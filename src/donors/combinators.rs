use super::*;
use core::{fmt, marker::PhantomData};

/// A donor combinator for mapping a function over the values produced by
/// another donor.
///
/// See the [`map`][Donor::map] method on the [`Donor`] trait for details and
/// example usage.
#[derive(Clone)]
pub struct Map<D, F, T> {
    donor: D,
    f: F,
    _source: PhantomData<fn() -> T>,
}

impl<D, F, T> Map<D, F, T> {
    pub(crate) fn new(donor: D, f: F) -> Self {
        Map {
            donor,
            f,
            _source: PhantomData,
        }
    }
}

impl<D, F, T> fmt::Debug for Map<D, F, T>
where
    D: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("donor", &self.donor)
            .finish_non_exhaustive()
    }
}

impl<D, F, T, U> Donor<U> for Map<D, F, T>
where
    D: Donor<T>,
    F: FnMut(T) -> Result<U>,
{
    #[inline]
    fn next(&mut self) -> Result<U> {
        let value = self.donor.next()?;
        (self.f)(value)
    }
}

/// An iterator over the values of a donor.
///
/// See the [`values`][Donor::values] method on the [`Donor`] trait for details
/// and example usage.
#[derive(Clone, Debug)]
pub struct Values<D, T> {
    donor: D,
    done: bool,
    _value: PhantomData<fn() -> T>,
}

impl<D, T> Values<D, T> {
    pub(crate) fn new(donor: D) -> Self {
        Values {
            donor,
            done: false,
            _value: PhantomData,
        }
    }

    /// Get back the donor this iterator pulls from.
    pub fn into_inner(self) -> D {
        self.donor
    }
}

impl<D, T> Iterator for Values<D, T>
where
    D: Donor<T>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.done {
            return None;
        }
        match self.donor.next() {
            Err(e) if e.is_exhausted() => {
                self.done = true;
                None
            }
            res => Some(res),
        }
    }
}

impl<D, T> core::iter::FusedIterator for Values<D, T> where D: Donor<T> {}

/// A donor that pulls its inner donor once and then keeps donating that same
/// value.
///
/// See the [`the_same`] function for more information.
#[derive(Clone, Debug)]
pub struct TheSame<D, T> {
    donor: D,
    value: Option<T>,
}

/// Create a donor that pulls `donor` on its first pull only, and donates a
/// clone of that first value on every pull after that.
///
/// Use this when every built object should refer to one shared instance, for
/// example one owner for a whole batch of accounts. If the first pull fails,
/// nothing is remembered and the next pull tries `donor` again.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut owner = d::the_same(d::indexed_sequence(|i| Ok(format!("owner-{i}"))));
///
/// assert_eq!(owner.next()?, "owner-0");
/// assert_eq!(owner.next()?, "owner-0");
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn the_same<D, T>(donor: D) -> TheSame<D, T>
where
    D: Donor<T>,
{
    TheSame { donor, value: None }
}

impl<D, T> Donor<T> for TheSame<D, T>
where
    D: Donor<T>,
    T: Clone,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        if let Some(value) = &self.value {
            return Ok(value.clone());
        }
        let value = self.donor.next()?;
        self.value = Some(value.clone());
        Ok(value)
    }
}

/// A donor of `Vec`s, filled from another donor.
///
/// See the [`vec_of`] function for more information.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug)]
pub struct VecOf<D> {
    donor: D,
    len: usize,
}

/// Create a donor that produces a `Vec` of `len` values, pulled from `donor`,
/// on every pull.
///
/// If `donor` fails part of the way through filling a `Vec`, the error is
/// returned unchanged and the values pulled so far are dropped. `donor` stays
/// advanced past them.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut rows = d::vec_of(d::indexed_sequence(|i| Ok(i)), 3);
///
/// assert_eq!(rows.next()?, [0, 1, 2]);
/// assert_eq!(rows.next()?, [3, 4, 5]);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
#[cfg(feature = "alloc")]
pub fn vec_of<D>(donor: D, len: usize) -> VecOf<D> {
    VecOf { donor, len }
}

#[cfg(feature = "alloc")]
impl<D, T> Donor<alloc::vec::Vec<T>> for VecOf<D>
where
    D: Donor<T>,
{
    fn next(&mut self) -> Result<alloc::vec::Vec<T>> {
        (0..self.len).map(|_| self.donor.next()).collect()
    }
}

/// A cloneable handle onto a single donor.
///
/// See the [`shared`] function for more information.
#[cfg(feature = "alloc")]
#[derive(Debug)]
pub struct Shared<D> {
    donor: alloc::rc::Rc<core::cell::RefCell<D>>,
}

#[cfg(feature = "alloc")]
impl<D> Clone for Shared<D> {
    fn clone(&self) -> Self {
        Shared {
            donor: alloc::rc::Rc::clone(&self.donor),
        }
    }
}

/// Wrap `donor` so that it can be pulled through any number of handles.
///
/// Every clone of the returned handle pulls from the same cursor. This is how
/// a builder template, and every builder derived from it, can share one
/// sequence: each built object gets the next value, whichever builder built it.
///
/// Pulling a shared donor from inside one of its own pulls (for example, a
/// builder whose property donor builds with that same builder) returns an
/// [`ErrorKind::Other`][crate::ErrorKind::Other] error instead of panicking.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let ids = d::shared(d::indexed_sequence(|i| Ok(i)));
/// let mut a = ids.clone();
/// let mut b = ids.clone();
///
/// assert_eq!(a.next()?, 0);
/// assert_eq!(b.next()?, 1);
/// assert_eq!(ids.pull()?, 2);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
#[cfg(feature = "alloc")]
pub fn shared<D>(donor: D) -> Shared<D> {
    Shared {
        donor: alloc::rc::Rc::new(core::cell::RefCell::new(donor)),
    }
}

#[cfg(feature = "alloc")]
impl<D> Shared<D> {
    /// Pull the next value through a shared reference to this handle.
    ///
    /// This is what [`Build::build`] implementations call, since they only get
    /// `&self`.
    pub fn pull<T>(&self) -> Result<T>
    where
        D: Donor<T>,
    {
        let mut donor = self.donor.try_borrow_mut().map_err(|_| {
            crate::log::debug!("shared donor pulled while already being pulled");
            Error::other("shared donor pulled while already being pulled")
        })?;
        donor.next()
    }

    /// Whether `self` and `other` are handles onto the same donor.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        alloc::rc::Rc::ptr_eq(&self.donor, &other.donor)
    }
}

#[cfg(feature = "alloc")]
impl<D, T> Donor<T> for Shared<D>
where
    D: Donor<T>,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        self.pull()
    }
}
