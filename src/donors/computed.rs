//! Sequences whose values are computed by a rule rather than read from a
//! list. Neither kind ever exhausts.

use super::*;
use core::fmt;

/// A sequence whose `n`th value is computed from `n`.
///
/// See the [`indexed_sequence`] function to create new instances and for
/// example usage.
#[derive(Clone)]
pub struct IndexedSequence<F> {
    value_at: F,
    index: usize,
}

/// Create a sequence that donates `value_at(0)`, `value_at(1)`, `value_at(2)`,
/// and so on.
///
/// `value_at` should be a pure function. If it returns an error, that error is
/// handed to the caller unchanged and the index does not advance, so the next
/// pull calls `value_at` again with the same index.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut codes = d::indexed_sequence(|i| Ok(format!("C{i}")));
///
/// assert_eq!(codes.next()?, "C0");
/// assert_eq!(codes.next()?, "C1");
/// assert_eq!(codes.next()?, "C2");
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn indexed_sequence<F, T>(value_at: F) -> IndexedSequence<F>
where
    F: Fn(usize) -> Result<T>,
{
    IndexedSequence { value_at, index: 0 }
}

impl<F> IndexedSequence<F> {
    /// The index that the next pull will compute a value for.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<F> fmt::Debug for IndexedSequence<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedSequence")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<F, T> Donor<T> for IndexedSequence<F>
where
    F: Fn(usize) -> Result<T>,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        let value = (self.value_at)(self.index)?;
        self.index += 1;
        Ok(value)
    }
}

/// A sequence whose every value is computed from the one before it.
///
/// See the [`chained_sequence`] function to create new instances and for
/// example usage.
#[derive(Clone)]
pub struct ChainedSequence<T, F, G> {
    first_value: F,
    value_after: G,
    last: Option<T>,
}

/// Create a sequence that donates `first_value()`, then
/// `value_after(&previous)` for every pull after that.
///
/// Both functions should be pure. If either returns an error, that error is
/// handed to the caller unchanged and the remembered previous value is left
/// as it was, so the next pull repeats the same step.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut primes = d::chained_sequence(
///     || Ok(String::from("A")),
///     |previous| Ok(format!("{previous}'")),
/// );
///
/// assert_eq!(primes.next()?, "A");
/// assert_eq!(primes.next()?, "A'");
/// assert_eq!(primes.next()?, "A''");
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn chained_sequence<T, F, G>(first_value: F, value_after: G) -> ChainedSequence<T, F, G>
where
    F: Fn() -> Result<T>,
    G: Fn(&T) -> Result<T>,
{
    ChainedSequence {
        first_value,
        value_after,
        last: None,
    }
}

impl<T, F, G> ChainedSequence<T, F, G> {
    /// The most recently donated value, or `None` before the first pull.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }
}

impl<T, F, G> fmt::Debug for ChainedSequence<T, F, G>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedSequence")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

impl<T, F, G> Donor<T> for ChainedSequence<T, F, G>
where
    T: Clone,
    F: Fn() -> Result<T>,
    G: Fn(&T) -> Result<T>,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        let value = match &self.last {
            None => (self.first_value)()?,
            Some(previous) => (self.value_after)(previous)?,
        };
        self.last = Some(value.clone());
        Ok(value)
    }
}
