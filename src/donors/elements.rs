//! Donors backed by a snapshot of caller-supplied elements.

use super::*;
use crate::rng::Rng;
use alloc::vec::{self, Vec};

fn snapshot<T>(values: impl IntoIterator<Item = T>) -> Result<Vec<T>> {
    let values: Vec<T> = values.into_iter().collect();
    if values.is_empty() {
        return Err(Error::invalid_sequence());
    }
    Ok(values)
}

/// A finite sequence that donates each of its elements once, in order.
///
/// See the [`sequence`] function to create new instances and for example
/// usage.
#[derive(Clone, Debug)]
pub struct Sequence<T> {
    values: vec::IntoIter<T>,
}

/// Create a finite sequence over a snapshot of `values`.
///
/// The values are collected up front, so later changes to whatever `values`
/// was built from do not affect the sequence. Once the last element has been
/// donated, every further pull fails with
/// [`ErrorKind::Exhausted`][crate::ErrorKind::Exhausted].
///
/// Returns an [`ErrorKind::InvalidSequence`][crate::ErrorKind::InvalidSequence]
/// error when `values` is empty.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut names = d::sequence(["Alice", "Bob", "Carol", "Dave"])?;
///
/// assert_eq!(names.next()?, "Alice");
/// assert_eq!(names.next()?, "Bob");
/// assert_eq!(names.next()?, "Carol");
/// assert_eq!(names.next()?, "Dave");
/// assert!(names.next().unwrap_err().is_exhausted());
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn sequence<T>(values: impl IntoIterator<Item = T>) -> Result<Sequence<T>> {
    let values = snapshot(values)?;
    Ok(Sequence {
        values: values.into_iter(),
    })
}

impl<T> Sequence<T> {
    /// The number of elements that have not been donated yet.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl<T> Donor<T> for Sequence<T> {
    #[inline]
    fn next(&mut self) -> Result<T> {
        match self.values.next() {
            Some(value) => Ok(value),
            None => {
                crate::log::trace!("sequence is exhausted");
                Err(Error::exhausted())
            }
        }
    }
}

/// A sequence that cycles through its elements forever.
///
/// See the [`repeating_sequence`] function to create new instances and for
/// example usage.
#[derive(Clone, Debug)]
pub struct RepeatingSequence<T> {
    values: Vec<T>,
    cursor: usize,
}

/// Create a sequence that donates a snapshot of `values` in order, starting
/// over from the first element after the last.
///
/// The `i`th pull (counting from zero) returns `values[i % values.len()]`.
///
/// Returns an [`ErrorKind::InvalidSequence`][crate::ErrorKind::InvalidSequence]
/// error when `values` is empty.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut sides = d::repeating_sequence(["heads", "tails"])?;
///
/// assert_eq!(sides.next()?, "heads");
/// assert_eq!(sides.next()?, "tails");
/// assert_eq!(sides.next()?, "heads");
///
/// assert!(d::repeating_sequence(Vec::<u8>::new()).unwrap_err().is_invalid_sequence());
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn repeating_sequence<T>(
    values: impl IntoIterator<Item = T>,
) -> Result<RepeatingSequence<T>> {
    let values = snapshot(values)?;
    Ok(RepeatingSequence { values, cursor: 0 })
}

impl<T> RepeatingSequence<T> {
    /// The number of elements in one cycle.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a repeating sequence cannot be constructed empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Donor<T> for RepeatingSequence<T>
where
    T: Clone,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        let value = self.values[self.cursor].clone();
        // Kept in `0..len` so the cursor never overflows.
        self.cursor = (self.cursor + 1) % self.values.len();
        Ok(value)
    }
}

/// A donor that picks one of its elements pseudo-randomly on every pull.
///
/// See the [`choose`] function to create new instances and for example
/// usage.
#[derive(Clone, Debug)]
pub struct Choose<T> {
    values: Vec<T>,
    rng: Rng,
}

/// Create a donor that picks uniformly from a snapshot of `values`.
///
/// Picks are deterministic for a given seed, so fixtures stay reproducible.
/// Use [`Choose::seed`] to change which values are picked.
///
/// Returns an [`ErrorKind::InvalidSequence`][crate::ErrorKind::InvalidSequence]
/// error when `values` is empty.
///
/// # Example
///
/// ```
/// # fn foo() -> donatis::Result<()> {
/// use donatis::{donors as d, Donor};
///
/// let mut colors = d::choose(["red", "green", "blue"])?.seed(0x1984);
///
/// for _ in 0..5 {
///     let color = colors.next()?;
///     assert!(["red", "green", "blue"].contains(&color));
/// }
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn choose<T>(values: impl IntoIterator<Item = T>) -> Result<Choose<T>> {
    let values = snapshot(values)?;
    Ok(Choose {
        values,
        rng: Rng::default(),
    })
}

impl<T> Choose<T> {
    /// Set the seed for the random number generator.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Rng::new(seed);
        self
    }
}

impl<T> Donor<T> for Choose<T>
where
    T: Clone,
{
    #[inline]
    fn next(&mut self) -> Result<T> {
        let index = self
            .rng
            .gen_index(self.values.len())
            .ok_or_else(Error::invalid_sequence)?;
        Ok(self.values[index].clone())
    }
}
