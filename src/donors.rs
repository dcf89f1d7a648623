//! The provided set of [`Donor`] implementations and combinators.
//!
//! It is idiomatic to import this module with the alias `d`:
//!
//! ```rust
//! use donatis::donors as d;
//! ```
//!
//! Every constructor here returns a fresh donor with its own cursor, so calling
//! the same constructor twice with the same arguments gives two independent
//! donors.

use super::*;

mod basic;
mod combinators;
mod computed;
#[cfg(feature = "alloc")]
mod elements;

pub use basic::*;
pub use combinators::*;
pub use computed::*;
#[cfg(feature = "alloc")]
pub use elements::*;
