//! An ordered map and set based on a red-black tree.
//!
//! The balancing work is done by [`Tree`], a red-black tree engine with a
//! caller-supplied comparator, cached extremes, and three duplicate-key
//! insertion policies. [`Map`] and [`Set`] are thin façades over it with
//! conventional collection APIs.

pub mod map;
pub mod set;
pub mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use map::Map;
pub use set::Set;
pub use tree::{InsertMode, InsertOutcome, Tree};
