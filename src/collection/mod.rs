//! Array-backed collections.
//!
//! - [`ArraySet`]: unordered set of unique elements in a single resizable
//!   array, with swap-with-last removal and in-place union/intersection
//! - [`ArraySetError`]: errors from positional access and fallible growth
//!
//! # Examples
//!
//! ```rust
//! use arrayset::collection::ArraySet;
//!
//! let mut left: ArraySet<i32> = [1, 2, 3].into_iter().collect();
//! let right: ArraySet<i32> = [2, 3, 4].into_iter().collect();
//!
//! left += &right;
//! assert_eq!(left.len(), 4);
//! assert!(left.contains(&4));
//!
//! left.make_intersection(&right);
//! assert_eq!(left, right);
//! ```

mod array_set;
mod error;

pub use array_set::ArraySet;
pub use array_set::ArraySetIntoIterator;
pub use array_set::ArraySetIterator;
pub use array_set::DEFAULT_CAPACITY;
pub use error::ArraySetError;
