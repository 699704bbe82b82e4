//! Algebraic type classes.
//!
//! - [`Semigroup`]: Types with an associative binary operation (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//!
//! For [`ArraySet`](crate::collection::ArraySet), `combine` is set union and
//! `empty` is the empty set, so a batch of sets can be merged with
//! [`Monoid::combine_all`].
//!
//! # Examples
//!
//! ```rust
//! use arrayset::collection::ArraySet;
//! use arrayset::typeclass::{Monoid, Semigroup};
//!
//! let sets: Vec<ArraySet<i32>> = vec![
//!     [1, 2].into_iter().collect(),
//!     [2, 3].into_iter().collect(),
//!     [5].into_iter().collect(),
//! ];
//! let merged = ArraySet::combine_all(sets);
//! assert_eq!(merged, [1, 2, 3, 5].into_iter().collect());
//! assert!(ArraySet::<i32>::empty().is_empty_value());
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
