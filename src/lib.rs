//! # arrayset
//!
//! An unordered set of unique elements stored in a single resizable array.
//!
//! ## Overview
//!
//! [`ArraySet`](collection::ArraySet) keeps its elements contiguously and
//! decides membership by a linear scan under `PartialEq`, so any `Clone +
//! PartialEq` type can be stored, with no `Hash` or `Ord` requirement. It
//! provides:
//!
//! - **Storage control**: exact initial capacity, explicit `reserve`, and
//!   single-slot growth on insert
//! - **Membership**: `insert` (duplicates rejected), `contains`, `erase_one`,
//!   `erase`
//! - **Set algebra**: in-place `make_union`, `make_intersection` and `+=`
//! - **Checked access**: `at` returns a typed error instead of reading past
//!   the live elements
//!
//! ## Feature Flags
//!
//! - `collection`: The `ArraySet` container
//! - `typeclass`: `Semigroup` and `Monoid` traits (union and empty set)
//! - `serde`: Serialization as a sequence
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Duplicate notices from `insert_with_message` are emitted at `info`,
//! reallocations at `trace`.
//!
//! ## Example
//!
//! ```rust
//! use arrayset::prelude::*;
//!
//! let mut set = ArraySet::with_capacity(2);
//! set.insert(1);
//! set.insert(2);
//! set.insert(3);
//! assert_eq!(set.len(), 3);
//!
//! let other: ArraySet<i32> = [2, 3, 4].into_iter().collect();
//! set.make_intersection(&other);
//! assert_eq!(set, [2, 3].into_iter().collect());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use arrayset::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "collection")]
pub mod collection;
