//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(Self::empty()) == a
//! ```

use super::Semigroup;

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use arrayset::collection::ArraySet;
/// use arrayset::typeclass::{Monoid, Semigroup};
///
/// let set: ArraySet<i32> = [1, 2].into_iter().collect();
/// assert_eq!(ArraySet::empty().combine(set.clone()), set);
/// assert_eq!(set.clone().combine(ArraySet::empty()), set);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}
