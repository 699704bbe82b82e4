//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use arrayset::collection::ArraySet;
/// use arrayset::typeclass::Semigroup;
///
/// let left: ArraySet<i32> = [1, 2].into_iter().collect();
/// let right: ArraySet<i32> = [2, 3].into_iter().collect();
/// assert_eq!(left.combine(right), [1, 2, 3].into_iter().collect());
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a default value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

#[cfg(all(test, feature = "collection"))]
mod tests {
    use super::*;
    use crate::collection::ArraySet;
    use rstest::rstest;

    fn set_of(elements: &[i32]) -> ArraySet<i32> {
        elements.iter().copied().collect()
    }

    #[rstest]
    fn test_combine_is_union() {
        let combined = set_of(&[1, 2, 3]).combine(set_of(&[3, 4]));
        assert_eq!(combined, set_of(&[1, 2, 3, 4]));
    }

    #[rstest]
    fn test_combine_ref_leaves_operands() {
        let left = set_of(&[1]);
        let right = set_of(&[2]);
        let combined = left.combine_ref(&right);
        assert_eq!(combined, set_of(&[1, 2]));
        assert_eq!(left, set_of(&[1]));
        assert_eq!(right, set_of(&[2]));
    }

    #[rstest]
    fn test_reduce_all_empty_is_none() {
        let sets: Vec<ArraySet<i32>> = Vec::new();
        assert!(ArraySet::reduce_all(sets).is_none());
    }

    #[rstest]
    fn test_reduce_all_merges() {
        let sets = vec![set_of(&[1]), set_of(&[1, 2]), set_of(&[3])];
        assert_eq!(ArraySet::reduce_all(sets), Some(set_of(&[1, 2, 3])));
    }
}
