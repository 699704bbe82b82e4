//! Error types for [`ArraySet`](super::ArraySet).
//!
//! Only two things can go wrong with an array-backed set: reading a slot
//! that is not live, and failing to grow the buffer. Inserting a duplicate
//! or erasing an absent element are ordinary outcomes reported through
//! return values, not errors.

use std::collections::TryReserveError;

/// Represents errors that can occur when working with an [`ArraySet`](super::ArraySet).
///
/// # Examples
///
/// ```rust
/// use arrayset::collection::{ArraySet, ArraySetError};
///
/// let set: ArraySet<i32> = [1, 2, 3].into_iter().collect();
/// let error = set.at(5).unwrap_err();
/// assert_eq!(error, ArraySetError::IndexOutOfRange { index: 5, len: 3 });
/// assert_eq!(format!("{error}"), "index 5 out of range for set of length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArraySetError {
    /// Positional access outside of `[0, len)`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of live elements at the time of the access.
        len: usize,
    },
    /// The buffer could not be grown to the requested capacity.
    AllocationFailure {
        /// The capacity that was requested.
        requested: usize,
        /// The underlying allocator error.
        cause: TryReserveError,
    },
}

impl std::fmt::Display for ArraySetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(formatter, "index {index} out of range for set of length {len}")
            }
            Self::AllocationFailure { requested, .. } => {
                write!(formatter, "failed to allocate storage for {requested} elements")
            }
        }
    }
}

impl std::error::Error for ArraySetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IndexOutOfRange { .. } => None,
            Self::AllocationFailure { cause, .. } => Some(cause),
        }
    }
}
