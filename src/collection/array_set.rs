//! Unordered set backed by a single resizable array.
//!
//! This module provides [`ArraySet`], a collection of unique elements stored
//! contiguously in an owned buffer. Membership is decided by a linear scan
//! under `PartialEq`, so the element type needs neither `Hash` nor `Ord`.
//!
//! # Storage Model
//!
//! ```text
//!   buffer:  [ a | b | c | d | . | . ]
//!              \___ len = 4 ___/
//!              \______ capacity = 6 ______/
//! ```
//!
//! - Live elements occupy `buffer[0..len)`.
//! - `capacity` is exactly what was requested through
//!   [`ArraySet::with_capacity`] or [`ArraySet::reserve`]; it grows on demand
//!   and never shrinks unless asked to.
//! - Removal overwrites the removed slot with the last live element
//!   (swap-with-last), so **storage order is not stable across removals**.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity       |
//! |---------------------|------------------|
//! | `contains`          | O(n)             |
//! | `insert`            | O(n)             |
//! | `erase_one`         | O(n)             |
//! | `erase`             | O(n)             |
//! | `at` / `get`        | O(1)             |
//! | `make_union`        | O(n * m)         |
//! | `make_intersection` | O(n * m)         |
//! | `reserve`           | O(n)             |
//!
//! # Examples
//!
//! ```rust
//! use arrayset::collection::ArraySet;
//!
//! let mut set = ArraySet::with_capacity(2);
//! set.insert(1);
//! set.insert(2);
//! set.insert(3);
//! assert_eq!(set.len(), 3);
//! assert!(set.capacity() >= 3);
//!
//! // Duplicates are rejected
//! assert!(!set.insert(2));
//! assert_eq!(set.len(), 3);
//!
//! // Removal swaps the last element into the hole
//! assert!(set.erase_one(&1));
//! assert!(!set.contains(&1));
//! assert_eq!(set.len(), 2);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::io;
use std::ops::AddAssign;

use super::ArraySetError;

/// Capacity used by [`ArraySet::new`] and [`Default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Message emitted when [`ArraySet::insert_with_message`] rejects a duplicate.
const DUPLICATE_MESSAGE: &str = "contains duplicate, item not inserted.";

/// An unordered collection of unique elements stored in a resizable array.
///
/// # Invariants
///
/// - `len() <= capacity()`
/// - No two live elements compare equal
/// - Element order is an artifact of insertion and removal history and is
///   not preserved by removals
///
/// # Type Parameters
///
/// * `T` - The element type. Set operations require `PartialEq`; operations
///   that copy elements out of another set require `Clone`.
///
/// # Examples
///
/// ```rust
/// use arrayset::collection::ArraySet;
///
/// let mut left: ArraySet<i32> = [1, 2, 3].into_iter().collect();
/// let right: ArraySet<i32> = [2, 3, 4].into_iter().collect();
///
/// let mut union = left.clone();
/// union.make_union(&right);
/// assert_eq!(union, [1, 2, 3, 4].into_iter().collect());
///
/// left.make_intersection(&right);
/// assert_eq!(left, [2, 3].into_iter().collect());
/// ```
pub struct ArraySet<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T> ArraySet<T> {
    /// Creates an empty set with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::{ArraySet, DEFAULT_CAPACITY};
    ///
    /// let set: ArraySet<i32> = ArraySet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty set with exactly `initial_capacity` slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::ArraySet;
    ///
    /// let set: ArraySet<String> = ArraySet::with_capacity(32);
    /// assert_eq!(set.capacity(), 32);
    /// assert_eq!(set.len(), 0);
    /// ```
    #[must_use]
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
        }
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    ///
    /// # Errors
    ///
    /// Returns [`ArraySetError::AllocationFailure`] if the buffer cannot be
    /// allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::ArraySet;
    ///
    /// let set = ArraySet::<u8>::try_with_capacity(4).unwrap();
    /// assert_eq!(set.capacity(), 4);
    ///
    /// assert!(ArraySet::<u64>::try_with_capacity(usize::MAX).is_err());
    /// ```
    pub fn try_with_capacity(initial_capacity: usize) -> Result<Self, ArraySetError> {
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(initial_capacity)
            .map_err(|cause| ArraySetError::AllocationFailure {
                requested: initial_capacity,
                cause,
            })?;
        Ok(Self {
            elements,
            capacity: initial_capacity,
        })
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of slots currently allocated.
    ///
    /// This is the capacity that was last requested, not whatever the
    /// allocator happened to round it up to.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the live elements in storage order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a reference to the element at `index`, or `None` if the slot
    /// is not live.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::ArraySet;
    ///
    /// let set: ArraySet<i32> = [7].into_iter().collect();
    /// assert_eq!(set.get(0), Some(&7));
    /// assert_eq!(set.get(1), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns an iterator over the elements in storage order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ArraySetIterator<'_, T> {
        ArraySetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Removes every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Resizes the buffer to hold `new_capacity` slots.
    ///
    /// Does nothing if `new_capacity` equals the current capacity. The
    /// request is clamped up to [`len`](Self::len), so live elements are
    /// never dropped. The length is unchanged.
    ///
    /// Allocation failure is fatal here; use
    /// [`try_reserve`](Self::try_reserve) to observe it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::ArraySet;
    ///
    /// let mut set: ArraySet<i32> = ArraySet::with_capacity(1);
    /// set.insert(1);
    /// set.reserve(16);
    /// assert_eq!(set.capacity(), 16);
    ///
    /// // Cannot shrink below the live elements
    /// set.reserve(0);
    /// assert_eq!(set.capacity(), 1);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        let Some(target) = self.clamp_capacity(new_capacity) else {
            return;
        };
        if target > self.elements.capacity() {
            self.elements.reserve_exact(target - self.elements.len());
        } else {
            self.elements.shrink_to(target);
        }
        self.install_capacity(target);
    }

    /// Fallible form of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns [`ArraySetError::AllocationFailure`] if the buffer cannot be
    /// grown. The set is left unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ArraySetError> {
        let Some(target) = self.clamp_capacity(new_capacity) else {
            return Ok(());
        };
        if target > self.elements.capacity() {
            self.elements
                .try_reserve_exact(target - self.elements.len())
                .map_err(|cause| ArraySetError::AllocationFailure {
                    requested: target,
                    cause,
                })?;
        } else {
            self.elements.shrink_to(target);
        }
        self.install_capacity(target);
        Ok(())
    }

    /// Writes the elements separated by spaces, followed by a newline.
    ///
    /// The listing is in storage order, which is not stable across
    /// removals.
    ///
    /// # Errors
    ///
    /// Propagates any error from `writer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::ArraySet;
    ///
    /// let set: ArraySet<i32> = [1, 2, 3].into_iter().collect();
    /// let mut output = Vec::new();
    /// set.print_to(&mut output).unwrap();
    /// assert_eq!(String::from_utf8(output).unwrap(), "1 2 3 \n");
    /// ```
    pub fn print_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for element in &self.elements {
            write!(writer, "{element} ")?;
        }
        writeln!(writer)
    }

    /// Returns the capacity to move to, or `None` when nothing changes.
    fn clamp_capacity(&self, requested: usize) -> Option<usize> {
        if requested == self.capacity {
            return None;
        }
        let target = requested.max(self.elements.len());
        (target != self.capacity).then_some(target)
    }

    fn install_capacity(&mut self, target: usize) {
        log::trace!("array set capacity {} -> {}", self.capacity, target);
        self.capacity = target;
    }
}

impl<T: PartialEq> ArraySet<T> {
    /// Returns `true` if an element equal to `target` is present.
    ///
    /// Supports borrowed forms of the element type, so an
    /// `ArraySet<String>` can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::ArraySet;
    ///
    /// let set: ArraySet<String> = ["hello".to_string()].into_iter().collect();
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.elements.iter().any(|element| element.borrow() == target)
    }

    /// Inserts `entry` unless an equal element is already present.
    ///
    /// Returns `true` if the element was added. When the buffer is full it
    /// grows by exactly one slot; callers inserting many elements should
    /// [`reserve`](Self::reserve) ahead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::ArraySet;
    ///
    /// let mut set = ArraySet::with_capacity(1);
    /// assert!(set.insert(1));
    /// assert!(set.insert(2));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.capacity(), 2);
    /// ```
    pub fn insert(&mut self, entry: T) -> bool {
        self.insert_with_message(entry, false)
    }

    /// Inserts `entry`, optionally logging a notice when it is a duplicate.
    ///
    /// The notice goes through the `log` facade at `info` level. It is a
    /// diagnostic only; the return value is the same as for
    /// [`insert`](Self::insert).
    pub fn insert_with_message(&mut self, entry: T, message: bool) -> bool {
        if self.contains(&entry) {
            if message {
                log::info!("{DUPLICATE_MESSAGE}");
            }
            return false;
        }
        if self.elements.len() == self.capacity {
            self.reserve(self.elements.len() + 1);
        }
        self.elements.push(entry);
        true
    }

    /// Fallible form of [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// Returns [`ArraySetError::AllocationFailure`] if the buffer must grow
    /// and cannot. The set is left unchanged in that case.
    pub fn try_insert(&mut self, entry: T) -> Result<bool, ArraySetError> {
        if self.contains(&entry) {
            return Ok(false);
        }
        if self.elements.len() == self.capacity {
            self.try_reserve(self.elements.len() + 1)?;
        }
        self.elements.push(entry);
        Ok(true)
    }

    /// Removes the first element equal to `target`.
    ///
    /// The last element is moved into the vacated slot, so this is O(1)
    /// after the scan but does not preserve order. Returns `false` and
    /// leaves the set untouched if no such element exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::ArraySet;
    ///
    /// let mut set: ArraySet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(set.erase_one(&1));
    /// assert_eq!(set.as_slice(), &[3, 2]);
    /// assert!(!set.erase_one(&1));
    /// ```
    pub fn erase_one<Q>(&mut self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self
            .elements
            .iter()
            .position(|element| element.borrow() == target)
        {
            Some(index) => {
                self.elements.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every element equal to `target`, returning how many were
    /// removed.
    ///
    /// With duplicates rejected on insert this is 0 or 1, but the scan
    /// re-checks the swapped-in element at each hit so any number of
    /// matches would be removed.
    pub fn erase<Q>(&mut self, target: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut index = 0;
        let mut removed = 0;
        while index < self.elements.len() {
            if self.elements[index].borrow() == target {
                self.elements.swap_remove(index);
                removed += 1;
            } else {
                index += 1;
            }
        }
        removed
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Clone + PartialEq> ArraySet<T> {
    /// Returns a copy of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArraySetError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrayset::collection::{ArraySet, ArraySetError};
    ///
    /// let set: ArraySet<i32> = [10, 20].into_iter().collect();
    /// assert_eq!(set.at(1), Ok(20));
    /// assert_eq!(set.at(2), Err(ArraySetError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<T, ArraySetError> {
        self.elements
            .get(index)
            .cloned()
            .ok_or(ArraySetError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            })
    }

    /// Adds every element of `other` that is not already present.
    ///
    /// `other` is left unchanged.
    pub fn make_union(&mut self, other: &Self) {
        for element in other {
            if !self.contains(element) {
                self.insert(element.clone());
            }
        }
    }

    /// Keeps only the elements that are also present in `other`.
    ///
    /// The smaller of the two sets is scanned and each of its elements is
    /// looked up in the larger one. The matches replace the buffer; the
    /// capacity is kept as it was. `other` is left unchanged.
    pub fn make_intersection(&mut self, other: &Self) {
        let (smaller, larger) = if other.len() < self.len() {
            (other, &*self)
        } else {
            (&*self, other)
        };
        log::debug!(
            "intersecting array sets: scanning {} elements against {}",
            smaller.len(),
            larger.len()
        );

        let mut matched = Vec::with_capacity(self.capacity);
        matched.extend(
            smaller
                .iter()
                .filter(|element| larger.contains(*element))
                .cloned(),
        );
        self.elements = matched;
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of an [`ArraySet`].
pub struct ArraySetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for ArraySetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ArraySetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of an [`ArraySet`].
pub struct ArraySetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for ArraySetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ArraySetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ArraySet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArraySet<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend_from_slice(&self.elements);
        Self {
            elements,
            capacity: self.capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.capacity == source.capacity {
            self.elements.clear();
        } else {
            self.elements = Vec::with_capacity(source.capacity);
            self.capacity = source.capacity;
        }
        self.elements.extend_from_slice(&source.elements);
    }
}

impl<T: PartialEq> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let wanted = self.len().saturating_add(lower);
        if wanted > self.capacity {
            self.reserve(wanted);
        }
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> IntoIterator for ArraySet<T> {
    type Item = T;
    type IntoIter = ArraySetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ArraySetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;
    type IntoIter = ArraySetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + PartialEq> AddAssign<&ArraySet<T>> for ArraySet<T> {
    fn add_assign(&mut self, addend: &Self) {
        self.make_union(addend);
    }
}

impl<T: PartialEq> AddAssign for ArraySet<T> {
    fn add_assign(&mut self, addend: Self) {
        for element in addend {
            self.insert(element);
        }
    }
}

impl<T: PartialEq> PartialEq for ArraySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq> Eq for ArraySet<T> {}

impl<T: fmt::Debug> fmt::Debug for ArraySet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArraySet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(ArraySet<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(ArraySet<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T: Clone + PartialEq> crate::typeclass::Semigroup for ArraySet<T> {
    fn combine(mut self, other: Self) -> Self {
        self += other;
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.make_union(other);
        result
    }
}

#[cfg(feature = "typeclass")]
impl<T: Clone + PartialEq> crate::typeclass::Monoid for ArraySet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Upper bound on the slots preallocated from a deserializer's size hint.
#[cfg(feature = "serde")]
const MAX_PREALLOCATION: usize = 4096;

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ArraySet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ArraySetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ArraySetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ArraySetVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    type Value = ArraySet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq
            .size_hint()
            .map_or(DEFAULT_CAPACITY, |hint| hint.min(MAX_PREALLOCATION));
        let mut set = ArraySet::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ArraySet<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ArraySetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
