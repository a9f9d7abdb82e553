//! Most-recent-first numeric history buffer.
//!
//! Stores `f64` samples with the newest value at index 0. New values enter at
//! the front; trimming discards from the tail, so the oldest samples are the
//! first to go. Used by [`ShiftRegister`](crate::register::ShiftRegister) as
//! its only piece of state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         HistoryBuffer Layout                            │
//! │                                                                         │
//! │   elements: VecDeque<f64>                                               │
//! │                                                                         │
//! │   After insert_front: 1.0, 2.0, 3.0, 4.0                                │
//! │                                                                         │
//! │   Index:     0     1     2     3                                        │
//! │            ┌─────┬─────┬─────┬─────┐                                    │
//! │            │ 4.0 │ 3.0 │ 2.0 │ 1.0 │                                    │
//! │            └─────┴─────┴─────┴─────┘                                    │
//! │             MRU                 oldest                                  │
//! │                                                                         │
//! │   trim_to(2):  keeps indices 0..2  →  [4.0, 3.0]                        │
//! │                discards 2.. (tail) →  2.0, 1.0 evicted                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation          | Description                        | Complexity |
//! |--------------------|------------------------------------|------------|
//! | [`insert_front`]   | Prepend a value                    | O(1) amort.|
//! | [`trim_to`]        | Keep the `n` most recent values    | O(evicted) |
//! | [`clear`]          | Remove everything                  | O(1)       |
//! | [`len`]            | Current element count              | O(1)       |
//! | [`snapshot`]       | Owned copy in MRU order            | O(len)     |
//! | [`iter`]           | Borrowed iteration in MRU order    | O(len)     |
//!
//! [`insert_front`]: HistoryBuffer::insert_front
//! [`trim_to`]: HistoryBuffer::trim_to
//! [`clear`]: HistoryBuffer::clear
//! [`len`]: HistoryBuffer::len
//! [`snapshot`]: HistoryBuffer::snapshot
//! [`iter`]: HistoryBuffer::iter
//!
//! ## Example Usage
//!
//! ```
//! use shiftkit::ds::HistoryBuffer;
//!
//! let mut buffer = HistoryBuffer::new();
//! for v in [1.0, 2.0, 3.0, 4.0] {
//!     buffer.insert_front(v);
//! }
//! assert_eq!(buffer.snapshot(), vec![4.0, 3.0, 2.0, 1.0]);
//!
//! // Oldest excess is discarded
//! assert_eq!(buffer.trim_to(2), Ok(2));
//! assert_eq!(buffer.snapshot(), vec![4.0, 3.0]);
//! ```
//!
//! ## Thread Safety
//!
//! `HistoryBuffer` is plain owned data with no interior mutability. It is
//! `Send + Sync`, but mutation requires `&mut self`.
//!
//! ## Implementation Notes
//!
//! - No upper bound is enforced on insert; capping is the caller's job
//! - A negative trim length is rejected, never clamped
//! - `debug_validate_invariants()` available in debug/test builds

use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::error::InvalidArgument;

/// Ordered `f64` history, most recent value first.
///
/// # Example
///
/// ```
/// use shiftkit::ds::HistoryBuffer;
///
/// let mut buffer = HistoryBuffer::new();
/// buffer.insert_front(10.0);
/// buffer.insert_front(20.0);
///
/// assert_eq!(buffer.most_recent(), Some(20.0));
/// assert_eq!(buffer.len(), 2);
///
/// // Snapshots are independent of later mutation
/// let before = buffer.snapshot();
/// buffer.clear();
/// assert_eq!(before, vec![20.0, 10.0]);
/// assert!(buffer.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryBuffer {
    elements: VecDeque<f64>,
}

impl HistoryBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Creates an empty buffer with room for `capacity` values before
    /// reallocating.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftkit::ds::HistoryBuffer;
    ///
    /// let buffer = HistoryBuffer::with_capacity(16);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the number of values currently stored.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the buffer holds no values.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Prepends `value`. Existing values shift one position toward the tail
    /// with their relative order preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftkit::ds::HistoryBuffer;
    ///
    /// let mut buffer = HistoryBuffer::new();
    /// buffer.insert_front(1.0);
    /// buffer.insert_front(2.0);
    /// assert_eq!(buffer.snapshot(), vec![2.0, 1.0]);
    /// ```
    pub fn insert_front(&mut self, value: f64) {
        self.elements.push_front(value);
    }

    /// Keeps only the `max_size` most recent values and returns how many
    /// older values were discarded.
    ///
    /// Values at index `max_size` and beyond are removed; indices
    /// `0..max_size` are kept in unchanged order. If `max_size` is at least
    /// the current length this is a no-op returning `Ok(0)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `max_size` is negative. The buffer is
    /// left untouched in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftkit::ds::HistoryBuffer;
    ///
    /// let mut buffer = HistoryBuffer::new();
    /// for v in [1.0, 2.0, 3.0] {
    ///     buffer.insert_front(v);
    /// }
    ///
    /// assert_eq!(buffer.trim_to(5), Ok(0));
    /// assert_eq!(buffer.trim_to(1), Ok(2));
    /// assert_eq!(buffer.snapshot(), vec![3.0]);
    ///
    /// assert!(buffer.trim_to(-1).is_err());
    /// assert_eq!(buffer.len(), 1);
    /// ```
    pub fn trim_to(&mut self, max_size: i64) -> Result<usize, InvalidArgument> {
        if max_size < 0 {
            return Err(InvalidArgument::new(format!(
                "max_size must be >= 0, got {max_size}"
            )));
        }
        // Only fails when max_size exceeds the address space, which no
        // buffer can reach.
        let keep = usize::try_from(max_size).unwrap_or(usize::MAX);
        let evicted = self.elements.len().saturating_sub(keep);
        self.elements.truncate(keep);
        Ok(evicted)
    }

    /// Returns the most recently inserted value, if any.
    pub fn most_recent(&self) -> Option<f64> {
        self.elements.front().copied()
    }

    /// Returns an owned copy of the values in MRU order (index 0 = newest).
    ///
    /// The copy shares nothing with the buffer: mutating either side never
    /// affects the other.
    pub fn snapshot(&self) -> Vec<f64> {
        self.elements.iter().copied().collect()
    }

    /// Returns an iterator over the values in MRU order.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftkit::ds::HistoryBuffer;
    ///
    /// let mut buffer = HistoryBuffer::new();
    /// buffer.insert_front(1.0);
    /// buffer.insert_front(2.0);
    ///
    /// let sum: f64 = buffer.iter().sum();
    /// assert_eq!(sum, 3.0);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.elements.iter(),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.elements.len(), self.iter().count());
        assert_eq!(self.is_empty(), self.most_recent().is_none());
    }
}

/// Borrowed iterator over a [`HistoryBuffer`], from most recent to oldest.
///
/// Created by [`HistoryBuffer::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: vec_deque::Iter<'a, f64>,
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a HistoryBuffer {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[f64]) -> HistoryBuffer {
        let mut buffer = HistoryBuffer::new();
        for &v in values {
            buffer.insert_front(v);
        }
        buffer
    }

    #[test]
    fn new_buffer_is_empty() {
        let buffer = HistoryBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.most_recent(), None);
        assert_eq!(buffer.snapshot(), Vec::<f64>::new());
    }

    #[test]
    fn insert_front_orders_most_recent_first() {
        let buffer = filled(&[1.0, 2.0, 3.0]);
        assert_eq!(buffer.snapshot(), vec![3.0, 2.0, 1.0]);
        assert_eq!(buffer.most_recent(), Some(3.0));
    }

    #[test]
    fn trim_keeps_prefix_and_drops_tail() {
        let mut buffer = filled(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(buffer.trim_to(3), Ok(2));
        assert_eq!(buffer.snapshot(), vec![5.0, 4.0, 3.0]);
        buffer.debug_validate_invariants();
    }

    #[test]
    fn trim_at_or_above_len_is_noop() {
        let mut buffer = filled(&[1.0, 2.0]);
        assert_eq!(buffer.trim_to(2), Ok(0));
        assert_eq!(buffer.trim_to(100), Ok(0));
        assert_eq!(buffer.trim_to(i64::MAX), Ok(0));
        assert_eq!(buffer.snapshot(), vec![2.0, 1.0]);
    }

    #[test]
    fn trim_to_zero_empties_buffer() {
        let mut buffer = filled(&[1.0, 2.0]);
        assert_eq!(buffer.trim_to(0), Ok(2));
        assert!(buffer.is_empty());
    }

    #[test]
    fn trim_negative_is_rejected_without_mutation() {
        let mut buffer = filled(&[1.0, 2.0]);
        let err = buffer.trim_to(-1).unwrap_err();
        assert!(err.message().contains("-1"));
        assert_eq!(buffer.snapshot(), vec![2.0, 1.0]);

        assert!(buffer.trim_to(i64::MIN).is_err());
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn clear_removes_everything() {
        let mut buffer = filled(&[1.0, 2.0, 3.0]);
        buffer.clear();
        assert!(buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut buffer = filled(&[1.0, 2.0]);
        let snap = buffer.snapshot();
        buffer.insert_front(3.0);
        buffer.trim_to(1).unwrap();
        assert_eq!(snap, vec![2.0, 1.0]);
    }

    #[test]
    fn mutating_snapshot_leaves_buffer_intact() {
        let buffer = filled(&[1.0, 2.0]);
        let mut snap = buffer.snapshot();
        snap[0] = 99.0;
        snap.push(7.0);
        assert_eq!(buffer.snapshot(), vec![2.0, 1.0]);
    }

    #[test]
    fn nan_and_infinities_are_stored_verbatim() {
        let buffer = filled(&[f64::NEG_INFINITY, f64::NAN, f64::INFINITY]);
        let snap = buffer.snapshot();
        assert_eq!(snap[0], f64::INFINITY);
        assert!(snap[1].is_nan());
        assert_eq!(snap[2], f64::NEG_INFINITY);
    }

    // -----------------------------------------------------------------------
    // iter() / IntoIterator tests
    // -----------------------------------------------------------------------

    #[test]
    fn iter_matches_snapshot() {
        let buffer = filled(&[1.0, 2.0, 3.0]);
        let from_iter: Vec<_> = buffer.iter().collect();
        assert_eq!(from_iter, buffer.snapshot());
    }

    #[test]
    fn iter_exact_size() {
        let buffer = filled(&[1.0, 2.0]);
        let mut it = buffer.iter();
        assert_eq!(it.len(), 2);
        it.next();
        assert_eq!(it.len(), 1);
        it.next();
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
    }

    #[test]
    fn ref_into_iter_for_loop() {
        let buffer = filled(&[10.0, 20.0]);
        let mut sum = 0.0;
        for v in &buffer {
            sum += v;
        }
        assert_eq!(sum, 30.0);
        assert_eq!(buffer.len(), 2);
    }

    // -----------------------------------------------------------------------
    // PartialEq / Clone tests
    // -----------------------------------------------------------------------

    #[test]
    fn eq_compares_logical_content() {
        let a = filled(&[1.0, 2.0]);
        let mut b = HistoryBuffer::with_capacity(64);
        b.insert_front(1.0);
        b.insert_front(2.0);
        assert_eq!(a, b);

        b.insert_front(3.0);
        assert_ne!(a, b);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = filled(&[1.0]);
        let copy = original.clone();
        original.insert_front(2.0);
        assert_eq!(copy.snapshot(), vec![1.0]);
        assert_eq!(original.snapshot(), vec![2.0, 1.0]);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: snapshot is the reverse of insertion order
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_snapshot_is_reverse_insertion(
            values in prop::collection::vec(-1e9f64..1e9, 0..64)
        ) {
            let mut buffer = HistoryBuffer::new();
            for &v in &values {
                buffer.insert_front(v);
            }

            let expected: Vec<f64> = values.iter().rev().copied().collect();
            prop_assert_eq!(buffer.snapshot(), expected);
            prop_assert_eq!(buffer.len(), values.len());
        }

        /// Property: trim_to(n) keeps exactly the first min(n, len) values
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_trim_keeps_prefix(
            values in prop::collection::vec(-1e9f64..1e9, 0..64),
            n in 0i64..80
        ) {
            let mut buffer = HistoryBuffer::new();
            for &v in &values {
                buffer.insert_front(v);
            }
            let before = buffer.snapshot();

            let evicted = buffer.trim_to(n).unwrap();
            let keep = (n as usize).min(before.len());

            prop_assert_eq!(evicted, before.len() - keep);
            prop_assert_eq!(buffer.snapshot(), before[..keep].to_vec());
            buffer.debug_validate_invariants();
        }

        /// Property: negative lengths never mutate the buffer
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_negative_trim_rejected(
            values in prop::collection::vec(-1e9f64..1e9, 0..32),
            n in i64::MIN..0
        ) {
            let mut buffer = HistoryBuffer::new();
            for &v in &values {
                buffer.insert_front(v);
            }
            let before = buffer.snapshot();

            prop_assert!(buffer.trim_to(n).is_err());
            prop_assert_eq!(buffer.snapshot(), before);
        }
    }
}
