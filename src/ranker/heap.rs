//! Comparator-driven binary min-heap.
//!
//! Unlike `std::collections::BinaryHeap`, the ordering lives in the heap
//! (a [`ScoreOrder`]) rather than in an `Ord` bound on the element, so
//! partially ordered scores and payloads without any ordering can be
//! stored directly.

use super::types::{NaturalOrder, Score, ScoreOrder, ScoredEntry};
use std::mem;

/// A binary min-heap of [`ScoredEntry`] values.
///
/// The entry with the lowest score (under `O`) is always at the root.
/// Entries with equal scores have no defined relative order.
///
/// # Examples
///
/// ```
/// use u_ranker::ranker::{ScoreHeap, ScoredEntry};
///
/// let mut heap = ScoreHeap::new();
/// heap.push(ScoredEntry::new(10, 1));
/// heap.push(ScoredEntry::new(20, 2));
/// heap.push(ScoredEntry::new(5, 3));
///
/// assert_eq!(heap.len(), 3);
/// assert_eq!(heap.pop().map(|e| e.into_parts()), Some((5, 3)));
/// ```
///
/// # Complexity
///
/// `push`, `pop` and `replace_min` are O(log n); `peek` is O(1).
#[derive(Debug, Clone)]
pub struct ScoreHeap<S, T, O = NaturalOrder> {
    entries: Vec<ScoredEntry<S, T>>,
    order: O,
}

impl<S: Score, T> ScoreHeap<S, T> {
    /// Creates an empty heap ordered by [`Score`].
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<S: Score, T> Default for ScoreHeap<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T, O: ScoreOrder<S>> ScoreHeap<S, T, O> {
    /// Creates an empty heap ordered by `order`.
    pub fn with_order(order: O) -> Self {
        Self {
            entries: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Number of entries in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The comparator this heap is ordered by.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the minimum entry without removing it.
    pub fn peek(&self) -> Option<&ScoredEntry<S, T>> {
        self.entries.first()
    }

    /// Inserts an entry.
    pub fn push(&mut self, entry: ScoredEntry<S, T>) {
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the minimum entry.
    pub fn pop(&mut self) -> Option<ScoredEntry<S, T>> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Replaces the minimum entry with `entry` and returns the evicted one.
    ///
    /// Equivalent to `pop` followed by `push`, but restores the heap with a
    /// single sift-down. On an empty heap this is a plain `push` and
    /// returns `None`.
    pub fn replace_min(&mut self, entry: ScoredEntry<S, T>) -> Option<ScoredEntry<S, T>> {
        match self.entries.first_mut() {
            Some(root) => {
                let evicted = mem::replace(root, entry);
                self.sift_down(0);
                Some(evicted)
            }
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    /// Iterates over entries in heap order (not sorted).
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredEntry<S, T>> {
        self.entries.iter()
    }

    /// Consumes the heap, returning entries in heap order (not sorted).
    pub fn into_vec(self) -> Vec<ScoredEntry<S, T>> {
        self.entries
    }

    /// Consumes the heap, returning entries sorted by ascending score.
    ///
    /// Equal scores end up in unspecified relative order.
    pub fn into_sorted_vec(self) -> Vec<ScoredEntry<S, T>> {
        let Self { mut entries, order } = self;
        entries.sort_unstable_by(|a, b| order.compare(a.score(), b.score()));
        entries
    }

    /// Checks the heap property: no entry ranks below its parent.
    ///
    /// When this holds, the root carries the minimum score.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self.less(i, parent)
        })
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.order.less(self.entries[a].score(), self.entries[b].score())
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.entries.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(smallest, pos) {
                break;
            }
            self.entries.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl<'a, S, T, O> IntoIterator for &'a ScoreHeap<S, T, O> {
    type Item = &'a ScoredEntry<S, T>;
    type IntoIter = std::slice::Iter<'a, ScoredEntry<S, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn drain_scores<S: Clone, T, O: ScoreOrder<S>>(heap: &mut ScoreHeap<S, T, O>) -> Vec<S> {
        let mut out = Vec::with_capacity(heap.len());
        while let Some(entry) = heap.pop() {
            out.push(entry.score().clone());
        }
        out
    }

    #[test]
    fn test_pop_returns_minimum() {
        let mut heap = ScoreHeap::new();
        heap.push(ScoredEntry::new(10i64, 1));
        heap.push(ScoredEntry::new(20i64, 2));
        heap.push(ScoredEntry::new(5i64, 3));

        assert_eq!(heap.len(), 3);
        let min = heap.pop().unwrap();
        assert_eq!(*min.score(), 5);
        assert_eq!(*min.value(), 3);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: ScoreHeap<u32, ()> = ScoreHeap::default();
        assert!(heap.is_empty());
        assert!(heap.peek().is_none());
        assert!(heap.pop().is_none());
        assert!(heap.is_valid_heap());
    }

    #[test]
    fn test_drain_is_ascending() {
        let mut heap = ScoreHeap::new();
        for s in [7, 3, 9, 1, 4, 4, 8, 0, 2] {
            heap.push(ScoredEntry::new(s, ()));
        }
        assert!(heap.is_valid_heap());
        assert_eq!(drain_scores(&mut heap), vec![0, 1, 2, 3, 4, 4, 7, 8, 9]);
    }

    #[test]
    fn test_replace_min() {
        let mut heap = ScoreHeap::new();
        for s in [3, 1, 2] {
            heap.push(ScoredEntry::new(s, s * 10));
        }

        let evicted = heap.replace_min(ScoredEntry::new(5, 50)).unwrap();
        assert_eq!(evicted.into_parts(), (1, 10));
        assert!(heap.is_valid_heap());
        assert_eq!(heap.peek().map(|e| *e.score()), Some(2));
        assert_eq!(drain_scores(&mut heap), vec![2, 3, 5]);
    }

    #[test]
    fn test_replace_min_on_empty_pushes() {
        let mut heap = ScoreHeap::new();
        assert!(heap.replace_min(ScoredEntry::new(1u8, "x")).is_none());
        assert_eq!(heap.len(), 1);
        assert_eq!(*heap.peek().unwrap().value(), "x");
    }

    #[test]
    fn test_custom_order_inverts_heap() {
        let mut heap = ScoreHeap::with_order(|a: &i32, b: &i32| b.cmp(a));
        for s in [4, 9, 1, 6] {
            heap.push(ScoredEntry::new(s, ()));
        }
        assert_eq!(drain_scores(&mut heap), vec![9, 6, 4, 1]);
    }

    #[test]
    fn test_float_scores_with_nan() {
        let mut heap = ScoreHeap::new();
        for s in [2.0f64, f64::NAN, -1.0, f64::INFINITY, 0.5] {
            heap.push(ScoredEntry::new(s, ()));
        }
        assert!(heap.is_valid_heap());
        let drained = drain_scores(&mut heap);
        assert_eq!(&drained[..4], &[-1.0, 0.5, 2.0, f64::INFINITY]);
        assert!(drained[4].is_nan());
    }

    #[test]
    fn test_iter_visits_every_entry() {
        let mut heap = ScoreHeap::with_capacity_and_order(4, NaturalOrder);
        for s in [3u32, 1, 2] {
            heap.push(ScoredEntry::new(s, s));
        }
        let mut seen: Vec<u32> = heap.iter().map(|e| *e.value()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!((&heap).into_iter().count(), 3);
        assert_eq!(heap.into_vec().len(), 3);
    }

    #[test]
    fn test_into_sorted_vec() {
        let mut heap = ScoreHeap::new();
        for s in [6u16, 2, 9, 2, 5] {
            heap.push(ScoredEntry::new(s, ()));
        }
        let scores: Vec<u16> = heap
            .into_sorted_vec()
            .into_iter()
            .map(|e| *e.score())
            .collect();
        assert_eq!(scores, vec![2, 2, 5, 6, 9]);
    }

    #[test]
    fn test_is_valid_heap_detects_violation() {
        let heap = ScoreHeap {
            entries: vec![ScoredEntry::new(5, ()), ScoredEntry::new(1, ())],
            order: NaturalOrder,
        };
        assert!(!heap.is_valid_heap());
    }

    proptest! {
        #[test]
        fn prop_drain_matches_sorted(scores in proptest::collection::vec(any::<i32>(), 0..200)) {
            let mut heap = ScoreHeap::new();
            for &s in &scores {
                heap.push(ScoredEntry::new(s, ()));
                prop_assert!(heap.is_valid_heap());
            }

            let mut expected = scores.clone();
            expected.sort_unstable();
            prop_assert_eq!(drain_scores(&mut heap), expected);
        }

        #[test]
        fn prop_replace_min_keeps_heap_valid(
            initial in proptest::collection::vec(any::<i16>(), 1..64),
            replacements in proptest::collection::vec(any::<i16>(), 0..64),
        ) {
            let mut heap = ScoreHeap::new();
            for &s in &initial {
                heap.push(ScoredEntry::new(s, ()));
            }
            for &s in &replacements {
                let min = *heap.peek().unwrap().score();
                let evicted = heap.replace_min(ScoredEntry::new(s, ())).unwrap();
                prop_assert_eq!(*evicted.score(), min);
                prop_assert!(heap.is_valid_heap());
                prop_assert_eq!(heap.len(), initial.len());
            }
        }
    }
}
