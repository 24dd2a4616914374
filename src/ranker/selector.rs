//! Bounded top-N selection.

use super::heap::ScoreHeap;
use super::types::{NaturalOrder, Score, ScoreOrder, ScoredEntry};
use crate::error::RankerError;
use log::{debug, trace};

/// Upper bound on slots reserved up front; larger rankers grow on demand.
const PREALLOC_LIMIT: usize = 1024;

/// Retains the `capacity` highest-scoring entries offered to it.
///
/// Backed by a [`ScoreHeap`] of at most `capacity` entries whose root is
/// the weakest retained entry (the admission bar). A newcomer is admitted
/// when there is a free slot, or when its score is **strictly** greater
/// than the bar, in which case it evicts the bar. A newcomer that only ties
/// the bar is discarded, so on an exact tie the entry that arrived first
/// stays.
///
/// # Examples
///
/// ```
/// use u_ranker::ranker::Ranker;
///
/// let mut ranker = Ranker::new(3);
/// ranker.add(10, "a");
/// ranker.add(20, "b");
/// ranker.add(15, "c");
/// ranker.add(25, "d");
/// ranker.add(5, "e");
///
/// assert_eq!(ranker.top_n(), vec!["d", "b", "c"]);
/// ```
///
/// # Complexity
///
/// - `add`: O(log N) when admitted, O(1) when rejected
/// - `top_n`: O(N log N), sorting a snapshot of the heap
///
/// # Thread Safety
///
/// All mutation goes through `&mut self`. Callers that share a ranker
/// across threads must serialize access themselves (e.g. a `Mutex`).
#[derive(Debug, Clone)]
pub struct Ranker<S, T, O = NaturalOrder> {
    capacity: usize,
    heap: ScoreHeap<S, T, O>,
}

impl<S: Score, T> Ranker<S, T> {
    /// Creates an empty ranker ordered by [`Score`].
    ///
    /// A capacity of zero is valid; such a ranker never retains anything.
    pub fn new(capacity: usize) -> Self {
        Self::with_order(capacity, NaturalOrder)
    }

    /// Creates a ranker from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`RankerError::InvalidCapacity`] if `capacity` is negative or
    /// does not fit in `usize`.
    ///
    /// ```
    /// use u_ranker::{Ranker, RankerError};
    ///
    /// assert!(Ranker::<i64, ()>::try_new(4).is_ok());
    /// assert_eq!(
    ///     Ranker::<i64, ()>::try_new(-1).unwrap_err(),
    ///     RankerError::InvalidCapacity(-1),
    /// );
    /// ```
    pub fn try_new(capacity: i64) -> Result<Self, RankerError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| RankerError::InvalidCapacity(capacity))?;
        Ok(Self::new(capacity))
    }
}

impl<S, T, O: ScoreOrder<S>> Ranker<S, T, O> {
    /// Creates an empty ranker ordered by `order`.
    pub fn with_order(capacity: usize, order: O) -> Self {
        debug!("creating ranker with capacity {capacity}");
        Self {
            capacity,
            heap: ScoreHeap::with_capacity_and_order(capacity.min(PREALLOC_LIMIT), order),
        }
    }

    /// Offers an entry. Returns `true` if it was retained.
    ///
    /// When the ranker is full, the current minimum is evicted to make room.
    pub fn add(&mut self, score: S, value: T) -> bool {
        if !self.would_admit(&score) {
            return false;
        }

        let entry = ScoredEntry::new(score, value);
        if self.heap.len() < self.capacity {
            self.heap.push(entry);
            trace!("admitted entry ({}/{})", self.heap.len(), self.capacity);
        } else {
            self.heap.replace_min(entry);
            trace!("admitted entry, evicted previous minimum");
        }
        true
    }

    /// Returns `true` if [`add`](Self::add) would retain an entry with
    /// `score`. Does not modify the ranker.
    pub fn would_admit(&self, score: &S) -> bool {
        if self.heap.len() < self.capacity {
            return true;
        }
        match self.heap.peek() {
            Some(min) => self.heap.order().greater(score, min.score()),
            None => false,
        }
    }

    /// Retained values, highest score first.
    ///
    /// Sorts a snapshot, so the ranker is unchanged and can keep accepting
    /// entries. Entries with equal scores come out in unspecified order.
    pub fn top_n(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.ranked()
            .into_iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Retained entries by reference, highest score first.
    pub fn ranked(&self) -> Vec<&ScoredEntry<S, T>> {
        let order = self.heap.order();
        let mut entries: Vec<&ScoredEntry<S, T>> = self.heap.iter().collect();
        entries.sort_unstable_by(|a, b| order.compare(b.score(), a.score()));
        entries
    }

    /// Consumes the ranker, returning retained entries highest score first.
    pub fn into_ranked(self) -> Vec<ScoredEntry<S, T>> {
        let mut entries = self.heap.into_sorted_vec();
        entries.reverse();
        entries
    }

    /// Maximum number of entries retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing has been retained.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` once every slot is taken and newcomers must beat
    /// [`min_score`](Self::min_score).
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Lowest retained score, if any.
    pub fn min_score(&self) -> Option<&S> {
        self.heap.peek().map(ScoredEntry::score)
    }

    /// The backing heap.
    pub fn heap(&self) -> &ScoreHeap<S, T, O> {
        &self.heap
    }
}

impl<S, T, O: ScoreOrder<S>> Extend<(S, T)> for Ranker<S, T, O> {
    fn extend<I: IntoIterator<Item = (S, T)>>(&mut self, iter: I) {
        for (score, value) in iter {
            self.add(score, value);
        }
    }
}
