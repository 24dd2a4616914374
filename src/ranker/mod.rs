//! Bounded top-N selection.
//!
//! Keeps the N highest-scoring entries of an arbitrarily long stream in
//! O(N) memory. A min-heap of at most N entries holds the retained set;
//! its root is the weakest survivor, so deciding whether a newcomer
//! qualifies costs a single comparison, and admitting it costs one
//! O(log N) sift.
//!
//! # Key Types
//!
//! - [`Ranker`]: the selector (`add`, `top_n`)
//! - [`ScoreHeap`]: the comparator-driven min-heap backing it
//! - [`Score`] / [`ScoreOrder`]: how scores are compared
//! - [`ScoredEntry`]: a `(score, value)` pair
//!
//! # Tie Policy
//!
//! A newcomer must score **strictly** higher than the current minimum to
//! evict it. On an exact tie at the boundary the earlier entry is kept.
//! Among retained entries, equal scores have no defined order.
//!
//! # References
//!
//! - Williams (1964), "Algorithm 232: Heapsort"
//! - Knuth, *The Art of Computer Programming*, Vol. 3, §5.2.3

mod heap;
mod selector;
mod types;

pub use heap::ScoreHeap;
pub use selector::Ranker;
pub use types::{NaturalOrder, Score, ScoreOrder, ScoredEntry};
