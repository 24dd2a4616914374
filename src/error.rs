//! Error types.

use thiserror::Error;

/// Errors raised when constructing a [`Ranker`](crate::ranker::Ranker).
///
/// Once constructed, a ranker has no fallible operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankerError {
    #[error("capacity must be a non-negative integer that fits in usize, got {0}")]
    InvalidCapacity(i64),
}
