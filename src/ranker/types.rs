//! Core score abstractions and the scored entry type.
//!
//! [`Score`] and [`ScoreOrder`] define the contract between the generic
//! heap and whatever numeric representation the caller ranks by.

use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;

/// A value that can be ranked.
///
/// Only a three-way comparison is required; the ranker never performs
/// arithmetic on scores. Implementations exist for every primitive integer,
/// for `f32`/`f64`, for the `ordered-float` wrappers, and, with the
/// `decimal` feature, for `rust_decimal::Decimal`.
///
/// Floats are compared with IEEE 754 `totalOrder`, so NaN never breaks the
/// heap: positive NaN ranks above `+inf` and negative NaN below `-inf`.
///
/// # Implementing
///
/// Arbitrary-precision decimals (or any other domain score) only need to
/// provide the comparison:
///
/// ```
/// use std::cmp::Ordering;
/// use u_ranker::ranker::Score;
///
/// /// Fixed-point amount with four decimal places.
/// #[derive(Debug, Clone, Copy)]
/// struct Amount { units: i128 }
///
/// impl Score for Amount {
///     fn score_cmp(&self, other: &Self) -> Ordering {
///         self.units.cmp(&other.units)
///     }
/// }
/// ```
///
/// A type from another crate cannot implement `Score` downstream. Rank it
/// with an explicit comparator instead:
///
/// ```
/// use std::time::Duration;
/// use u_ranker::ranker::Ranker;
///
/// let mut slowest = Ranker::with_order(2, |a: &Duration, b: &Duration| a.cmp(b));
/// slowest.add(Duration::from_millis(120), "GET /");
/// slowest.add(Duration::from_millis(900), "POST /upload");
/// slowest.add(Duration::from_millis(45), "GET /health");
/// assert_eq!(slowest.top_n(), vec!["POST /upload", "GET /"]);
/// ```
pub trait Score {
    /// Compares two scores. `Greater` means `self` ranks higher.
    fn score_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_score_for_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Score for $t {
                #[inline]
                fn score_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_score_for_ord!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    OrderedFloat<f32>,
    OrderedFloat<f64>,
    NotNan<f32>,
    NotNan<f64>,
);

#[cfg(feature = "decimal")]
impl_score_for_ord!(rust_decimal::Decimal);

impl Score for f32 {
    #[inline]
    fn score_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Score for f64 {
    #[inline]
    fn score_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<S: Score + ?Sized> Score for &S {
    #[inline]
    fn score_cmp(&self, other: &Self) -> Ordering {
        (**self).score_cmp(*other)
    }
}

/// Comparator capability used by [`ScoreHeap`](super::ScoreHeap) and
/// [`Ranker`](super::Ranker).
///
/// Any `Fn(&S, &S) -> Ordering` closure is a `ScoreOrder<S>`, so a custom
/// ordering can be supplied without a newtype:
///
/// ```
/// use u_ranker::ranker::Ranker;
///
/// // Rank strings by length.
/// let mut ranker = Ranker::with_order(2, |a: &String, b: &String| a.len().cmp(&b.len()));
/// ranker.add("abc".to_string(), 1);
/// ranker.add("a".to_string(), 2);
/// ranker.add("abcdef".to_string(), 3);
/// assert_eq!(ranker.top_n(), vec![3, 1]);
/// ```
pub trait ScoreOrder<S: ?Sized> {
    /// Three-way comparison. `Greater` means `a` ranks above `b`.
    fn compare(&self, a: &S, b: &S) -> Ordering;

    /// Returns `true` if `a` ranks strictly below `b`.
    #[inline]
    fn less(&self, a: &S, b: &S) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns `true` if `a` ranks strictly above `b`.
    #[inline]
    fn greater(&self, a: &S, b: &S) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// Orders scores by their [`Score`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<S: Score + ?Sized> ScoreOrder<S> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &S, b: &S) -> Ordering {
        a.score_cmp(b)
    }
}

impl<S: ?Sized, F> ScoreOrder<S> for F
where
    F: Fn(&S, &S) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &S, b: &S) -> Ordering {
        self(a, b)
    }
}

/// An immutable `(score, value)` pair held by the heap.
///
/// The value is an opaque payload; only the score is ever inspected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredEntry<S, T> {
    score: S,
    value: T,
}

impl<S, T> ScoredEntry<S, T> {
    pub fn new(score: S, value: T) -> Self {
        Self { score, value }
    }

    pub fn score(&self) -> &S {
        &self.score
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits the entry into `(score, value)`.
    pub fn into_parts(self) -> (S, T) {
        (self.score, self.value)
    }
}

impl<S, T> From<(S, T)> for ScoredEntry<S, T> {
    fn from((score, value): (S, T)) -> Self {
        Self::new(score, value)
    }
}
