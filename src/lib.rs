//! Bounded top-N selection over streams of scored items.
//!
//! Feed a [`Ranker`] `(score, value)` pairs one at a time; it keeps only
//! the N best and returns them in descending score order on demand.
//!
//! - **Generic scores**: integers, floats, `ordered-float` wrappers, or any
//!   `rust_decimal::Decimal` (`decimal` feature), or any type implementing
//!   [`ranker::Score`].
//! - **Custom ordering**: any `Fn(&S, &S) -> Ordering` works as a
//!   comparator via [`ranker::ScoreOrder`].
//! - **Opaque payloads**: values are never inspected or compared.
//!
//! ```
//! use u_ranker::Ranker;
//!
//! let mut ranker = Ranker::new(2);
//! ranker.extend([(3, "c"), (9, "i"), (1, "a"), (7, "g")]);
//! assert_eq!(ranker.top_n(), vec!["i", "g"]);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ranker::ScoredEntry`].
//! - `decimal`: [`ranker::Score`] for `rust_decimal::Decimal`, for
//!   arbitrary-precision scores.

pub mod error;
pub mod ranker;

pub use error::RankerError;
pub use ranker::Ranker;
