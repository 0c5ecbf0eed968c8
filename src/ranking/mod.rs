//! Candidate deduplication, lexical reranking and adaptive filtering.
//!
//! These stages turn a noisy nearest-neighbour candidate list into a short, ordered set of
//! fragments:
//!
//! 1. [`dedup`] keeps the best-ranked fragment per source document.
//! 2. [`LexicalScorer`] combines the retriever's rank with literal, reversed, loose-substring
//!    and bigram matches of the question terms.
//! 3. [`OperatingPoint::apply`] keeps everything within a ratio of the top score, up to a cap.
//!
//! # Reversed text
//!
//! PDF extraction of right-to-left script often emits locally reversed character runs. The
//! reversed-term and reversed-bigram scores recover those matches. They are computed by
//! [`reversed_match`] only and are switched off with [`ScoringWeights::reversed_matching`].
//!
//! All stages are pure and synchronous, and an empty input is never an error.

pub mod dedup;
pub mod error;
pub mod filter;
pub mod scorer;
pub mod types;


pub use dedup::dedup;
pub use error::OperatingPointError;
pub use filter::{OperatingPoint, filter};
pub use scorer::{LexicalScorer, ScoringWeights, literal_match, loose_match, reversed_match};
pub use types::ScoredFragment;
