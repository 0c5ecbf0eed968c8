//! Verdict library crate: retrieval, reranking and citation assembly for answering
//! questions over a corpus of court rulings.
//!
//! # Pipeline
//!
//! A question flows through these stages:
//!
//! 1. [`QueryClassifier`] decides whether the question is broad (about the corpus as a
//!    whole) and picks the search text.
//! 2. A [`FragmentRetriever`] returns the nearest `k` candidate fragments.
//! 3. [`dedup`] keeps the first fragment of each document.
//! 4. [`LexicalScorer`] reranks by retrieval rank plus literal, reversed and loose term
//!    matches and adjacent-pair (bigram) matches.
//! 5. [`OperatingPoint`] keeps fragments within a ratio of the top score, up to a cap.
//! 6. [`CitationAssembler`] renders the numbered context and one [`Citation`] per fragment.
//!
//! [`RetrievalPipeline`] runs all of it from a [`PipelineConfig`];
//! [`LegalRagService`] adds prompting and generation through a [`ChatModel`].
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod answer;
pub mod citation;
pub mod config;
pub mod constants;
pub mod document;
pub mod generation;
pub mod pipeline;
pub mod query;
pub mod ranking;
pub mod retrieval;

pub use answer::{Answer, LegalRagService, ServiceError, StreamEvent, build_messages, clean_answer};
pub use citation::{AssembledContext, Citation, CitationAssembler, resolve_file_url};
pub use config::{Config, ConfigError};
pub use document::{Fragment, Metadata};
#[cfg(any(test, feature = "mock"))]
pub use generation::MockChatModel;
pub use generation::{
    ChatBackend, ChatModel, GenerationError, Message, OllamaChatModel, OpenAiChatModel, Role,
    SingleShot, TokenStream,
};
pub use pipeline::{PipelineConfig, PipelineError, RetrievalPipeline};
pub use query::{Lexicon, QueryClassifier, QueryKind, QueryTerms, SearchQuery};
pub use ranking::{LexicalScorer, OperatingPoint, ScoredFragment, ScoringWeights, dedup, filter};
#[cfg(any(test, feature = "mock"))]
pub use retrieval::{MockRetriever, RecordedSearch};
pub use retrieval::{FragmentRetriever, RetrievalError};
