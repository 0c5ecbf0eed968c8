//! Question analysis: broad-question detection and search-term extraction.
//!
//! [`QueryClassifier`] decides what text is sent to the retriever; [`QueryTerms`] holds the
//! filtered tokens and bigrams the lexical reranker matches against fragment content. Both
//! read their word lists from a [`Lexicon`].

pub mod classifier;
pub mod lexicon;
pub mod terms;


pub use classifier::{QueryClassifier, QueryKind, SearchQuery};
pub use lexicon::Lexicon;
pub use terms::{QueryTerms, reverse_text};
