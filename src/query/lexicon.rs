use std::collections::HashSet;

use crate::constants::{
    BROAD_ANCHOR_TERM, DEFAULT_BROAD_MARKERS, DEFAULT_STOPWORDS, INSEPARABLE_PREFIXES,
    PREFIX_STRIP_MIN_CHARS,
};

/// Static word lists driving classification and tokenization.
///
/// Built once and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub stopwords: HashSet<String>,
    /// Lowercase phrases that mark a question about the corpus as a whole.
    pub broad_markers: Vec<String>,
    /// Search text substituted for broad questions.
    pub anchor_term: String,
    /// One-letter prefixes stripped from long tokens.
    pub prefixes: Vec<char>,
    /// Tokens must be longer than this (in characters) to have a prefix stripped.
    pub prefix_strip_min_chars: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            broad_markers: DEFAULT_BROAD_MARKERS.iter().map(|s| s.to_string()).collect(),
            anchor_term: BROAD_ANCHOR_TERM.to_string(),
            prefixes: INSEPARABLE_PREFIXES.to_vec(),
            prefix_strip_min_chars: PREFIX_STRIP_MIN_CHARS,
        }
    }
}

impl Lexicon {
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_broad_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.broad_markers = markers
            .into_iter()
            .map(|m| m.into().to_lowercase())
            .collect();
        self
    }

    pub fn with_anchor_term(mut self, anchor: impl Into<String>) -> Self {
        self.anchor_term = anchor.into();
        self
    }
}
