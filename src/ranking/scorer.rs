use std::cmp::Ordering;

use tracing::debug;

use super::types::ScoredFragment;
use crate::constants::{
    BIGRAM_WEIGHT, LITERAL_TERM_WEIGHT, LOOSE_TERM_MIN_CHARS, LOOSE_TERM_WEIGHT,
    REVERSED_BIGRAM_WEIGHT, REVERSED_TERM_WEIGHT,
};
use crate::document::Fragment;
use crate::query::{QueryTerms, reverse_text};

/// Per-category score increments.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub literal_term: f32,
    pub reversed_term: f32,
    pub loose_term: f32,
    /// Tokens must be longer than this (in characters) to earn the loose bonus.
    pub loose_min_chars: usize,
    pub bigram: f32,
    pub reversed_bigram: f32,
    /// Enables the reversed-text terms.
    pub reversed_matching: bool,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            literal_term: LITERAL_TERM_WEIGHT,
            reversed_term: REVERSED_TERM_WEIGHT,
            loose_term: LOOSE_TERM_WEIGHT,
            loose_min_chars: LOOSE_TERM_MIN_CHARS,
            bigram: BIGRAM_WEIGHT,
            reversed_bigram: REVERSED_BIGRAM_WEIGHT,
            reversed_matching: true,
        }
    }
}

impl ScoringWeights {
    pub fn without_reversed_matching(mut self) -> Self {
        self.reversed_matching = false;
        self
    }
}

/// `needle` occurs verbatim in `content`. Case-sensitive; content is not normalised.
#[inline]
pub fn literal_match(needle: &str, content: &str) -> bool {
    content.contains(needle)
}

/// The character-reversed `needle` occurs in `content`.
#[inline]
pub fn reversed_match(needle: &str, content: &str) -> bool {
    content.contains(reverse_text(needle).as_str())
}

/// `needle` occurs in `compact_content`, the content with all whitespace removed.
#[inline]
pub fn loose_match(needle: &str, compact_content: &str) -> bool {
    compact_content.contains(needle)
}

/// Hybrid rank + lexical scorer.
#[derive(Debug, Clone, Default)]
pub struct LexicalScorer {
    weights: ScoringWeights,
}

impl LexicalScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Base prior from the retriever's ordering: `(n - idx) / n`, in `(0, 1]`.
    pub fn rank_score(idx: usize, n: usize) -> f32 {
        if n == 0 {
            return 0.0;
        }
        (n - idx.min(n)) as f32 / n as f32
    }

    /// Lexical score of one fragment's content, excluding the rank prior.
    ///
    /// Each token or bigram contributes to each category at most once.
    pub fn lexical_score(&self, terms: &QueryTerms, content: &str) -> f32 {
        let w = &self.weights;
        let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
        let mut score = 0.0;

        for token in terms.tokens() {
            if literal_match(token, content) {
                score += w.literal_term;
            }
            if w.reversed_matching && reversed_match(token, content) {
                score += w.reversed_term;
            }
            if token.chars().count() > w.loose_min_chars && loose_match(token, &compact) {
                score += w.loose_term;
            }
        }

        for bigram in terms.bigrams() {
            if literal_match(bigram, content) {
                score += w.bigram;
            }
            if w.reversed_matching && reversed_match(bigram, content) {
                score += w.reversed_bigram;
            }
        }

        score
    }

    /// Scores deduplicated candidates and sorts them by descending score.
    ///
    /// The sort is stable, so equal scores keep retrieval order.
    pub fn rerank(&self, candidates: Vec<Fragment>, terms: &QueryTerms) -> Vec<ScoredFragment> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let n = candidates.len();
        let mut scored: Vec<ScoredFragment> = candidates
            .into_iter()
            .enumerate()
            .map(|(idx, fragment)| {
                let score = Self::rank_score(idx, n) + self.lexical_score(terms, &fragment.content);
                ScoredFragment::new(fragment, score)
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(
            num_candidates = n,
            num_tokens = terms.tokens().len(),
            num_bigrams = terms.bigrams().len(),
            top_score = scored.first().map(|s| s.score),
            "Lexical rerank complete"
        );

        scored
    }
}
