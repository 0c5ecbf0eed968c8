use crate::document::Fragment;

/// Fragment annotated with its rerank score.
///
/// Scores are not probabilities; only their order and ratio to the top score matter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFragment {
    /// The candidate fragment.
    pub fragment: Fragment,
    /// Hybrid lexical/positional score.
    pub score: f32,
}

impl ScoredFragment {
    pub fn new(fragment: Fragment, score: f32) -> Self {
        Self { fragment, score }
    }

    /// Returns `true` if `score >= top_score * ratio`.
    pub fn within_ratio(&self, top_score: f32, ratio: f32) -> bool {
        self.score >= top_score * ratio
    }
}
