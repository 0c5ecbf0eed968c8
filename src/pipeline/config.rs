use crate::constants::{DEFAULT_FILE_SERVING_PREFIX, DEFAULT_TOP_K};
use crate::query::Lexicon;
use crate::ranking::{OperatingPoint, ScoringWeights};

use super::error::PipelineError;

/// Configuration data passed into [`RetrievalPipeline`](super::RetrievalPipeline).
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Candidates requested from the retriever. Default: `100`.
    pub top_k: usize,
    /// Adaptive filter ratio/cap. Default: [`OperatingPoint::broad`].
    pub operating_point: OperatingPoint,
    pub weights: ScoringWeights,
    pub lexicon: Lexicon,
    /// URL prefix for citation file links.
    pub serving_prefix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            operating_point: OperatingPoint::broad(),
            weights: ScoringWeights::default(),
            lexicon: Lexicon::default(),
            serving_prefix: DEFAULT_FILE_SERVING_PREFIX.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Default configuration at the precise (0.6 / 3) operating point.
    pub fn precise() -> Self {
        Self::default().with_operating_point(OperatingPoint::precise())
    }

    pub fn with_operating_point(mut self, point: OperatingPoint) -> Self {
        self.operating_point = point;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_serving_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.serving_prefix = prefix.into();
        self
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.top_k == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "top_k must be at least 1".to_string(),
            });
        }
        self.operating_point
            .validate()
            .map_err(|e| PipelineError::InvalidConfig {
                reason: e.to_string(),
            })
    }
}
