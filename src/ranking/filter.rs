use tracing::debug;

use super::error::OperatingPointError;
use super::types::ScoredFragment;
use crate::constants::{BROAD_CAP, BROAD_RATIO, PRECISE_CAP, PRECISE_RATIO};
use crate::document::Fragment;

/// Ratio/cap pair for the adaptive filter.
///
/// Two points are in use and neither supersedes the other: [`OperatingPoint::broad`] for a
/// generous citation set and [`OperatingPoint::precise`] for a minimal one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Fraction of the top score an entry must reach to be kept.
    pub ratio: f32,
    /// Maximum number of entries kept.
    pub cap: usize,
}

impl Default for OperatingPoint {
    fn default() -> Self {
        Self::broad()
    }
}

impl OperatingPoint {
    pub fn new(ratio: f32, cap: usize) -> Self {
        Self { ratio, cap }
    }

    /// Ratio 0.7, cap 30.
    pub fn broad() -> Self {
        Self::new(BROAD_RATIO, BROAD_CAP)
    }

    /// Ratio 0.6, cap 3.
    pub fn precise() -> Self {
        Self::new(PRECISE_RATIO, PRECISE_CAP)
    }

    pub fn validate(&self) -> Result<(), OperatingPointError> {
        if !self.ratio.is_finite() || !(0.0..=1.0).contains(&self.ratio) {
            return Err(OperatingPointError::InvalidRatio { value: self.ratio });
        }
        if self.cap == 0 {
            return Err(OperatingPointError::InvalidCap { value: self.cap });
        }
        Ok(())
    }

    pub fn apply(&self, scored: Vec<ScoredFragment>) -> Vec<Fragment> {
        filter(scored, self.ratio, self.cap)
    }
}

/// Keeps entries scoring at least `ratio` of the first (top) entry, then truncates to `cap`.
///
/// `scored` must already be sorted by descending score, as [`LexicalScorer::rerank`]
/// returns it.
///
/// [`LexicalScorer::rerank`]: super::LexicalScorer::rerank
pub fn filter(scored: Vec<ScoredFragment>, ratio: f32, cap: usize) -> Vec<Fragment> {
    let Some(top_score) = scored.first().map(|s| s.score) else {
        return Vec::new();
    };

    let total = scored.len();
    let kept: Vec<Fragment> = scored
        .into_iter()
        .filter(|s| s.within_ratio(top_score, ratio))
        .take(cap)
        .map(|s| s.fragment)
        .collect();

    debug!(
        top_score = top_score,
        ratio = ratio,
        cap = cap,
        total = total,
        kept = kept.len(),
        "Adaptive filter applied"
    );

    kept
}
