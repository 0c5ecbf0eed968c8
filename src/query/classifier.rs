use tracing::debug;

use super::lexicon::Lexicon;

/// Whether a question asks about the corpus as a whole or about something specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Broad,
    Specific,
}

/// Text to hand the retriever, plus how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub kind: QueryKind,
}

impl SearchQuery {
    pub fn is_broad(&self) -> bool {
        self.kind == QueryKind::Broad
    }
}

/// Rewrites broad questions to a generic anchor term so retrieval samples the corpus
/// instead of matching the user's wording.
#[derive(Debug, Clone, Copy)]
pub struct QueryClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> QueryClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn is_broad(&self, question: &str) -> bool {
        let lowered = question.to_lowercase();
        self.lexicon
            .broad_markers
            .iter()
            .any(|marker| lowered.contains(marker.as_str()))
    }

    /// Never fails: anything without a marker phrase is searched verbatim.
    pub fn classify(&self, question: &str) -> SearchQuery {
        if self.is_broad(question) {
            debug!(anchor = %self.lexicon.anchor_term, "Broad question, searching anchor term");
            SearchQuery {
                text: self.lexicon.anchor_term.clone(),
                kind: QueryKind::Broad,
            }
        } else {
            SearchQuery {
                text: question.to_string(),
                kind: QueryKind::Specific,
            }
        }
    }
}
