use serde::{Deserialize, Serialize};

use crate::document::Metadata;

/// Citation record exposed to clients alongside an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Bracketed 1-based id, e.g. `"[1]"`.
    pub id: String,
    /// Display label of the source document.
    pub filename: String,
    /// Link to the served file, or empty when the file is not on disk.
    pub url: String,
    pub source_path: String,
    pub metadata: Metadata,
}

impl Citation {
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Context text plus the parallel citation list. `citations[i]` is block `[i + 1]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledContext {
    pub context_text: String,
    pub citations: Vec<Citation>,
}

impl AssembledContext {
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    pub fn num_sources(&self) -> usize {
        self.citations.len()
    }

    pub fn into_parts(self) -> (String, Vec<Citation>) {
        (self.context_text, self.citations)
    }
}
