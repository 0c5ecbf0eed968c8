use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{UNKNOWN_DOCUMENT_KEY, UNKNOWN_LABEL};

pub const FILENAME_KEY: &str = "filename";
pub const DISPLAY_NAME_KEY: &str = "display_name";
pub const SOURCE_PATH_KEY: &str = "source_path";
pub const MOD_DATE_KEY: &str = "moddate";
pub const CREATION_DATE_KEY: &str = "creationdate";

/// Open metadata map attached to a fragment.
///
/// The well-known keys have typed accessors; everything else rides along untouched so the
/// whole map can be handed to citation consumers as-is. Empty strings read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns a non-empty string value for `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn filename(&self) -> Option<&str> {
        self.text(FILENAME_KEY)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.text(DISPLAY_NAME_KEY)
    }

    pub fn source_path(&self) -> Option<&str> {
        self.text(SOURCE_PATH_KEY)
    }

    /// Modification date rendered as text, if the key is present.
    pub fn mod_date(&self) -> Option<String> {
        self.0.get(MOD_DATE_KEY).map(value_to_text)
    }

    /// Creation date rendered as text, if the key is present.
    pub fn creation_date(&self) -> Option<String> {
        self.0.get(CREATION_DATE_KEY).map(value_to_text)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Renders a metadata value for a context block. `Null` reads as `Unknown`, like a missing label.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => UNKNOWN_LABEL.to_string(),
        other => other.to_string(),
    }
}

/// A chunk of source-document text plus provenance metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Fragment {
    pub fn new(content: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Key used to recognise fragments of the same source document.
    ///
    /// Display name, then filename, then a shared sentinel. Only deduplication uses this.
    pub fn document_key(&self) -> &str {
        self.metadata
            .display_name()
            .or_else(|| self.metadata.filename())
            .unwrap_or(UNKNOWN_DOCUMENT_KEY)
    }

    /// Human-readable source label for context blocks and citations.
    pub fn label(&self) -> &str {
        self.metadata
            .display_name()
            .or_else(|| self.metadata.filename())
            .unwrap_or(UNKNOWN_LABEL)
    }
}
