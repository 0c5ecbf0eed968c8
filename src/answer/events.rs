use serde::{Deserialize, Serialize};

use crate::citation::Citation;

/// One line of a streamed answer: the citations first, then answer tokens.
///
/// Serialized as `{"type": "citations", "data": [...]}` or `{"type": "token", "data": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum StreamEvent {
    Citations(Vec<Citation>),
    Token(String),
}

impl StreamEvent {
    /// JSON encoding followed by `\n`.
    pub fn to_ndjson_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}
