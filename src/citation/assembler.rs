use std::path::Path;

use tracing::debug;

use super::types::{AssembledContext, Citation};
use crate::constants::DEFAULT_FILE_SERVING_PREFIX;
use crate::document::Fragment;

/// Renders filtered fragments into a context block and citation records.
#[derive(Debug, Clone)]
pub struct CitationAssembler {
    serving_prefix: String,
}

impl Default for CitationAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_SERVING_PREFIX)
    }
}

impl CitationAssembler {
    /// `serving_prefix` is the URL under which source files are served; a trailing `/` is
    /// ignored.
    pub fn new(serving_prefix: impl Into<String>) -> Self {
        let prefix: String = serving_prefix.into();
        Self {
            serving_prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn serving_prefix(&self) -> &str {
        &self.serving_prefix
    }

    /// Numbers `fragments` in order and builds the context text and citations.
    ///
    /// Touches the filesystem once per fragment to decide whether its file link resolves.
    pub fn assemble(&self, fragments: &[Fragment]) -> AssembledContext {
        if fragments.is_empty() {
            return AssembledContext::default();
        }

        let mut blocks = Vec::with_capacity(fragments.len());
        let mut citations = Vec::with_capacity(fragments.len());

        for (idx, fragment) in fragments.iter().enumerate() {
            let id = format!("[{}]", idx + 1);
            let label = fragment.label();
            let source_path = fragment.metadata.source_path().unwrap_or_default();

            blocks.push(render_block(&id, label, fragment));

            citations.push(Citation {
                id,
                filename: label.to_string(),
                url: resolve_file_url(&self.serving_prefix, source_path),
                source_path: source_path.to_string(),
                metadata: fragment.metadata.clone(),
            });
        }

        debug!(
            num_citations = citations.len(),
            with_url = citations.iter().filter(|c| c.has_url()).count(),
            "Assembled context"
        );

        AssembledContext {
            context_text: blocks.join("\n\n"),
            citations,
        }
    }
}

fn render_block(id: &str, label: &str, fragment: &Fragment) -> String {
    let mut dates = String::new();
    if let Some(date) = fragment.metadata.mod_date() {
        dates.push_str("\nDate: ");
        dates.push_str(&date);
    }
    if let Some(date) = fragment.metadata.creation_date() {
        dates.push_str("\nCreated: ");
        dates.push_str(&date);
    }

    format!(
        "--- DOCUMENT {id} ---\nSource: {label}{dates}\nContent:\n{content}\n--- END {id} ---",
        content = fragment.content
    )
}

/// `"{prefix}/{basename}"` when `source_path` names an existing file, else empty.
///
/// I/O errors during the check read as "absent".
pub fn resolve_file_url(prefix: &str, source_path: &str) -> String {
    if source_path.is_empty() {
        return String::new();
    }

    let path = Path::new(source_path);
    if !path.try_exists().unwrap_or(false) {
        return String::new();
    }

    match path.file_name() {
        Some(name) => format!(
            "{}/{}",
            prefix.trim_end_matches('/'),
            name.to_string_lossy()
        ),
        None => String::new(),
    }
}
