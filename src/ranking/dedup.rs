use std::collections::HashSet;

use tracing::debug;

use crate::document::Fragment;

/// Collapses fragments of the same source document to the first (best-ranked) one.
///
/// Relative order of first occurrences is preserved.
pub fn dedup(candidates: Vec<Fragment>) -> Vec<Fragment> {
    let total = candidates.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);

    let unique: Vec<Fragment> = candidates
        .into_iter()
        .filter(|fragment| seen.insert(fragment.document_key().to_string()))
        .collect();

    debug!(
        num_candidates = total,
        num_unique = unique.len(),
        "Deduplicated candidates by document"
    );

    unique
}
