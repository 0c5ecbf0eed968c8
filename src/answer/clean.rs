use std::collections::HashSet;

/// Leading phrases removed from an answer; only the first match is stripped.
const PREAMBLES: &[&str] = &[
    "i'll answer",
    "i will answer",
    "i'll answer your question",
    "i will answer your question",
    "let me answer",
    "here's the answer",
    "the answer is",
    "answer:",
    "question:",
    "תשובה:",
    "שאלה:",
];

/// Sentences containing any of these are dropped.
const META_PHRASES: &[&str] = &[
    "i'll answer",
    "i will answer",
    "directly in hebrew",
    "without writing in english",
    "repeating the question",
];

/// Removes preambles, meta sentences and repeated sentences from a model answer.
///
/// Sentences are split on `.`, compared case-insensitively and rejoined with `". "`. A
/// non-empty result always ends with `.`.
pub fn clean_answer(answer: &str) -> String {
    let mut text = answer.trim();
    if text.is_empty() {
        return String::new();
    }

    for preamble in PREAMBLES {
        if let Some(rest) = strip_prefix_ignore_case(text, preamble) {
            text = rest.trim();
            if let Some(rest) = text.strip_prefix(':') {
                text = rest.trim();
            }
            break;
        }
    }

    let mut seen = HashSet::new();
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let lower = s.to_lowercase();
            !META_PHRASES.iter().any(|meta| lower.contains(meta)) && seen.insert(lower)
        })
        .collect();

    let mut cleaned = sentences.join(". ");
    if !cleaned.is_empty() && !cleaned.ends_with('.') {
        cleaned.push('.');
    }
    cleaned
}

/// Strips `prefix` (lowercase) from `text`, comparing the same number of characters
/// case-insensitively.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let n = prefix.chars().count();
    let end = match text.char_indices().nth(n) {
        Some((idx, _)) => idx,
        None if text.chars().count() == n => text.len(),
        None => return None,
    };

    (text[..end].to_lowercase() == prefix).then(|| &text[end..])
}
