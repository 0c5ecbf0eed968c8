use super::lexicon::Lexicon;
use crate::constants::TOKEN_TRIM_CHARS;

/// Filtered question tokens and their adjacent-pair bigrams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    tokens: Vec<String>,
    bigrams: Vec<String>,
}

impl QueryTerms {
    /// Tokenizes `question` against `lexicon`.
    ///
    /// Tokens are whitespace-split, trimmed of surrounding punctuation and lowercased. Tokens
    /// longer than `prefix_strip_min_chars` lose a leading inseparable prefix. A token is dropped
    /// when its stripped form is a stopword or a single character, or when the raw token is a
    /// stopword. Survivors keep their stripped form.
    pub fn extract(question: &str, lexicon: &Lexicon) -> Self {
        let tokens: Vec<String> = question
            .split_whitespace()
            .map(|raw| raw.trim_matches(TOKEN_TRIM_CHARS).to_lowercase())
            .filter_map(|raw| {
                let stripped = strip_prefix(&raw, lexicon);
                let rejected = stripped.chars().count() <= 1
                    || lexicon.is_stopword(stripped)
                    || lexicon.is_stopword(&raw);
                (!rejected).then(|| stripped.to_string())
            })
            .collect();

        let bigrams = tokens
            .windows(2)
            .map(|pair| format!("{} {}", pair[0], pair[1]))
            .collect();

        Self { tokens, bigrams }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn bigrams(&self) -> &[String] {
        &self.bigrams
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn strip_prefix<'t>(token: &'t str, lexicon: &Lexicon) -> &'t str {
    if token.chars().count() <= lexicon.prefix_strip_min_chars {
        return token;
    }

    let mut chars = token.chars();
    match chars.next() {
        Some(first) if lexicon.prefixes.contains(&first) => chars.as_str(),
        _ => token,
    }
}

/// Character-wise reversal (not byte-wise), so multi-byte scripts survive intact.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}
