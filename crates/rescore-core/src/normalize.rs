use regex::Regex;
use tracing::warn;

/// Canonical text form used by every matcher: trimmed, lowercased.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Build a whole-word pattern for an already-normalized phrase.
///
/// Phrase edges that are word characters get `\b`. Edges made of punctuation
/// (`c++`, `.net`) get an explicit non-word-or-anchor class instead: the
/// regex crate has no lookaround, and a bare `\b` can never match after a
/// trailing `+`, so those phrases would otherwise be unmatchable.
pub fn boundary_pattern(phrase: &str) -> String {
    let escaped = regex::escape(phrase);
    let prefix = match phrase.chars().next() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"(?:^|\W)",
    };
    let suffix = match phrase.chars().last() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"(?:\W|$)",
    };
    format!("{prefix}{escaped}{suffix}")
}

/// Compile a whole-word matcher for a phrase. Escaped input cannot produce an
/// invalid pattern, so a failure here is logged and treated as a non-match.
pub fn boundary_regex(phrase: &str) -> Option<Regex> {
    match Regex::new(&boundary_pattern(phrase)) {
        Ok(re) => Some(re),
        Err(err) => {
            warn!(phrase, error = %err, "failed to compile boundary pattern");
            None
        }
    }
}
