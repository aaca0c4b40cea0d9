use std::collections::HashSet;

use crate::normalize::{boundary_regex, normalize_text};

/// Find which vocabulary entries occur in `text` as whole-word matches.
///
/// Matching is case-insensitive (both sides are normalized first) but the
/// returned set holds the original vocabulary spellings, so callers can
/// report entries exactly as the profile declares them. No match is an empty
/// set, never an error; empty vocabulary phrases never match.
pub fn extract_skills(text: &str, vocabulary: &[String]) -> HashSet<String> {
    let text = normalize_text(text);
    let mut found = HashSet::new();

    for phrase in vocabulary {
        let normalized = normalize_text(phrase);
        if normalized.is_empty() {
            continue;
        }
        let Some(re) = boundary_regex(&normalized) else {
            continue;
        };
        if re.is_match(&text) {
            found.insert(phrase.clone());
        }
    }

    found
}
