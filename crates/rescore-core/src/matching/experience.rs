use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::{boundary_regex, normalize_text};

/// Phrasings that state a years-of-experience figure: "<N>+ years of
/// experience", "experience: <N>+ years", "<N>+ yrs of experience".
static YEARS_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(\d+)\s*\+?\s*years?\s+(?:of\s+)?experience").unwrap(),
        Regex::new(r"experience\s*:\s*(\d+)\s*\+?\s*years?").unwrap(),
        Regex::new(r"(\d+)\s*\+?\s*yrs?\s+(?:of\s+)?experience").unwrap(),
    ]
});

/// Sum of non-overlapping whole-word occurrences of each keyword.
///
/// Unlike skill extraction this keeps occurrence counts: a keyword that
/// appears three times contributes 3. The total feeds the capped
/// experience-keyword score.
pub fn count_indicators(text: &str, keywords: &[String]) -> usize {
    let text = normalize_text(text);
    let mut count = 0;

    for keyword in keywords {
        let normalized = normalize_text(keyword);
        if normalized.is_empty() {
            continue;
        }
        let Some(re) = boundary_regex(&normalized) else {
            continue;
        };
        count += re.find_iter(&text).count();
    }

    count
}

/// Extract the largest stated years-of-experience figure, or 0.0 if none.
///
/// This is a heuristic: unusual phrasings may be missed and that is accepted
/// behavior, not an error.
pub fn extract_years(text: &str) -> f64 {
    let text = normalize_text(text);
    let mut max_years: u32 = 0;

    for pattern in YEARS_PATTERNS.iter() {
        for caps in pattern.captures_iter(&text) {
            if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                max_years = max_years.max(years);
            }
        }
    }

    f64::from(max_years)
}
