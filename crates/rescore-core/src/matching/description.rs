use serde::Serialize;

/// Weight of lexical keyword coverage in the free-form path.
const KEYWORD_BASE_POINTS: f64 = 60.0;
/// Weight of the semantic-similarity signal in the free-form path.
const SIMILARITY_BONUS_POINTS: f64 = 40.0;
const MINIMUM_SCORE: f64 = 15.0;
/// Description tokens this short carry no signal and are skipped.
const MIN_KEYWORD_CHARS: usize = 4;
const MISSING_DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescriptionScore {
    pub score: f64,
    pub keyword_match_ratio: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Score a resume against a free-form job description.
///
/// A simpler path than profile scoring: description tokens longer than three
/// characters are checked by plain substring containment in the lowercased
/// resume (deliberately looser than the word-boundary matching used for
/// profile vocabularies). Keyword coverage contributes up to 60 points and
/// the similarity signal up to 40; every result gets at least the 15-point
/// minimum. Repeated description tokens count toward the ratio each time
/// they appear.
pub fn score_against_description(
    resume_text: &str,
    description: &str,
    similarity_score: f64,
) -> DescriptionScore {
    let resume_lower = resume_text.to_lowercase();
    let description_lower = description.to_lowercase();

    let keywords: Vec<&str> = description_lower
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .collect();

    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|kw| resume_lower.contains(**kw))
        .map(|kw| kw.to_string())
        .collect();

    let keyword_match_ratio = if keywords.is_empty() {
        0.0
    } else {
        matched_keywords.len() as f64 / keywords.len() as f64
    };

    let base_score = keyword_match_ratio * KEYWORD_BASE_POINTS;
    let similarity_bonus = (similarity_score / 100.0) * SIMILARITY_BONUS_POINTS;
    let score = (base_score + similarity_bonus).min(100.0).max(MINIMUM_SCORE);

    let missing_keywords: Vec<String> = keywords
        .iter()
        .take(MISSING_DISPLAY_LIMIT)
        .filter(|kw| !resume_lower.contains(**kw))
        .map(|kw| kw.to_string())
        .collect();

    DescriptionScore {
        score: round1(score),
        keyword_match_ratio,
        matched_keywords,
        missing_keywords,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_coverage_with_full_similarity_reaches_the_cap() {
        let result = score_against_description(
            "rust services with postgres and kafka",
            "rust postgres kafka",
            100.0,
        );

        assert_eq!(result.score, 100.0);
        assert_eq!(result.keyword_match_ratio, 1.0);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn no_overlap_still_scores_the_minimum() {
        let result = score_against_description("embedded firmware in c", "kubernetes terraform", 0.0);

        assert_eq!(result.score, 15.0);
        assert_eq!(result.keyword_match_ratio, 0.0);
        assert_eq!(result.missing_keywords, vec!["kubernetes", "terraform"]);
    }

    #[test]
    fn short_tokens_are_ignored() {
        let result = score_against_description("go and sql expert", "go sql for the api", 0.0);

        // "go", "sql", "for", "the", "api" are all under four characters.
        assert_eq!(result.keyword_match_ratio, 0.0);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn containment_is_substring_based() {
        let result = score_against_description(
            "senior javascript developer",
            "java developer wanted",
            0.0,
        );

        // "java" matches inside "javascript" on this path.
        assert_eq!(result.matched_keywords, vec!["java", "developer"]);
    }

    #[test]
    fn repeated_tokens_count_toward_the_ratio() {
        let result =
            score_against_description("python everywhere", "python python golang golang", 0.0);

        assert_eq!(result.matched_keywords.len(), 2);
        assert!((result.keyword_match_ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn similarity_alone_is_worth_at_most_forty_points() {
        let low = score_against_description("nothing shared here", "kubernetes terraform", 0.0);
        let high = score_against_description("nothing shared here", "kubernetes terraform", 100.0);

        assert_eq!(low.score, 15.0);
        assert_eq!(high.score, 40.0);
    }
}
