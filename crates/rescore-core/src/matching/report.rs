use serde::Serialize;

use crate::matching::description::DescriptionScore;
use crate::MatchResult;

const MATCHED_DISPLAY_LIMIT: usize = 10;
const MISSING_DISPLAY_LIMIT: usize = 10;
const KEYWORD_DISPLAY_LIMIT: usize = 15;
/// Missing technical skills folded into the combined missing list.
const MISSING_TECHNICAL_IN_SUMMARY: usize = 5;
const LIST_PREVIEW: usize = 5;

/// Caller-facing summary of one analysis: the score plus human-readable
/// strengths, improvement suggestions, and a feedback sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub score: f64,
    pub similarity: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
    pub feedback: String,
}

/// Build the report for a profile-based analysis.
pub fn build_profile_report(role: &str, result: &MatchResult, similarity: f64) -> AnalysisReport {
    let matched = &result.matched_skills;
    let missing = &result.missing_skills;

    let mut matched_skills: Vec<String> = Vec::new();
    matched_skills.extend(matched.required.iter().cloned());
    matched_skills.extend(matched.technical.iter().cloned());
    matched_skills.extend(matched.soft.iter().cloned());

    let mut missing_skills: Vec<String> = missing.required.clone();
    missing_skills.extend(
        missing
            .technical
            .iter()
            .take(MISSING_TECHNICAL_IN_SUMMARY)
            .cloned(),
    );

    let mut strengths = Vec::new();
    if !matched.required.is_empty() {
        strengths.push(format!(
            "Strong match on required skills: {}",
            preview(&matched.required)
        ));
    }
    if !matched.technical.is_empty() {
        strengths.push(format!("Good technical skills: {}", preview(&matched.technical)));
    }
    if result.experience_metrics.years > 0.0 {
        strengths.push(format!(
            "Relevant experience: {} years",
            result.experience_metrics.years
        ));
    }

    let mut improvements = Vec::new();
    if !missing.required.is_empty() {
        improvements.push(format!("Add required skills: {}", preview(&missing.required)));
    }
    if !missing.technical.is_empty() {
        improvements.push(format!("Consider adding: {}", preview(&missing.technical)));
    }
    if result.experience_metrics.years == 0.0 {
        improvements.push("Highlight your experience and projects more clearly".to_string());
    }

    let score = result.overall_score;
    let mut feedback = format!("Your resume scored {score:.1}/100 for the {role} role.");
    if similarity > 0.0 {
        feedback.push_str(&format!(" Semantic match: {similarity}%."));
    }
    feedback.push(' ');
    feedback.push_str(band_feedback(score));
    if !matched_skills.is_empty() {
        feedback.push_str(&format!(" Key matched skills: {}.", preview(&matched_skills)));
    }

    let keywords: Vec<String> = matched_skills
        .iter()
        .take(KEYWORD_DISPLAY_LIMIT)
        .cloned()
        .collect();
    matched_skills.truncate(MATCHED_DISPLAY_LIMIT);
    missing_skills.truncate(MISSING_DISPLAY_LIMIT);

    AnalysisReport {
        score,
        similarity,
        matched_skills,
        missing_skills,
        strengths,
        improvements,
        keywords,
        feedback,
    }
}

/// Build the report for a free-form job-description analysis.
pub fn build_description_report(result: &DescriptionScore, similarity: f64) -> AnalysisReport {
    let mut strengths = Vec::new();
    if !result.matched_keywords.is_empty() {
        strengths.push(format!("Matched keywords: {}", preview(&result.matched_keywords)));
    }
    if similarity > 70.0 {
        strengths.push("Strong semantic similarity with job description".to_string());
    }

    let mut improvements = Vec::new();
    if result.keyword_match_ratio < 0.5 {
        improvements
            .push("Add more keywords from the job description to your resume".to_string());
    }
    if similarity < 50.0 {
        improvements.push("Improve alignment with job description requirements".to_string());
    }

    let mut feedback = format!(
        "Your resume scored {:.1}/100 against the custom job description.",
        result.score
    );
    if similarity > 0.0 {
        feedback.push_str(&format!(" Semantic match: {similarity}%."));
    }
    feedback.push(' ');
    feedback.push_str(band_feedback_short(result.score));

    let keywords: Vec<String> = result
        .matched_keywords
        .iter()
        .take(KEYWORD_DISPLAY_LIMIT)
        .cloned()
        .collect();
    let mut matched_skills = result.matched_keywords.clone();
    matched_skills.truncate(MATCHED_DISPLAY_LIMIT);

    AnalysisReport {
        score: result.score,
        similarity,
        matched_skills,
        missing_skills: result.missing_keywords.clone(),
        strengths,
        improvements,
        keywords,
        feedback,
    }
}

fn preview(entries: &[String]) -> String {
    entries
        .iter()
        .take(LIST_PREVIEW)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

fn band_feedback(score: f64) -> &'static str {
    if score >= 75.0 {
        "Excellent match! You're well-qualified for this role."
    } else if score >= 60.0 {
        "Good match! With some improvements, you'll be very competitive."
    } else if score >= 45.0 {
        "Moderate match. Consider adding more relevant skills and experience."
    } else {
        "Needs improvement. Focus on adding required skills and relevant experience."
    }
}

fn band_feedback_short(score: f64) -> &'static str {
    if score >= 75.0 {
        "Excellent match!"
    } else if score >= 60.0 {
        "Good match!"
    } else if score >= 45.0 {
        "Moderate match."
    } else {
        "Needs improvement."
    }
}
