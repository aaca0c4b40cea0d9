use std::collections::HashSet;

use crate::matching::experience::{count_indicators, extract_years};
use crate::matching::skills::extract_skills;
use crate::profile::JobProfile;
use crate::{ExperienceMetrics, MatchResult, MatchedSkills, MissingSkills, ScoreBreakdown};

/// Exponent of the concave section-score curve. Partial matches are rewarded
/// disproportionately relative to linear scaling because resumes rarely state
/// every keyword verbatim. Changing this changes every score.
pub const SECTION_CURVE_EXPONENT: f64 = 0.7;

/// Tunable scoring constants. The defaults reproduce the production curve;
/// tests vary individual knobs without touching the rest.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub curve_exponent: f64,
    /// Points per experience-keyword occurrence, and the cap on their sum.
    pub keyword_points: f64,
    pub keyword_cap: f64,
    /// Points per stated year of experience, and the cap on their sum.
    /// Both caps together bound the pre-weight experience signal at 100,
    /// mirroring the 0-100 scale of the other categories.
    pub years_points: f64,
    pub years_cap: f64,
    /// Ceiling on the semantic-similarity contribution, independent of the
    /// profile's weight table, so lexical matching stays dominant.
    pub similarity_bonus_cap: f64,
    /// Minimum score for any substantive document.
    pub floor_score: f64,
    /// Trimmed character count above which a document counts as substantive;
    /// at or below it the score is forced to 0.
    pub min_scoreable_chars: usize,
    /// Display bound on reported missing technical skills.
    pub missing_technical_limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            curve_exponent: SECTION_CURVE_EXPONENT,
            keyword_points: 5.0,
            keyword_cap: 60.0,
            years_points: 8.0,
            years_cap: 40.0,
            similarity_bonus_cap: 15.0,
            floor_score: 15.0,
            min_scoreable_chars: 100,
            missing_technical_limit: 10,
        }
    }
}

/// Score a resume with the default configuration.
pub fn score_against_profile(
    resume_text: &str,
    profile: &JobProfile,
    similarity_score: f64,
) -> MatchResult {
    ResumeScorer::default().score(resume_text, profile, similarity_score)
}

#[derive(Debug, Clone, Default)]
pub struct ResumeScorer {
    config: ScoringConfig,
}

impl ResumeScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Weighted sub-score for one category: `(matched/total)^0.7 * 100 * weight`.
    /// An empty vocabulary contributes nothing.
    pub fn score_section(&self, found: &HashSet<String>, total: &[String], weight: f64) -> f64 {
        if total.is_empty() {
            return 0.0;
        }
        let ratio = found.len() as f64 / total.len() as f64;
        ratio.powf(self.config.curve_exponent) * 100.0 * weight
    }

    /// Combine all five category signals plus the similarity bonus into a
    /// single 0-100 score with an explainable breakdown.
    ///
    /// Pure function of its inputs; never fails on well-formed text and
    /// profile. Rejecting empty or unreadable input is the caller's job.
    pub fn score(
        &self,
        resume_text: &str,
        profile: &JobProfile,
        similarity_score: f64,
    ) -> MatchResult {
        let weights = profile.weight;

        let matched_required = extract_skills(resume_text, &profile.required_skills);
        let matched_technical = extract_skills(resume_text, &profile.technical_skills);
        let matched_soft = extract_skills(resume_text, &profile.soft_skills);
        let matched_education = extract_skills(resume_text, &profile.education_keywords);

        let required_score =
            self.score_section(&matched_required, &profile.required_skills, weights.required_skills);
        let technical_score = self.score_section(
            &matched_technical,
            &profile.technical_skills,
            weights.technical_skills,
        );
        let soft_score = self.score_section(&matched_soft, &profile.soft_skills, weights.soft_skills);
        let education_score =
            self.score_section(&matched_education, &profile.education_keywords, weights.education);

        let keyword_count = count_indicators(resume_text, &profile.experience_keywords);
        let years = extract_years(resume_text);
        let keyword_score = (keyword_count as f64 * self.config.keyword_points).min(self.config.keyword_cap);
        let years_score = (years * self.config.years_points).min(self.config.years_cap);
        let experience_score = (keyword_score + years_score) * weights.experience;

        let base_score =
            required_score + technical_score + soft_score + education_score + experience_score;

        let similarity_bonus = if similarity_score > 0.0 {
            (similarity_score / 100.0) * self.config.similarity_bonus_cap
        } else {
            0.0
        };

        let capped = (base_score + similarity_bonus).min(100.0);

        // Any substantive document scores at least the floor; near-empty
        // input is unscoreable and forced to zero.
        let trimmed_chars = resume_text.trim().chars().count();
        let final_score = if trimmed_chars > self.config.min_scoreable_chars {
            capped.max(self.config.floor_score)
        } else {
            0.0
        };

        let breakdown = ScoreBreakdown {
            required_skills: unweighted(required_score, weights.required_skills),
            technical_skills: unweighted(technical_score, weights.technical_skills),
            soft_skills: unweighted(soft_score, weights.soft_skills),
            education: unweighted(education_score, weights.education),
            experience: unweighted(experience_score, weights.experience),
        };

        let mut missing_technical = missing_from(&profile.technical_skills, &matched_technical);
        missing_technical.truncate(self.config.missing_technical_limit);
        let missing_required = missing_from(&profile.required_skills, &matched_required);
        let missing_soft = missing_from(&profile.soft_skills, &matched_soft);

        MatchResult {
            overall_score: round1(final_score),
            breakdown,
            matched_skills: MatchedSkills {
                required: sorted(matched_required),
                technical: sorted(matched_technical),
                soft: sorted(matched_soft),
                education: sorted(matched_education),
            },
            missing_skills: MissingSkills {
                required: missing_required,
                technical: missing_technical,
                soft: missing_soft,
            },
            experience_metrics: ExperienceMetrics {
                years,
                keyword_count,
            },
        }
    }
}

/// Divide a weighted sub-score back out by its own weight to report an
/// unweighted 0-100 figure. A zero weight reports 0, never a division.
fn unweighted(weighted_score: f64, weight: f64) -> f64 {
    if weight > 0.0 {
        round1(weighted_score / weight)
    } else {
        0.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn sorted(set: HashSet<String>) -> Vec<String> {
    let mut entries: Vec<String> = set.into_iter().collect();
    entries.sort();
    entries
}

fn missing_from(total: &[String], matched: &HashSet<String>) -> Vec<String> {
    let unique: HashSet<&String> = total.iter().collect();
    let mut missing: Vec<String> = unique
        .into_iter()
        .filter(|entry| !matched.contains(*entry))
        .cloned()
        .collect();
    missing.sort();
    missing
}
