pub mod error;
pub mod extract;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod pipeline;
pub mod profile;
pub mod similarity;

use serde::Serialize;

pub use error::{AnalysisError, ConfigError, ExtractionError, SimilarityError};
pub use matching::gap::{find_skill_gap, SkillGap};
pub use matching::report::AnalysisReport;
pub use matching::scoring::{score_against_profile, ResumeScorer, ScoringConfig};
pub use pipeline::Analyzer;
pub use profile::{CategoryWeights, JobProfile, ProfileStore};
pub use similarity::SimilarityOracle;

/// Full scoring outcome for one resume against one job profile.
///
/// Constructed fresh per scoring request and never persisted by the engine;
/// all list fields are sorted so repeated runs over the same inputs produce
/// identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: MatchedSkills,
    pub missing_skills: MissingSkills,
    pub experience_metrics: ExperienceMetrics,
}

/// Per-category sub-scores on a 0-100 scale, reported unweighted so the
/// figures stay comparable across profiles with different weight tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub required_skills: f64,
    pub technical_skills: f64,
    pub soft_skills: f64,
    pub education: f64,
    pub experience: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchedSkills {
    pub required: Vec<String>,
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub education: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MissingSkills {
    pub required: Vec<String>,
    /// Truncated to a bounded number of entries for display purposes.
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExperienceMetrics {
    pub years: f64,
    pub keyword_count: usize,
}
