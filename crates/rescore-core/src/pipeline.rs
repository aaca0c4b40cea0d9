use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::matching::description::score_against_description;
use crate::matching::report::{build_description_report, build_profile_report, AnalysisReport};
use crate::matching::scoring::ResumeScorer;
use crate::profile::ProfileStore;
use crate::similarity::{self, clamp_score, SimilarityOracle};

/// Trimmed character count below which a document counts as unparseable and
/// is rejected before the engine runs.
pub const MIN_PARSEABLE_CHARS: usize = 50;

/// Orchestrates profile lookup, the similarity oracle, and the scorer for
/// one request at a time. Holds no mutable state, so a single `Analyzer` can
/// serve concurrent requests.
pub struct Analyzer {
    profiles: ProfileStore,
    scorer: ResumeScorer,
    oracle: Option<Box<dyn SimilarityOracle>>,
}

impl Analyzer {
    pub fn new(profiles: ProfileStore) -> Self {
        Self {
            profiles,
            scorer: ResumeScorer::default(),
            oracle: None,
        }
    }

    pub fn with_oracle(mut self, oracle: Box<dyn SimilarityOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    /// Score a resume against a named role from the profile store.
    ///
    /// `similarity_override` replaces the oracle signal when the caller has
    /// already computed one (clamped to [0, 100]).
    pub fn analyze_role(
        &self,
        resume_text: &str,
        role: &str,
        similarity_override: Option<f64>,
    ) -> Result<AnalysisReport, AnalysisError> {
        self.ensure_parseable(resume_text)?;

        let profile = self.profiles.get(role).ok_or_else(|| AnalysisError::UnknownRole {
            role: role.to_string(),
            available: self.profiles.role_names().join(", "),
        })?;

        let similarity = self.similarity_for(resume_text, &profile.description, similarity_override);
        let result = self.scorer.score(resume_text, profile, similarity);
        debug!(
            role,
            score = result.overall_score,
            similarity,
            years = result.experience_metrics.years,
            "scored resume against profile"
        );

        Ok(build_profile_report(role, &result, similarity))
    }

    /// Score a resume against a free-form job description (the unweighted
    /// path used when no structured profile exists).
    pub fn analyze_description(
        &self,
        resume_text: &str,
        description: &str,
        similarity_override: Option<f64>,
    ) -> Result<AnalysisReport, AnalysisError> {
        self.ensure_parseable(resume_text)?;

        let similarity = self.similarity_for(resume_text, description, similarity_override);
        let result = score_against_description(resume_text, description, similarity);
        debug!(score = result.score, similarity, "scored resume against description");

        Ok(build_description_report(&result, similarity))
    }

    fn ensure_parseable(&self, resume_text: &str) -> Result<(), AnalysisError> {
        let chars = resume_text.trim().chars().count();
        if chars < MIN_PARSEABLE_CHARS {
            return Err(AnalysisError::ResumeTooShort {
                chars,
                min: MIN_PARSEABLE_CHARS,
            });
        }
        Ok(())
    }

    /// Oracle failures degrade to a zero signal with a warning; the scoring
    /// computation itself must never see them. Without a per-instance oracle
    /// the process-wide one installed via [`similarity::install_global`] is
    /// consulted instead.
    fn similarity_for(&self, resume_text: &str, job_text: &str, override_score: Option<f64>) -> f64 {
        if let Some(score) = override_score {
            return clamp_score(score);
        }

        let oracle: Option<&dyn SimilarityOracle> =
            self.oracle.as_deref().or_else(|| similarity::global().map(|oracle| oracle as _));

        match oracle {
            Some(oracle) => match oracle.similarity(resume_text, job_text) {
                Ok(score) => clamp_score(score),
                Err(err) => {
                    warn!(oracle = oracle.name(), error = %err, "similarity oracle failed; scoring without it");
                    0.0
                }
            },
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimilarityError;
    use crate::profile::ProfileStore;

    struct FixedOracle(f64);

    impl SimilarityOracle for FixedOracle {
        fn similarity(&self, _a: &str, _b: &str) -> Result<f64, SimilarityError> {
            Ok(self.0)
        }
    }

    struct BrokenOracle;

    impl SimilarityOracle for BrokenOracle {
        fn similarity(&self, _a: &str, _b: &str) -> Result<f64, SimilarityError> {
            Err(SimilarityError::Unavailable("model not loaded".into()))
        }
    }

    fn analyzer() -> Analyzer {
        Analyzer::new(ProfileStore::builtin().unwrap())
    }

    fn sample_resume() -> String {
        "Backend engineer with 6+ years of experience. Developed and deployed \
         REST API services in Python and Go, backed by PostgreSQL and Redis. \
         Implemented CI/CD with Docker and Kubernetes on AWS. BTech in \
         computer science. Strong communication and problem solving."
            .to_string()
    }

    #[test]
    fn unknown_role_lists_available_roles() {
        let err = analyzer()
            .analyze_role(&sample_resume(), "Astronaut", None)
            .unwrap_err();

        match err {
            AnalysisError::UnknownRole { role, available } => {
                assert_eq!(role, "Astronaut");
                assert!(available.contains("Software Engineer"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_resume_is_rejected_before_scoring() {
        let err = analyzer()
            .analyze_role("too short", "Software Engineer", None)
            .unwrap_err();

        assert!(matches!(err, AnalysisError::ResumeTooShort { chars: 9, .. }));
        assert!(err.to_string().contains("need at least 50"));
    }

    #[test]
    fn resume_at_the_parseable_minimum_is_accepted() {
        let resume = "x".repeat(MIN_PARSEABLE_CHARS);
        assert!(analyzer()
            .analyze_role(&resume, "Software Engineer", None)
            .is_ok());
    }

    #[test]
    fn scores_a_real_profile_end_to_end() {
        let report = analyzer()
            .analyze_role(&sample_resume(), "Backend Developer", None)
            .unwrap();

        assert!(report.score > 15.0);
        assert!(report.score <= 100.0);
        assert!(report.matched_skills.iter().any(|s| s == "python"));
        assert!(!report.feedback.is_empty());
    }

    #[test]
    fn oracle_signal_feeds_the_score() {
        let with_oracle = Analyzer::new(ProfileStore::builtin().unwrap())
            .with_oracle(Box::new(FixedOracle(90.0)));
        let without = analyzer();

        let resume = sample_resume();
        let boosted = with_oracle
            .analyze_role(&resume, "Backend Developer", None)
            .unwrap();
        let plain = without.analyze_role(&resume, "Backend Developer", None).unwrap();

        assert_eq!(boosted.similarity, 90.0);
        assert!(boosted.score >= plain.score);
    }

    #[test]
    fn broken_oracle_degrades_to_zero_signal() {
        let analyzer = Analyzer::new(ProfileStore::builtin().unwrap())
            .with_oracle(Box::new(BrokenOracle));

        let report = analyzer
            .analyze_role(&sample_resume(), "Backend Developer", None)
            .unwrap();

        assert_eq!(report.similarity, 0.0);
        assert!(report.score > 0.0);
    }

    #[test]
    fn global_oracle_installs_once_and_feeds_the_score() {
        assert!(similarity::install_global(Box::new(FixedOracle(40.0))));
        assert!(!similarity::install_global(Box::new(FixedOracle(85.0))));

        let report = analyzer()
            .analyze_role(&sample_resume(), "Backend Developer", None)
            .unwrap();

        assert_eq!(report.similarity, 40.0);
    }

    #[test]
    fn override_beats_the_oracle_and_is_clamped() {
        let analyzer = Analyzer::new(ProfileStore::builtin().unwrap())
            .with_oracle(Box::new(FixedOracle(90.0)));

        let report = analyzer
            .analyze_role(&sample_resume(), "Backend Developer", Some(250.0))
            .unwrap();

        assert_eq!(report.similarity, 100.0);
    }

    #[test]
    fn description_path_scores_without_a_profile() {
        let report = analyzer()
            .analyze_description(
                &sample_resume(),
                "Looking for a python engineer with postgresql and docker experience",
                None,
            )
            .unwrap();

        assert!(report.score >= 15.0);
        assert!(report.matched_skills.iter().any(|s| s == "python"));
    }
}
