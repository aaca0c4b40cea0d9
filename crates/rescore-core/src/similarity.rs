use std::sync::OnceLock;

use crate::error::SimilarityError;

/// Semantic-similarity collaborator seam, backed by an external embedding
/// model. The engine treats it as an opaque oracle returning a score in
/// [0, 100]; any failure downstream becomes a zero signal, never a fatal
/// error.
pub trait SimilarityOracle: Send + Sync {
    fn similarity(&self, resume_text: &str, job_text: &str) -> Result<f64, SimilarityError>;

    fn name(&self) -> &'static str {
        "similarity-oracle"
    }
}

/// Oracle that yields a permanent zero signal, for deployments without an
/// embedding backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disabled;

impl SimilarityOracle for Disabled {
    fn similarity(&self, _resume_text: &str, _job_text: &str) -> Result<f64, SimilarityError> {
        Ok(0.0)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

static GLOBAL_ORACLE: OnceLock<Box<dyn SimilarityOracle>> = OnceLock::new();

/// Install the process-wide oracle, consulted by [`crate::Analyzer`] when it
/// has no per-instance oracle. The backing model is expensive to load, so the
/// slot is init-once with no teardown. Returns false if an oracle was already
/// installed.
pub fn install_global(oracle: Box<dyn SimilarityOracle>) -> bool {
    GLOBAL_ORACLE.set(oracle).is_ok()
}

pub fn global() -> Option<&'static dyn SimilarityOracle> {
    GLOBAL_ORACLE.get().map(|oracle| oracle.as_ref())
}

/// Clamp an oracle score into [0, 100]; non-finite values become 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
