use thiserror::Error;

/// Profile-load failures. Raised once at load time so a broken taxonomy is
/// rejected before any scoring request can observe it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read profile data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("profile '{role}': weight for {category} must be finite and non-negative (got {value})")]
    InvalidWeight {
        role: String,
        category: &'static str,
        value: f64,
    },
    #[error("profile '{role}': {category} contains an empty phrase")]
    EmptyPhrase {
        role: String,
        category: &'static str,
    },
}

/// Failure of the document-text-extraction collaborator.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unreadable document: {0}")]
    Unreadable(String),
}

/// Failure of the semantic-similarity collaborator. Callers treat this as
/// "no similarity signal" rather than a fatal condition.
#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("similarity backend unavailable: {0}")]
    Unavailable(String),
}

/// Caller-boundary rejections for a scoring request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unknown job role '{role}'; available roles: {available}")]
    UnknownRole { role: String, available: String },
    #[error("resume text too short to score ({chars} chars; need at least {min})")]
    ResumeTooShort { chars: usize, min: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
