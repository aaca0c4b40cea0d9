use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

/// Built-in taxonomy shipped with the crate. Swappable: callers may load a
/// replacement file with the same shape via [`ProfileStore::from_path`].
const BUILTIN_ROLES_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/job_roles.json"));

/// A named role's skill taxonomy and category weights. Loaded once from
/// configuration and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobProfile {
    /// Free text, used only as input to the external similarity oracle.
    pub description: String,
    pub required_skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub education_keywords: Vec<String>,
    pub experience_keywords: Vec<String>,
    pub weight: CategoryWeights,
}

/// Category weights for one profile. All five keys are mandatory; a missing
/// key is a deserialization error, not a silent zero at scoring time.
///
/// Weights conventionally sum to 1.0 but the engine does not assume it: each
/// weighted sub-score is divided back out by its own weight when reported.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryWeights {
    pub required_skills: f64,
    pub technical_skills: f64,
    pub soft_skills: f64,
    pub education: f64,
    pub experience: f64,
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.required_skills
            + self.technical_skills
            + self.soft_skills
            + self.education
            + self.experience
    }
}

/// Role name -> profile mapping, validated at load time.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: BTreeMap<String, JobProfile>,
}

impl ProfileStore {
    /// Load the taxonomy bundled with the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json_str(BUILTIN_ROLES_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let profiles: BTreeMap<String, JobProfile> = serde_json::from_str(json)?;
        for (role, profile) in &profiles {
            validate_profile(role, profile)?;
        }
        Ok(Self { profiles })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, role: &str) -> Option<&JobProfile> {
        self.profiles.get(role)
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn validate_profile(role: &str, profile: &JobProfile) -> Result<(), ConfigError> {
    let weights = [
        ("required_skills", profile.weight.required_skills),
        ("technical_skills", profile.weight.technical_skills),
        ("soft_skills", profile.weight.soft_skills),
        ("education", profile.weight.education),
        ("experience", profile.weight.experience),
    ];
    for (category, value) in weights {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidWeight {
                role: role.to_string(),
                category,
                value,
            });
        }
    }

    let vocabularies = [
        ("required_skills", &profile.required_skills),
        ("technical_skills", &profile.technical_skills),
        ("soft_skills", &profile.soft_skills),
        ("education_keywords", &profile.education_keywords),
        ("experience_keywords", &profile.experience_keywords),
    ];
    for (category, entries) in vocabularies {
        if entries.iter().any(|e| e.trim().is_empty()) {
            return Err(ConfigError::EmptyPhrase {
                role: role.to_string(),
                category,
            });
        }
    }

    let sum = profile.weight.sum();
    if (sum - 1.0).abs() > 1e-6 {
        warn!(role, weight_sum = sum, "profile weights do not sum to 1.0");
    }

    Ok(())
}
