use crate::models::Profile;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when loading profiles
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read profile data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid profile {id}: {errors}")]
    Validation {
        id: String,
        errors: validator::ValidationErrors,
    },

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),
}

/// Supplies the full profile collection once at startup
pub trait ProfileSource {
    fn load(&self) -> Result<Vec<Profile>, LoadError>;
}

/// Wrapped document shape `{ "profiles": [...] }`
#[derive(Deserialize)]
struct ProfileDocument {
    profiles: Vec<Profile>,
}

/// Profiles stored in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Profile>, LoadError> {
        tracing::info!("Loading profiles from {}", self.path.display());

        let raw = std::fs::read_to_string(&self.path)?;
        let profiles = parse_profiles(&raw)?;

        tracing::info!("Loaded {} profiles from {}", profiles.len(), self.path.display());
        Ok(profiles)
    }
}

/// Profiles already held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    profiles: Vec<Profile>,
}

impl StaticSource {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }
}

impl ProfileSource for StaticSource {
    fn load(&self) -> Result<Vec<Profile>, LoadError> {
        let profiles = self.profiles.clone();
        validate_profiles(&profiles)?;
        Ok(profiles)
    }
}

/// Parse and validate a JSON profile document
///
/// Accepts a bare array or `{ "profiles": [...] }`. The shape is picked from
/// the first token so record-level errors keep their line and column.
pub fn parse_profiles(raw: &str) -> Result<Vec<Profile>, LoadError> {
    let profiles: Vec<Profile> = if raw.trim_start().starts_with('[') {
        serde_json::from_str(raw)?
    } else {
        serde_json::from_str::<ProfileDocument>(raw)?.profiles
    };
    validate_profiles(&profiles)?;
    Ok(profiles)
}

/// Check field constraints and id uniqueness
pub fn validate_profiles(profiles: &[Profile]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(profiles.len());

    for profile in profiles {
        if let Err(errors) = profile.validate() {
            tracing::warn!("Rejecting profile {}: {}", profile.id, errors);
            return Err(LoadError::Validation {
                id: profile.id.clone(),
                errors,
            });
        }

        if !seen.insert(profile.id.as_str()) {
            return Err(LoadError::DuplicateId(profile.id.clone()));
        }
    }

    Ok(())
}
