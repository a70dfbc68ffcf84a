//! Scoring profile loading.
//!
//! This module provides the [`ProfileLoader`] type for loading scoring
//! profiles from YAML files and looking them up by name.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::ScoringProfile;

use super::defaults::seed_default_profiles;
use super::types::ProfileFile;

/// Loads and provides access to scoring profiles.
///
/// # Directory Structure
///
/// Every `.yaml` file in the profile directory holds one profile:
/// ```text
/// config/profiles/
/// ├── big_play.yaml
/// └── superflex.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use chrono::Utc;
/// use fantasy_scoring::config::ProfileLoader;
///
/// let loader = ProfileLoader::load_with_defaults("./config/profiles", Utc::now()).unwrap();
/// let ppr = loader.get_profile("PPR").unwrap();
/// println!("{} has {} rules", ppr.name, ppr.rules.len());
/// ```
#[derive(Debug, Clone)]
pub struct ProfileLoader {
    profiles: Vec<ScoringProfile>,
}

impl ProfileLoader {
    /// Loads every profile in the specified directory.
    ///
    /// Files are read in file-name order. Returns an error if:
    /// - The directory does not exist
    /// - Any file contains invalid YAML
    /// - Any rule fails validation
    /// - Two profiles share a name
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Self::from_profiles(Self::load_dir(path.as_ref())?)
    }

    /// Creates a loader holding only the default catalog profiles, stamped
    /// with `created_at`.
    pub fn with_defaults(created_at: DateTime<Utc>) -> Self {
        Self {
            profiles: seed_default_profiles(created_at),
        }
    }

    /// Loads the default catalog followed by the profiles in `path`.
    ///
    /// Catalog profiles carry `created_at`; file profiles carry their load time.
    pub fn load_with_defaults<P: AsRef<Path>>(
        path: P,
        created_at: DateTime<Utc>,
    ) -> EngineResult<Self> {
        let mut profiles = seed_default_profiles(created_at);
        profiles.extend(Self::load_dir(path.as_ref())?);
        Self::from_profiles(profiles)
    }

    /// Wraps already-built profiles, rejecting duplicate names.
    pub fn from_profiles(profiles: Vec<ScoringProfile>) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.name.as_str()) {
                return Err(EngineError::DuplicateProfile {
                    name: profile.name.clone(),
                });
            }
        }
        Ok(Self { profiles })
    }

    fn load_dir(dir: &Path) -> EngineResult<Vec<ScoringProfile>> {
        let dir_str = dir.display().to_string();

        if !dir.is_dir() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();

        files.iter().map(|file| Self::load_file(file)).collect()
    }

    /// Loads a single profile file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> EngineResult<ScoringProfile> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: ProfileFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        match file.into_profile(Utc::now()) {
            Ok(profile) => {
                info!(
                    path = %path_str,
                    profile = %profile.name,
                    rules = profile.rules.len(),
                    "Loaded scoring profile"
                );
                Ok(profile)
            }
            Err(err) => {
                warn!(path = %path_str, error = %err, "Rejected scoring profile");
                Err(err)
            }
        }
    }

    /// Gets a profile by its name.
    ///
    /// Returns `ProfileNotFound` if no profile has that name.
    pub fn get_profile(&self, name: &str) -> EngineResult<&ScoringProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.name == name)
            .ok_or_else(|| EngineError::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Returns all profiles in load order.
    pub fn profiles(&self) -> &[ScoringProfile] {
        &self.profiles
    }

    /// Returns the profiles listed for everyone.
    pub fn public_profiles(&self) -> impl Iterator<Item = &ScoringProfile> {
        self.profiles.iter().filter(|profile| profile.is_public)
    }
}
