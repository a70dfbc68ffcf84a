//! Configuration types for scoring profile files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{RuleRecord, RuleSet, ScoringProfile};

/// On-disk (and export) shape of one scoring profile.
///
/// ```yaml
/// name: Big Play
/// description: Yardage bonuses for breakout games
/// is_public: true
/// rules:
///   - stat_key: rushing_yards
///     multiplier: 0.1
///     per: 1
///     bonus_min: 100
///     bonus_points: 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFile {
    /// The unique profile name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the profile is listed for everyone.
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    /// The profile's rules as flat records, in order.
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
}

fn default_is_public() -> bool {
    true
}

impl ProfileFile {
    /// Validates the rules and builds a profile with a fresh identifier.
    pub fn into_profile(self, created_at: DateTime<Utc>) -> EngineResult<ScoringProfile> {
        let rules = RuleSet::from_records(&self.name, self.rules)?;
        let mut profile = ScoringProfile::new(self.name, rules, created_at);
        profile.description = self.description;
        profile.is_public = self.is_public;
        Ok(profile)
    }
}

impl From<&ScoringProfile> for ProfileFile {
    fn from(profile: &ScoringProfile) -> Self {
        ProfileFile {
            name: profile.name.clone(),
            description: profile.description.clone(),
            is_public: profile.is_public,
            rules: profile.rules.to_records(),
        }
    }
}
