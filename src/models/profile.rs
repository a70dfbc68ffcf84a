//! Scoring profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RuleSet;

/// A named rule set as stored and offered to users.
///
/// # Example
///
/// ```
/// use fantasy_scoring::models::{RuleSet, ScoringProfile};
/// use chrono::Utc;
///
/// let profile = ScoringProfile::new("Custom", RuleSet::default(), Utc::now());
/// assert_eq!(profile.name, "Custom");
/// assert!(profile.is_public);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringProfile {
    /// Unique identifier for the profile.
    pub profile_id: Uuid,
    /// Unique, human-readable name (e.g., "PPR").
    pub name: String,
    /// Optional description shown alongside the name.
    pub description: Option<String>,
    /// Whether the profile is listed for everyone.
    pub is_public: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// The rules this profile applies.
    pub rules: RuleSet,
}

impl ScoringProfile {
    /// Creates a public profile with a fresh identifier and no description.
    pub fn new(name: impl Into<String>, rules: RuleSet, created_at: DateTime<Utc>) -> Self {
        Self {
            profile_id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            is_public: true,
            created_at,
            rules,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
