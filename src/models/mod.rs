//! Core data models for the fantasy scoring engine.
//!
//! This module contains the inputs (stat maps, rules, rule sets), the output
//! score types, and the stored profile shape.

mod profile;
mod rule_set;
mod score;
mod scoring_rule;
mod stat_map;

pub use profile::ScoringProfile;
pub use rule_set::RuleSet;
pub use score::{RuleContribution, SCORE_DECIMAL_PLACES, Score, ScoreBreakdown};
pub use scoring_rule::{RuleRecord, ScoringRule};
pub use stat_map::{StatLine, StatMap};
