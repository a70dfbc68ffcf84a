//! Scoring logic for the fantasy scoring engine.
//!
//! This module contains the scoring engine itself, the rule validator that
//! gates rules before they reach it, stat aggregation from stored weekly
//! lines, and leaderboard construction on top of the engine.

mod aggregation;
mod engine;
mod leaderboard;
mod validator;

pub use aggregation::{StatPeriod, aggregate_stats, weekly_stats};
pub use engine::{score, score_with_breakdown};
pub use leaderboard::{LeaderboardEntry, SLOW_SCORE_THRESHOLD, build_leaderboard, points_by_profile};
pub use validator::{validate, validate_record};
