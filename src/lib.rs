//! Fantasy football scoring engine.
//!
//! This crate turns a player's observed stats and an ordered set of scoring
//! rules into a single point total, with per-unit floor division, inclusive
//! bonus ranges, per-rule caps and two-decimal rounding. Around the engine it
//! provides rule validation, the default scoring profiles, YAML profile
//! loading, rule export/import, stat aggregation and leaderboards.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod scoring;
