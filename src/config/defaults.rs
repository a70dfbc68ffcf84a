//! Default scoring profile catalog.
//!
//! The three profiles a fresh installation is seeded with. They share the
//! same nine rules and differ only in the receptions multiplier, so the
//! catalog is kept as one table with a multiplier column per profile.
//!
//! Half PPR scores receptions at 0.5, the same as Standard. That matches the
//! data existing installations were seeded with and is kept as is.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{RuleSet, ScoringProfile, ScoringRule};

/// Profile names in catalog order.
pub const DEFAULT_PROFILE_NAMES: [&str; 3] = ["Standard", "PPR", "Half PPR"];

/// One catalog row: stat key, per-unit size, and the multiplier for each
/// profile in [`DEFAULT_PROFILE_NAMES`] order. Numbers are in hundredths.
type CatalogRow = (&'static str, Option<i64>, [i64; 3]);

#[rustfmt::skip]
const CATALOG: [CatalogRow; 9] = [
    // stat_key                 per       Standard  PPR   Half PPR
    ("passing_yards",           Some(100), [   4,     4,      4]),
    ("passing_touchdowns",      None,      [ 400,   400,    400]),
    ("passing_interceptions",   None,      [-200,  -200,   -200]),
    ("rushing_yards",           Some(100), [  10,    10,     10]),
    ("rushing_touchdowns",      None,      [ 600,   600,    600]),
    ("receiving_yards",         Some(100), [  10,    10,     10]),
    ("receiving_touchdowns",    None,      [ 600,   600,    600]),
    ("receptions",              None,      [  50,   100,     50]),
    ("fumbles_lost",            None,      [-200,  -200,   -200]),
];

fn hundredths(value: i64) -> Decimal {
    Decimal::new(value, 2).normalize()
}

fn catalog_rules(column: usize) -> RuleSet {
    CATALOG
        .iter()
        .map(|(stat_key, per, multipliers)| {
            let rule = ScoringRule::new(*stat_key, hundredths(multipliers[column]));
            match per {
                Some(per) => rule.with_per(hundredths(*per)),
                None => rule,
            }
        })
        .collect()
}

/// Returns the default rule sets keyed by profile name.
///
/// # Example
///
/// ```
/// use fantasy_scoring::config::defaults;
/// use rust_decimal::Decimal;
///
/// let profiles = defaults();
/// assert_eq!(profiles.len(), 3);
///
/// let ppr = &profiles["PPR"];
/// assert_eq!(ppr.find("receptions").unwrap().multiplier, Decimal::ONE);
/// ```
pub fn defaults() -> BTreeMap<String, RuleSet> {
    DEFAULT_PROFILE_NAMES
        .iter()
        .enumerate()
        .map(|(column, name)| (name.to_string(), catalog_rules(column)))
        .collect()
}

/// Builds the default profiles, in catalog order, for seeding a rule store.
pub fn seed_default_profiles(created_at: DateTime<Utc>) -> Vec<ScoringProfile> {
    DEFAULT_PROFILE_NAMES
        .iter()
        .enumerate()
        .map(|(column, name)| {
            ScoringProfile::new(*name, catalog_rules(column), created_at)
                .with_description(format!("Default {} scoring profile", name))
        })
        .collect()
}
