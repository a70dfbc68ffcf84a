//! Stat map and per-week stat line models.
//!
//! A [`StatMap`] is the engine's view of what a player did over some period.
//! A [`StatLine`] is one stored observation (player, season, week, stat) that
//! callers sum into a stat map.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Mapping from stat key to observed value.
///
/// Keys that are not present read as zero. Explicit `null` values in a
/// deserialized payload are dropped on the way in, so they read as zero too.
///
/// # Example
///
/// ```
/// use fantasy_scoring::models::StatMap;
/// use rust_decimal::Decimal;
///
/// let mut stats = StatMap::new();
/// stats.insert("passing_yards", Decimal::from(350));
///
/// assert_eq!(stats.get("passing_yards"), Decimal::from(350));
/// assert_eq!(stats.get("rushing_yards"), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "HashMap<String, Option<Decimal>>",
    into = "HashMap<String, Decimal>"
)]
pub struct StatMap {
    values: HashMap<String, Decimal>,
}

impl StatMap {
    /// Creates an empty stat map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, or zero when the key is absent.
    pub fn get(&self, key: &str) -> Decimal {
        self.values.get(key).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns true if a value was recorded for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Sets the value for `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Decimal) {
        self.values.insert(key.into(), value);
    }

    /// Sets the value for `key` from a float.
    ///
    /// NaN and infinite values cannot be represented and are ignored, which
    /// leaves the key reading as zero.
    pub fn insert_f64(&mut self, key: impl Into<String>, value: f64) {
        if let Ok(value) = Decimal::try_from(value) {
            self.insert(key, value);
        }
    }

    /// Adds `value` to whatever is already recorded for `key`.
    pub fn add(&mut self, key: impl Into<String>, value: Decimal) {
        *self.values.entry(key.into()).or_insert(Decimal::ZERO) += value;
    }

    /// Number of recorded stat keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no stats were recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the recorded `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl From<HashMap<String, Option<Decimal>>> for StatMap {
    fn from(raw: HashMap<String, Option<Decimal>>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();
        Self { values }
    }
}

impl From<StatMap> for HashMap<String, Decimal> {
    fn from(stats: StatMap) -> Self {
        stats.values
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for StatMap {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        let mut stats = StatMap::new();
        for (key, value) in iter {
            stats.insert(key, value);
        }
        stats
    }
}

/// One stored stat observation for a player in a given week.
///
/// # Example
///
/// ```
/// use fantasy_scoring::models::StatLine;
/// use rust_decimal::Decimal;
///
/// let line = StatLine {
///     player_id: "00-0033873".to_string(),
///     season: 2024,
///     week: 1,
///     stat_key: "passing_yards".to_string(),
///     stat_value: Decimal::from(291),
/// };
/// assert_eq!(line.week, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    /// The player the stat belongs to.
    pub player_id: String,
    /// The season year.
    pub season: i32,
    /// The week number within the season.
    pub week: u8,
    /// The stat key (e.g., "rushing_yards").
    pub stat_key: String,
    /// The observed value.
    pub stat_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_absent_key_reads_as_zero() {
        let stats = StatMap::new();
        assert_eq!(stats.get("passing_yards"), Decimal::ZERO);
        assert!(!stats.contains("passing_yards"));
    }

    #[test]
    fn test_insert_replaces_value() {
        let mut stats = StatMap::new();
        stats.insert("receptions", dec("4"));
        stats.insert("receptions", dec("6"));
        assert_eq!(stats.get("receptions"), dec("6"));
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn test_add_accumulates() {
        let mut stats = StatMap::new();
        stats.add("rushing_yards", dec("45"));
        stats.add("rushing_yards", dec("62.5"));
        assert_eq!(stats.get("rushing_yards"), dec("107.5"));
    }

    #[test]
    fn test_insert_f64_converts_exactly_representable_values() {
        let mut stats = StatMap::new();
        stats.insert_f64("passing_yards", 350.0);
        stats.insert_f64("rushing_yards", 12.5);
        assert_eq!(stats.get("passing_yards"), dec("350"));
        assert_eq!(stats.get("rushing_yards"), dec("12.5"));
    }

    #[test]
    fn test_insert_f64_ignores_non_finite_values() {
        let mut stats = StatMap::new();
        stats.insert_f64("passing_yards", f64::NAN);
        stats.insert_f64("rushing_yards", f64::INFINITY);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_deserialize_treats_null_as_absent() {
        let stats: StatMap =
            serde_json::from_str(r#"{"passing_yards": null, "rushing_yards": 45}"#).unwrap();
        assert!(!stats.contains("passing_yards"));
        assert_eq!(stats.get("passing_yards"), Decimal::ZERO);
        assert_eq!(stats.get("rushing_yards"), dec("45"));
    }

    #[test]
    fn test_collect_from_pairs() {
        let stats: StatMap = vec![("passing_touchdowns", dec("3")), ("interceptions", dec("1"))]
            .into_iter()
            .collect();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.get("passing_touchdowns"), dec("3"));
    }
}
