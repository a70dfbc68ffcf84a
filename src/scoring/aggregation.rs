//! Stat aggregation.
//!
//! Builds the [`StatMap`] the engine scores from stored per-week
//! [`StatLine`]s. A single week and a whole season go through the same path;
//! the engine never knows which one it was given.

use std::collections::BTreeMap;

use crate::models::{StatLine, StatMap};

/// The span of weeks to aggregate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatPeriod {
    /// A single week of a season.
    Week {
        /// The season year.
        season: i32,
        /// The week number.
        week: u8,
    },
    /// Every week of a season.
    Season {
        /// The season year.
        season: i32,
    },
    /// An inclusive range of weeks within a season.
    Weeks {
        /// The season year.
        season: i32,
        /// First week included.
        first: u8,
        /// Last week included.
        last: u8,
    },
}

impl StatPeriod {
    /// Returns true if the given season and week fall inside this period.
    pub fn contains(&self, season: i32, week: u8) -> bool {
        match *self {
            StatPeriod::Week { season: s, week: w } => season == s && week == w,
            StatPeriod::Season { season: s } => season == s,
            StatPeriod::Weeks {
                season: s,
                first,
                last,
            } => season == s && (first..=last).contains(&week),
        }
    }
}

/// Sums a player's stat lines over a period into a stat map.
///
/// Lines for other players or outside the period are skipped. Values sharing
/// a stat key are added together.
///
/// # Examples
///
/// ```
/// use fantasy_scoring::models::StatLine;
/// use fantasy_scoring::scoring::{StatPeriod, aggregate_stats};
/// use rust_decimal::Decimal;
///
/// let line = |week: u8, value: i64| StatLine {
///     player_id: "p1".to_string(),
///     season: 2024,
///     week,
///     stat_key: "rushing_yards".to_string(),
///     stat_value: Decimal::from(value),
/// };
/// let lines = vec![line(1, 80), line(2, 45), line(3, 112)];
///
/// let season = aggregate_stats(&lines, "p1", StatPeriod::Season { season: 2024 });
/// assert_eq!(season.get("rushing_yards"), Decimal::from(237));
///
/// let week = aggregate_stats(&lines, "p1", StatPeriod::Week { season: 2024, week: 2 });
/// assert_eq!(week.get("rushing_yards"), Decimal::from(45));
/// ```
pub fn aggregate_stats<'a>(
    lines: impl IntoIterator<Item = &'a StatLine>,
    player_id: &str,
    period: StatPeriod,
) -> StatMap {
    let mut stats = StatMap::new();
    for line in lines {
        if line.player_id == player_id && period.contains(line.season, line.week) {
            stats.add(line.stat_key.as_str(), line.stat_value);
        }
    }
    stats
}

/// Groups a player's season into one stat map per week, ordered by week.
pub fn weekly_stats<'a>(
    lines: impl IntoIterator<Item = &'a StatLine>,
    player_id: &str,
    season: i32,
) -> BTreeMap<u8, StatMap> {
    let mut weeks: BTreeMap<u8, StatMap> = BTreeMap::new();
    for line in lines {
        if line.player_id == player_id && line.season == season {
            weeks
                .entry(line.week)
                .or_default()
                .add(line.stat_key.as_str(), line.stat_value);
        }
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(player_id: &str, season: i32, week: u8, stat_key: &str, value: &str) -> StatLine {
        StatLine {
            player_id: player_id.to_string(),
            season,
            week,
            stat_key: stat_key.to_string(),
            stat_value: dec(value),
        }
    }

    fn sample_lines() -> Vec<StatLine> {
        vec![
            line("qb1", 2024, 1, "passing_yards", "291"),
            line("qb1", 2024, 1, "passing_touchdowns", "2"),
            line("qb1", 2024, 2, "passing_yards", "310.5"),
            line("qb1", 2024, 3, "passing_yards", "205"),
            line("qb1", 2023, 17, "passing_yards", "400"),
            line("rb1", 2024, 1, "rushing_yards", "98"),
        ]
    }

    #[test]
    fn test_single_week() {
        let stats = aggregate_stats(
            &sample_lines(),
            "qb1",
            StatPeriod::Week {
                season: 2024,
                week: 1,
            },
        );
        assert_eq!(stats.get("passing_yards"), dec("291"));
        assert_eq!(stats.get("passing_touchdowns"), dec("2"));
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_season_sums_weeks_and_skips_other_seasons() {
        let stats = aggregate_stats(&sample_lines(), "qb1", StatPeriod::Season { season: 2024 });
        assert_eq!(stats.get("passing_yards"), dec("806.5"));
        assert_eq!(stats.get("rushing_yards"), Decimal::ZERO);
    }

    #[test]
    fn test_week_range_is_inclusive() {
        let stats = aggregate_stats(
            &sample_lines(),
            "qb1",
            StatPeriod::Weeks {
                season: 2024,
                first: 2,
                last: 3,
            },
        );
        assert_eq!(stats.get("passing_yards"), dec("515.5"));
        assert!(!stats.contains("passing_touchdowns"));
    }

    #[test]
    fn test_unknown_player_yields_empty_map() {
        let stats = aggregate_stats(&sample_lines(), "wr9", StatPeriod::Season { season: 2024 });
        assert!(stats.is_empty());
    }

    #[test]
    fn test_weekly_stats_groups_in_week_order() {
        let weeks = weekly_stats(&sample_lines(), "qb1", 2024);
        let order: Vec<u8> = weeks.keys().copied().collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(weeks[&2].get("passing_yards"), dec("310.5"));
        assert_eq!(weeks[&1].len(), 2);
    }
}
