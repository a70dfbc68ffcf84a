//! Leaderboards and multi-profile scoring.
//!
//! Both are plain loops over [`score`]: every call is independent, so callers
//! that need more throughput can split players across threads freely.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{RuleSet, Score, ScoringProfile, StatMap};

use super::score;

/// A single score calculation slower than this is logged at `warn`.
pub const SLOW_SCORE_THRESHOLD: Duration = Duration::from_millis(50);

/// One ranked row of a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// One-based position.
    pub rank: usize,
    /// The player this row belongs to.
    pub player_id: String,
    /// The player's score under the leaderboard's rule set.
    pub points: Score,
}

/// Scores every player and ranks them by points, highest first.
///
/// Equal scores are ordered by player id so the result is deterministic.
/// When `limit` is given only the top `limit` rows are returned.
///
/// # Examples
///
/// ```
/// use fantasy_scoring::models::{RuleSet, ScoringRule, StatMap};
/// use fantasy_scoring::scoring::build_leaderboard;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::new(vec![ScoringRule::new("receptions", Decimal::ONE)]);
/// let a: StatMap = vec![("receptions", Decimal::from(4))].into_iter().collect();
/// let b: StatMap = vec![("receptions", Decimal::from(9))].into_iter().collect();
///
/// let board = build_leaderboard(vec![("wr_a", &a), ("wr_b", &b)], &rules, None);
/// assert_eq!(board[0].player_id, "wr_b");
/// assert_eq!(board[0].rank, 1);
/// assert_eq!(board[1].player_id, "wr_a");
/// ```
pub fn build_leaderboard<'a>(
    players: impl IntoIterator<Item = (&'a str, &'a StatMap)>,
    rules: &RuleSet,
    limit: Option<usize>,
) -> Vec<LeaderboardEntry> {
    let start_time = Instant::now();

    let mut scored: Vec<(&str, Score)> = players
        .into_iter()
        .map(|(player_id, stats)| (player_id, timed_score(player_id, stats, rules)))
        .collect();
    let player_count = scored.len();

    scored.sort_by(|(a_id, a_points), (b_id, b_points)| match b_points.cmp(a_points) {
        Ordering::Equal => a_id.cmp(b_id),
        other => other,
    });

    let entries: Vec<LeaderboardEntry> = scored
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, (player_id, points))| LeaderboardEntry {
            rank: i + 1,
            player_id: player_id.to_string(),
            points,
        })
        .collect();

    debug!(
        players = player_count,
        rules = rules.len(),
        returned = entries.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Leaderboard built"
    );

    entries
}

/// Scores one stat map under each profile, keyed by profile name.
pub fn points_by_profile<'a>(
    stats: &StatMap,
    profiles: impl IntoIterator<Item = &'a ScoringProfile>,
) -> BTreeMap<String, Score> {
    profiles
        .into_iter()
        .map(|profile| {
            let points = timed_score(&profile.name, stats, &profile.rules);
            (profile.name.clone(), points)
        })
        .collect()
}

fn timed_score(label: &str, stats: &StatMap, rules: &RuleSet) -> Score {
    let start_time = Instant::now();
    let points = score(stats, rules);
    let elapsed = start_time.elapsed();
    if is_slow(elapsed) {
        warn!(
            label,
            rules = rules.len(),
            duration_ms = elapsed.as_millis(),
            "Slow points calculation"
        );
    }
    points
}

fn is_slow(elapsed: Duration) -> bool {
    elapsed > SLOW_SCORE_THRESHOLD
}
