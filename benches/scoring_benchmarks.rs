//! Performance benchmarks for the fantasy scoring engine.
//!
//! This benchmark suite tracks:
//! - Single player-week score against a catalog profile
//! - Score with per-rule breakdown
//! - Leaderboards of 100 and 1000 players
//! - Scaling with rule set size
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use fantasy_scoring::config::defaults;
use fantasy_scoring::models::{RuleSet, ScoringRule, StatMap};
use fantasy_scoring::scoring::{build_leaderboard, score, score_with_breakdown};

/// Creates a stat line for a dual-threat quarterback, varied by `seed`.
fn create_player_stats(seed: i64) -> StatMap {
    vec![
        ("passing_yards", Decimal::from(180 + seed % 220)),
        ("passing_touchdowns", Decimal::from(seed % 5)),
        ("passing_interceptions", Decimal::from(seed % 3)),
        ("rushing_yards", Decimal::new(150 + (seed * 37) % 900, 1)),
        ("rushing_touchdowns", Decimal::from(seed % 2)),
        ("receptions", Decimal::ZERO),
        ("fumbles_lost", Decimal::from(seed % 2)),
    ]
    .into_iter()
    .collect()
}

/// Creates a rule set of `count` bonus-and-cap rules.
fn create_rule_set(count: usize) -> RuleSet {
    let keys = ["passing_yards", "rushing_yards", "passing_touchdowns", "fumbles_lost"];
    (0..count)
        .map(|i| {
            ScoringRule::new(keys[i % keys.len()], Decimal::new(4, 2))
                .with_per(Decimal::ONE)
                .with_bonus(Decimal::from(100), Some(Decimal::from(300)), Decimal::from(2))
                .with_cap(Decimal::from(30))
        })
        .collect()
}

/// Benchmark: one player-week under the PPR catalog profile.
fn bench_single_score(c: &mut Criterion) {
    let rules = defaults()["PPR"].clone();
    let stats = create_player_stats(7);

    c.bench_function("single_score", |b| {
        b.iter(|| black_box(score(black_box(&stats), black_box(&rules))))
    });
}

/// Benchmark: one player-week with per-rule breakdown.
fn bench_score_with_breakdown(c: &mut Criterion) {
    let rules = defaults()["PPR"].clone();
    let stats = create_player_stats(7);

    c.bench_function("score_with_breakdown", |b| {
        b.iter(|| black_box(score_with_breakdown(black_box(&stats), black_box(&rules))))
    });
}

/// Benchmark: leaderboards over many players.
fn bench_leaderboard(c: &mut Criterion) {
    let rules = defaults()["Standard"].clone();
    let mut group = c.benchmark_group("leaderboard");

    for player_count in [100usize, 1000] {
        let players: Vec<(String, StatMap)> = (0..player_count)
            .map(|i| (format!("player_{:04}", i), create_player_stats(i as i64)))
            .collect();

        group.throughput(Throughput::Elements(player_count as u64));
        group.bench_with_input(
            BenchmarkId::new("players", player_count),
            &players,
            |b, players| {
                b.iter(|| {
                    let board = build_leaderboard(
                        players.iter().map(|(id, stats)| (id.as_str(), stats)),
                        &rules,
                        Some(25),
                    );
                    black_box(board)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: various rule set sizes to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let stats = create_player_stats(11);
    let mut group = c.benchmark_group("scaling");

    for rule_count in [1usize, 9, 25, 100] {
        let rules = create_rule_set(rule_count);
        group.throughput(Throughput::Elements(rule_count as u64));
        group.bench_with_input(BenchmarkId::new("rules", rule_count), &rules, |b, rules| {
            b.iter(|| black_box(score(&stats, rules)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_score,
    bench_score_with_breakdown,
    bench_leaderboard,
    bench_scaling,
);
criterion_main!(benches);
