//! The scoring engine.
//!
//! Maps a [`StatMap`] and a [`RuleSet`] to a [`Score`]. The engine is a pure
//! function over borrowed inputs: it performs no I/O, keeps no state between
//! calls and cannot fail. Rules are trusted; they are checked by
//! [`validate`](super::validate) when they are built or imported.
//!
//! Arithmetic saturates: a quotient, product or sum that does not fit in a
//! [`Decimal`] becomes `Decimal::MAX` or `Decimal::MIN` according to its sign.

use rust_decimal::Decimal;

use crate::models::{RuleContribution, RuleSet, Score, ScoreBreakdown, ScoringRule, StatMap};

/// Computes the score for a stat map under a rule set.
///
/// Each rule contributes `floor(value / per) * multiplier` (or
/// `value * multiplier` without `per`), plus its flat bonus when the raw value
/// lies in the inclusive bonus range, capped from above by the rule's `cap`.
/// The sum of all contributions is rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use fantasy_scoring::models::{RuleSet, ScoringRule, StatMap};
/// use fantasy_scoring::scoring::score;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// let rules = RuleSet::new(vec![
///     ScoringRule::new("passing_yards", dec("0.04"))
///         .with_per(dec("1"))
///         .with_bonus(dec("300"), None, dec("3")),
///     ScoringRule::new("passing_touchdowns", dec("4.0")),
///     ScoringRule::new("interceptions", dec("-2.0")),
///     ScoringRule::new("rushing_yards", dec("0.1"))
///         .with_per(dec("1"))
///         .with_bonus(dec("100"), None, dec("2")),
/// ]);
///
/// let stats: StatMap = vec![
///     ("passing_yards", dec("350")),
///     ("passing_touchdowns", dec("3")),
///     ("rushing_yards", dec("45")),
///     ("interceptions", dec("1")),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(score(&stats, &rules).value(), dec("31.5"));
/// ```
pub fn score(stats: &StatMap, rules: &RuleSet) -> Score {
    let total: Decimal = rules
        .iter()
        .map(|rule| rule_subtotal(stats, rule).subtotal)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    Score::from_total(total)
}

/// Computes the score and records how each rule contributed to it.
///
/// The returned total is identical to what [`score`] returns for the same
/// inputs.
pub fn score_with_breakdown(stats: &StatMap, rules: &RuleSet) -> ScoreBreakdown {
    let contributions: Vec<RuleContribution> = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let parts = rule_subtotal(stats, rule);
            RuleContribution {
                step_number: (i + 1) as u32,
                stat_key: rule.stat_key.clone(),
                value: parts.value,
                units: parts.units,
                base: parts.base,
                bonus: parts.bonus,
                bonus_applied: parts.bonus_applied,
                cap_applied: parts.cap_applied,
                subtotal: parts.subtotal,
            }
        })
        .collect();

    let total = contributions
        .iter()
        .map(|c| c.subtotal)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    ScoreBreakdown {
        contributions,
        total: Score::from_total(total),
    }
}

/// Intermediate values for one rule.
struct RuleParts {
    value: Decimal,
    units: Decimal,
    base: Decimal,
    bonus: Decimal,
    bonus_applied: bool,
    cap_applied: bool,
    subtotal: Decimal,
}

fn rule_subtotal(stats: &StatMap, rule: &ScoringRule) -> RuleParts {
    let value = stats.get(&rule.stat_key);

    // floor, not truncation: -0.5 scores as -1 unit
    let units = match rule.per {
        Some(per) if per > Decimal::ZERO => saturating_div(value, per).floor(),
        _ => value,
    };
    let base = units.saturating_mul(rule.multiplier);

    let bonus_applied = rule.bonus_min.is_some_and(|min| {
        value >= min && rule.bonus_max.is_none_or(|max| value <= max)
    });
    let bonus = if bonus_applied {
        rule.bonus_points.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let uncapped = base.saturating_add(bonus);
    let (subtotal, cap_applied) = match rule.cap {
        Some(cap) if uncapped > cap => (cap, true),
        _ => (uncapped, false),
    };

    RuleParts {
        value,
        units,
        base,
        bonus,
        bonus_applied,
        cap_applied,
        subtotal,
    }
}

fn saturating_div(value: Decimal, divisor: Decimal) -> Decimal {
    value.checked_div(divisor).unwrap_or_else(|| {
        if value.is_sign_negative() != divisor.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}
