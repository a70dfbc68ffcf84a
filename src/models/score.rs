//! Score and score breakdown models.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of decimal places every score carries.
pub const SCORE_DECIMAL_PLACES: u32 = 2;

/// A fantasy point total, always carried at exactly two decimal places.
///
/// Serializes as a JSON number; deserialized values are re-rounded.
///
/// # Example
///
/// ```
/// use fantasy_scoring::models::Score;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let score = Score::from_total(Decimal::from_str("3.3333").unwrap());
/// assert_eq!(score.to_string(), "3.33");
/// assert_eq!(score.to_f64(), 3.33);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(Decimal);

impl Score {
    /// A score of zero.
    pub const ZERO: Score = Score(Decimal::ZERO);

    /// Rounds a raw total to two decimal places, half to even.
    pub fn from_total(total: Decimal) -> Self {
        let mut rounded =
            total.round_dp_with_strategy(SCORE_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(SCORE_DECIMAL_PLACES);
        Score(rounded)
    }

    /// Returns the score as a decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the score as a float for consumers that need one.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Score::from_total)
    }
}

impl From<Score> for Decimal {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// How a single rule contributed to a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContribution {
    /// One-based position of the rule in its rule set.
    pub step_number: u32,
    /// The stat the rule read.
    pub stat_key: String,
    /// The raw stat value (zero when absent).
    pub value: Decimal,
    /// Scoring units after per-unit floor division.
    pub units: Decimal,
    /// `units * multiplier`.
    pub base: Decimal,
    /// The flat bonus awarded (zero when the range was not met).
    pub bonus: Decimal,
    /// Whether the value fell inside the bonus range.
    pub bonus_applied: bool,
    /// Whether the cap lowered the subtotal.
    pub cap_applied: bool,
    /// The rule's contribution to the total.
    pub subtotal: Decimal,
}

/// A score together with every rule's contribution to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Per-rule contributions in rule set order.
    pub contributions: Vec<RuleContribution>,
    /// The rounded total.
    pub total: Score,
}
