//! Scoring rule model and its flat wire record.
//!
//! [`ScoringRule`] is the typed, validated rule the engine consumes.
//! [`RuleRecord`] is the nullable, loosely-typed shape rules take in YAML
//! configuration and JSON exports. Every conversion from a record to a rule
//! goes through the rule validator, so a `ScoringRule` obtained from
//! deserialization is always valid.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::scoring::validate;

/// A single stat-to-points rule.
///
/// Points for one rule are `floor(value / per) * multiplier` (or
/// `value * multiplier` without `per`), plus a flat bonus when the raw value
/// falls inside the inclusive `[bonus_min, bonus_max]` range, then clipped
/// from above by `cap`.
///
/// # Example
///
/// ```
/// use fantasy_scoring::models::ScoringRule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rule = ScoringRule::new("passing_yards", Decimal::from_str("0.04").unwrap())
///     .with_per(Decimal::ONE)
///     .with_bonus(Decimal::from(300), None, Decimal::from(3));
///
/// assert_eq!(rule.stat_key, "passing_yards");
/// assert_eq!(rule.bonus_points, Some(Decimal::from(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleRecord", into = "RuleRecord")]
pub struct ScoringRule {
    /// The stat this rule reads.
    pub stat_key: String,
    /// Points per scoring unit.
    pub multiplier: Decimal,
    /// Unit size for floor-division scoring; strictly positive when present.
    pub per: Option<Decimal>,
    /// Inclusive lower bound of the bonus range.
    pub bonus_min: Option<Decimal>,
    /// Inclusive upper bound of the bonus range; unbounded when absent.
    pub bonus_max: Option<Decimal>,
    /// Flat points awarded once when the value is inside the bonus range.
    pub bonus_points: Option<Decimal>,
    /// Ceiling on this rule's own subtotal.
    pub cap: Option<Decimal>,
}

impl ScoringRule {
    /// Creates a plain `value * multiplier` rule with no optional clauses.
    pub fn new(stat_key: impl Into<String>, multiplier: Decimal) -> Self {
        Self {
            stat_key: stat_key.into(),
            multiplier,
            per: None,
            bonus_min: None,
            bonus_max: None,
            bonus_points: None,
            cap: None,
        }
    }

    /// Sets the unit size for floor-division scoring.
    pub fn with_per(mut self, per: Decimal) -> Self {
        self.per = Some(per);
        self
    }

    /// Sets the bonus range and the flat points it awards.
    pub fn with_bonus(mut self, min: Decimal, max: Option<Decimal>, points: Decimal) -> Self {
        self.bonus_min = Some(min);
        self.bonus_max = max;
        self.bonus_points = Some(points);
        self
    }

    /// Sets the ceiling on this rule's subtotal.
    pub fn with_cap(mut self, cap: Decimal) -> Self {
        self.cap = Some(cap);
        self
    }
}

/// Flat, nullable record used for configuration files and rule exports.
///
/// Numeric fields are kept as raw JSON values so that a non-numeric entry
/// can be reported as a validation error instead of a parse failure.
/// Numbers may be given as numbers or numeric strings.
///
/// # Example
///
/// ```
/// use fantasy_scoring::models::{RuleRecord, ScoringRule};
///
/// let record: RuleRecord = serde_json::from_str(
///     r#"{"stat_key": "rushing_yards", "multiplier": 0.1, "per": 1}"#,
/// ).unwrap();
/// let rule = ScoringRule::try_from(record).unwrap();
/// assert_eq!(rule.stat_key, "rushing_yards");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// The stat key.
    #[serde(default)]
    pub stat_key: Option<String>,
    /// Points per unit.
    #[serde(default)]
    pub multiplier: Option<Value>,
    /// Unit size.
    #[serde(default)]
    pub per: Option<Value>,
    /// Inclusive bonus lower bound.
    #[serde(default)]
    pub bonus_min: Option<Value>,
    /// Inclusive bonus upper bound.
    #[serde(default)]
    pub bonus_max: Option<Value>,
    /// Flat bonus award.
    #[serde(default)]
    pub bonus_points: Option<Value>,
    /// Subtotal ceiling.
    #[serde(default)]
    pub cap: Option<Value>,
}

impl TryFrom<RuleRecord> for ScoringRule {
    type Error = ValidationError;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        let stat_key = record
            .stat_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| missing("stat_key"))?;

        let multiplier = match &record.multiplier {
            Some(value) => parse_decimal(value).ok_or_else(|| missing("multiplier"))?,
            None => return Err(missing("multiplier")),
        };

        let per = match &record.per {
            Some(value) => Some(parse_decimal(value).ok_or_else(|| {
                ValidationError::InvalidPer {
                    value: value.to_string(),
                }
            })?),
            None => None,
        };

        let rule = ScoringRule {
            stat_key,
            multiplier,
            per,
            bonus_min: optional_numeric("bonus_min", record.bonus_min.as_ref())?,
            bonus_max: optional_numeric("bonus_max", record.bonus_max.as_ref())?,
            bonus_points: optional_numeric("bonus_points", record.bonus_points.as_ref())?,
            cap: optional_numeric("cap", record.cap.as_ref())?,
        };

        validate(&rule)?;
        Ok(rule)
    }
}

impl From<ScoringRule> for RuleRecord {
    fn from(rule: ScoringRule) -> Self {
        RuleRecord {
            stat_key: Some(rule.stat_key),
            multiplier: Some(decimal_to_value(rule.multiplier)),
            per: rule.per.map(decimal_to_value),
            bonus_min: rule.bonus_min.map(decimal_to_value),
            bonus_max: rule.bonus_max.map(decimal_to_value),
            bonus_points: rule.bonus_points.map(decimal_to_value),
            cap: rule.cap.map(decimal_to_value),
        }
    }
}

fn missing(field: &str) -> ValidationError {
    ValidationError::MissingField {
        field: field.to_string(),
    }
}

fn optional_numeric(field: &str, value: Option<&Value>) -> Result<Option<Decimal>, ValidationError> {
    match value {
        Some(raw) => parse_decimal(raw)
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidNumeric {
                field: field.to_string(),
                value: raw.to_string(),
            }),
        None => Ok(None),
    }
}

/// Reads a decimal from a JSON number or a numeric string.
fn parse_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Writes a decimal as the shortest JSON number that reads back exactly,
/// falling back to a string for values a float cannot carry.
fn decimal_to_value(value: Decimal) -> Value {
    let value = value.normalize();
    if value.scale() == 0 {
        if let Some(int) = value.to_i64() {
            return Value::from(int);
        }
    }
    if let Some(float) = value.to_f64() {
        let reads_back = Decimal::from_str(&float.to_string()).ok() == Some(value);
        if reads_back {
            if let Some(number) = serde_json::Number::from_f64(float) {
                return Value::Number(number);
            }
        }
    }
    Value::String(value.to_string())
}
