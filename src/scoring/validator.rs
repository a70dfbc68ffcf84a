//! Scoring rule validation.
//!
//! Validation is the gate a rule passes before it is accepted into a rule
//! set (profile creation, configuration loading, import). The engine never
//! re-checks rules while scoring.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{RuleRecord, ScoringRule};

/// Checks a rule's internal numeric consistency.
///
/// # Errors
///
/// - [`ValidationError::MissingField`] if `stat_key` is empty.
/// - [`ValidationError::InvalidPer`] if `per` is present and not positive.
/// - [`ValidationError::BonusRangeInverted`] if both bonus bounds are present
///   and `bonus_max` does not exceed `bonus_min`.
///
/// Non-numeric values can only occur in a raw [`RuleRecord`]; those are
/// reported as `MissingField`, `InvalidPer` or `InvalidNumeric` by
/// [`validate_record`].
///
/// # Examples
///
/// ```
/// use fantasy_scoring::error::ValidationError;
/// use fantasy_scoring::models::ScoringRule;
/// use fantasy_scoring::scoring::validate;
/// use rust_decimal::Decimal;
///
/// let ok = ScoringRule::new("passing_yards", Decimal::new(4, 2));
/// assert!(validate(&ok).is_ok());
///
/// let inverted = ScoringRule::new("passing_yards", Decimal::new(4, 2))
///     .with_bonus(Decimal::from(100), Some(Decimal::from(50)), Decimal::from(3));
/// assert!(matches!(
///     validate(&inverted),
///     Err(ValidationError::BonusRangeInverted { .. })
/// ));
/// ```
pub fn validate(rule: &ScoringRule) -> Result<(), ValidationError> {
    if rule.stat_key.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "stat_key".to_string(),
        });
    }

    if let Some(per) = rule.per {
        if per <= Decimal::ZERO {
            return Err(ValidationError::InvalidPer {
                value: per.to_string(),
            });
        }
    }

    if let (Some(bonus_min), Some(bonus_max)) = (rule.bonus_min, rule.bonus_max) {
        if bonus_max <= bonus_min {
            return Err(ValidationError::BonusRangeInverted {
                bonus_min,
                bonus_max,
            });
        }
    }

    Ok(())
}

/// Validates a raw wire record, including field presence and numeric types.
pub fn validate_record(record: &RuleRecord) -> Result<(), ValidationError> {
    ScoringRule::try_from(record.clone()).map(|_| ())
}
