//! Ordered rule set model.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{RuleRecord, ScoringRule};

/// An ordered sequence of scoring rules applied together.
///
/// Rules are additive and independent, so order never changes a score, but
/// it is preserved so exports and imports reproduce the same bytes.
///
/// # Example
///
/// ```
/// use fantasy_scoring::models::{RuleSet, ScoringRule};
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::new(vec![
///     ScoringRule::new("passing_touchdowns", Decimal::from(4)),
///     ScoringRule::new("interceptions", Decimal::from(-2)),
/// ]);
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules.rules()[1].stat_key, "interceptions");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<ScoringRule>,
}

impl RuleSet {
    /// Creates a rule set from rules in their declared order.
    pub fn new(rules: Vec<ScoringRule>) -> Self {
        Self { rules }
    }

    /// Converts wire records into a rule set, validating each one.
    ///
    /// `source` names where the records came from (a profile name or file)
    /// and is reported alongside the index of the first rejected record.
    pub fn from_records(
        source: &str,
        records: impl IntoIterator<Item = RuleRecord>,
    ) -> EngineResult<Self> {
        let rules = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                ScoringRule::try_from(record).map_err(|source_err| EngineError::InvalidRule {
                    profile: source.to_string(),
                    index,
                    source: source_err,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Converts the rules back into wire records, preserving order.
    pub fn to_records(&self) -> Vec<RuleRecord> {
        self.rules.iter().cloned().map(RuleRecord::from).collect()
    }

    /// Appends a rule at the end of the set.
    pub fn push(&mut self, rule: ScoringRule) {
        self.rules.push(rule);
    }

    /// Returns the rules in declared order.
    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    /// Returns the first rule reading `stat_key`, if any.
    pub fn find(&self, stat_key: &str) -> Option<&ScoringRule> {
        self.rules.iter().find(|rule| rule.stat_key == stat_key)
    }

    /// Iterates over the rules in declared order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoringRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a ScoringRule;
    type IntoIter = std::slice::Iter<'a, ScoringRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<ScoringRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = ScoringRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
