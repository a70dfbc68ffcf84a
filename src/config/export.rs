//! Rule set and profile export/import.
//!
//! Rule sets travel as a JSON list of flat records with every optional
//! field present (as `null` when unset), in rule order. Imports run every
//! record through the validator.

use chrono::Utc;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{RuleRecord, RuleSet, ScoringProfile};

use super::types::ProfileFile;

/// Source name reported for rules that fail validation during import.
pub const IMPORT_SOURCE: &str = "import";

/// Serializes a rule set to its JSON export form.
///
/// # Example
///
/// ```
/// use fantasy_scoring::config::{defaults, export_rules, import_rules};
///
/// let standard = &defaults()["Standard"];
/// let json = export_rules(standard).unwrap();
/// assert_eq!(&import_rules(&json).unwrap(), standard);
/// ```
pub fn export_rules(rules: &RuleSet) -> EngineResult<String> {
    let json = serde_json::to_string_pretty(&rules.to_records()).map_err(|e| {
        EngineError::ExportError {
            message: e.to_string(),
        }
    })?;
    debug!(rules = rules.len(), bytes = json.len(), "Exported rule set");
    Ok(json)
}

/// Parses and validates a JSON rule export.
///
/// Returns `ExportError` when the payload is not a list of records and
/// `InvalidRule` (naming the record's index) when a record is rejected.
pub fn import_rules(json: &str) -> EngineResult<RuleSet> {
    let records: Vec<RuleRecord> =
        serde_json::from_str(json).map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })?;
    let rules = RuleSet::from_records(IMPORT_SOURCE, records)?;
    debug!(rules = rules.len(), "Imported rule set");
    Ok(rules)
}

/// Serializes a profile's name, description, visibility and rules.
pub fn export_profile(profile: &ScoringProfile) -> EngineResult<String> {
    serde_json::to_string_pretty(&ProfileFile::from(profile)).map_err(|e| {
        EngineError::ExportError {
            message: e.to_string(),
        }
    })
}

/// Parses and validates an exported profile, giving it a fresh identifier.
pub fn import_profile(json: &str) -> EngineResult<ScoringProfile> {
    let file: ProfileFile = serde_json::from_str(json).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })?;
    file.into_profile(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::error::ValidationError;
    use crate::models::ScoringRule;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_export_writes_nulls_for_unset_fields() {
        let rules = RuleSet::new(vec![ScoringRule::new("receptions", dec("0.5"))]);
        let json = export_rules(&rules).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let record = value[0].as_object().unwrap();
        assert_eq!(record.len(), 7);
        assert!(record["cap"].is_null());
        assert!(record["bonus_max"].is_null());
        assert_eq!(record["multiplier"], serde_json::json!(0.5));
    }

    #[test]
    fn test_export_import_export_is_byte_identical() {
        let rules = RuleSet::new(vec![
            ScoringRule::new("passing_yards", dec("0.04"))
                .with_per(dec("1"))
                .with_bonus(dec("300"), Some(dec("399.5")), dec("3"))
                .with_cap(dec("25")),
            ScoringRule::new("interceptions", dec("-2")),
            ScoringRule::new("passing_yards", dec("0.033333")).with_per(dec("25")),
        ]);
        let first = export_rules(&rules).unwrap();
        let second = export_rules(&import_rules(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_import_preserves_order_and_values() {
        let rules = import_rules(
            r#"[
                {"stat_key": "fumbles_lost", "multiplier": -2},
                {"stat_key": "passing_yards", "multiplier": 0.04, "per": 1, "bonus_min": 300, "bonus_points": 3}
            ]"#,
        )
        .unwrap();
        assert_eq!(rules.rules()[0].stat_key, "fumbles_lost");
        assert_eq!(rules.rules()[1].bonus_min, Some(dec("300")));
    }

    #[test]
    fn test_import_reports_bad_record_index() {
        let err = import_rules(
            r#"[
                {"stat_key": "receptions", "multiplier": 1},
                {"stat_key": "receptions", "multiplier": 1},
                {"stat_key": "rushing_yards", "multiplier": 0.1, "per": 0}
            ]"#,
        )
        .unwrap_err();
        match err {
            EngineError::InvalidRule {
                profile,
                index,
                source,
            } => {
                assert_eq!(profile, IMPORT_SOURCE);
                assert_eq!(index, 2);
                assert!(matches!(source, ValidationError::InvalidPer { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_import_rejects_non_list_payload() {
        let err = import_rules(r#"{"stat_key": "receptions"}"#).unwrap_err();
        assert!(matches!(err, EngineError::ExportError { .. }));
    }

    #[test]
    fn test_profile_round_trip() {
        let profile = ScoringProfile::new("PPR", defaults()["PPR"].clone(), Utc::now())
            .with_description("Default PPR scoring profile");
        let imported = import_profile(&export_profile(&profile).unwrap()).unwrap();

        assert_eq!(imported.name, profile.name);
        assert_eq!(imported.description, profile.description);
        assert_eq!(imported.rules, profile.rules);
        assert_ne!(imported.profile_id, profile.profile_id);
    }
}
