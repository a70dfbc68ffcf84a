//! Error types for the fantasy scoring engine.
//!
//! Scoring itself cannot fail. Errors come from the boundaries around it:
//! rule validation, profile configuration loading, and rule export/import.

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a scoring rule was rejected before being accepted into a rule set.
///
/// # Example
///
/// ```
/// use fantasy_scoring::error::ValidationError;
///
/// let error = ValidationError::MissingField {
///     field: "multiplier".to_string(),
/// };
/// assert_eq!(error.to_string(), "missing required field: multiplier");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent, empty, or not numeric.
    #[error("missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The `per` unit size was not numeric or not strictly positive.
    #[error("per must be a number greater than 0, got {value}")]
    InvalidPer {
        /// The offending value as supplied.
        value: String,
    },

    /// An optional numeric field held something other than a number.
    #[error("{field} must be numeric, got {value}")]
    InvalidNumeric {
        /// The name of the field.
        field: String,
        /// The offending value as supplied.
        value: String,
    },

    /// The bonus range upper bound does not exceed its lower bound.
    #[error("bonus_max must be greater than bonus_min ({bonus_max} <= {bonus_min})")]
    BonusRangeInverted {
        /// The inclusive lower bound.
        bonus_min: Decimal,
        /// The inclusive upper bound.
        bonus_max: Decimal,
    },
}

/// The main error type for everything surrounding the scoring engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule inside a profile or import payload failed validation.
    #[error("Invalid rule #{index} in '{profile}': {source}")]
    InvalidRule {
        /// The profile (or import source) the rule belongs to.
        profile: String,
        /// Zero-based position of the rule in its rule set.
        index: usize,
        /// The underlying validation failure.
        #[source]
        source: ValidationError,
    },

    /// No profile with the requested name exists.
    #[error("Scoring profile not found: {name}")]
    ProfileNotFound {
        /// The requested profile name.
        name: String,
    },

    /// Two profiles share the same name.
    #[error("Duplicate scoring profile name: {name}")]
    DuplicateProfile {
        /// The duplicated name.
        name: String,
    },

    /// A rule set could not be serialized or deserialized.
    #[error("Rule export error: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
