//! Error types for the severance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report, from configuration loading to
//! employee validation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the severance engine.
///
/// Expected validation failures (missing admission date, negative salary,
/// inverted dates) are returned as values of this type so callers can show
/// the message inline instead of aborting.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
///
/// let error = EngineError::InvalidEmployee {
///     field: "base_salary".to_string(),
///     message: "is required".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid employee field 'base_salary': is required");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
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

    /// A statutory parameter in the configuration is out of range.
    #[error("Invalid policy value '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An employment record was missing a field or carried a malformed value.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The end of the service span precedes the admission date.
    #[error("End date {end_date} precedes admission date {admission_date}")]
    InconsistentDates {
        /// The employee's admission date.
        admission_date: NaiveDate,
        /// The termination or reference date used as the end of the span.
        end_date: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Returns a stable, machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
            EngineError::InvalidPolicy { .. } => "INVALID_POLICY",
            EngineError::InvalidEmployee { .. } => "INVALID_EMPLOYEE",
            EngineError::InconsistentDates { .. } => "INCONSISTENT_DATES",
            EngineError::CalculationError { .. } => "CALCULATION_ERROR",
        }
    }

    pub(crate) fn invalid_employee(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidEmployee {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
