//! Response types for the severance engine API.
//!
//! This module defines the success bodies for both endpoints and the error
//! response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{Benefits, CompanyRollup, PredictedBand, SeveranceBreakdown};

/// Body returned by `/severance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveranceResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the estimate is for.
    pub employee_id: String,
    /// The itemised estimate.
    pub breakdown: SeveranceBreakdown,
    /// Point estimate of the likely realized amount.
    pub predicted_value: Decimal,
    /// The full likely-realized band.
    pub predicted_band: PredictedBand,
    /// Benefits echoed for display.
    pub benefits: Benefits,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}

/// Body returned by `/severance/company`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySeveranceResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Summed exposure and exclusions.
    pub rollup: CompanyRollup,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let code = error.code();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(code, "Configuration error", error.to_string()),
            },
            EngineError::InvalidEmployee { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    "The employee data contains missing or invalid information",
                ),
            },
            EngineError::InconsistentDates { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    "The termination or reference date must not precede the admission date",
                ),
            },
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(code, "Calculation failed", error.to_string()),
            },
        }
    }
}
