//! HTTP request handlers for the severance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    add_to_company_rollup, calculate_severance_with_policy, predicted_band_with_rules,
};
use crate::models::{CompanyRollup, EmploymentRecord};

use super::request::{CompanySeveranceRequest, SeveranceRequest};
use super::response::{ApiError, ApiErrorResponse, CompanySeveranceResponse, SeveranceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/severance", post(severance_handler))
        .route("/severance/company", post(company_severance_handler))
        .with_state(state)
}

/// Handler for POST /severance.
///
/// Estimates the severance cost of one employee.
async fn severance_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeveranceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing severance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let reference_date = request.reference_date.unwrap_or_else(today);
    let employee_id = request.employee.id.clone();
    let benefits = request.employee.benefits.clone();

    let start_time = Instant::now();
    let result = EmploymentRecord::try_from(request.employee).and_then(|employee| {
        calculate_severance_with_policy(&employee, reference_date, state.config().policy())
    });

    match result {
        Ok(breakdown) => {
            let duration = start_time.elapsed();
            let band =
                predicted_band_with_rules(breakdown.total(), &state.config().policy().predicted_value);
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                contract_type = breakdown.contract_type.as_str(),
                months_worked = breakdown.months_worked,
                total_estimated = %breakdown.total_estimated,
                duration_us = duration.as_micros(),
                "Severance calculated"
            );
            json_response(
                StatusCode::OK,
                SeveranceResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    employee_id,
                    breakdown,
                    predicted_value: band.point,
                    predicted_band: band,
                    benefits,
                    duration_us: duration.as_micros() as u64,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Severance calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Handler for POST /severance/company.
///
/// Sums severance exposure across employees. Employees whose rows cannot be
/// parsed or calculated are reported as exclusions, in input order; the
/// request itself only fails on a malformed body.
async fn company_severance_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompanySeveranceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing company severance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let reference_date = request.reference_date.unwrap_or_else(today);
    let start_time = Instant::now();

    let policy = state.config().policy();
    let mut rollup = CompanyRollup::default();
    for row in request.into_rows() {
        match row.record {
            Ok(employee) => add_to_company_rollup(&mut rollup, &employee, reference_date, policy),
            Err(err) => rollup.exclude(row.employee_id, &err),
        }
    }

    let duration = start_time.elapsed();
    if !rollup.is_complete() {
        warn!(
            correlation_id = %correlation_id,
            excluded = rollup.excluded_count(),
            "Employees excluded from company rollup"
        );
    }
    info!(
        correlation_id = %correlation_id,
        employees_included = rollup.employees_included,
        total_severance = %rollup.total_severance,
        duration_us = duration.as_micros(),
        "Company rollup calculated"
    );

    json_response(
        StatusCode::OK,
        CompanySeveranceResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            rollup,
            duration_us: duration.as_micros() as u64,
        },
    )
}

/// Today's date at the request boundary.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a body extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::{Body, Bytes},
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/clt").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: String) -> (StatusCode, Option<String>, Bytes) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, bytes)
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let body = serde_json::json!({
            "employee": {
                "id": "emp_001",
                "admission_date": "2023-01-01",
                "termination_date": "2024-07-01",
                "contract_type": "CLT",
                "base_salary": "3000.00"
            },
            "reference_date": "2025-01-01"
        });

        let (status, content_type, bytes) = post_json("/severance", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let result: SeveranceResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result.employee_id, "emp_001");
        assert_eq!(result.breakdown.months_worked, 18);
        assert_eq!(result.breakdown.total_estimated, "12848.00");
        assert_eq!(result.predicted_value, Decimal::from_str("7066.40").unwrap());
        assert_eq!(result.predicted_band.point, result.predicted_value);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let (status, _, bytes) = post_json("/severance", "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_employee_id_returns_400() {
        let body = r#"{
            "employee": {
                "admission_date": "2023-01-01",
                "contract_type": "CLT",
                "base_salary": 3000
            }
        }"#;

        let (status, _, bytes) = post_json("/severance", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert!(
            error.message.contains("missing field") || error.message.to_lowercase().contains("id"),
            "Expected error message to mention missing field or id, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_negative_salary_returns_invalid_employee() {
        let body = serde_json::json!({
            "employee": {
                "id": "emp_001",
                "admission_date": "2023-01-01",
                "contract_type": "CLT",
                "base_salary": -100
            },
            "reference_date": "2025-01-01"
        });

        let (status, _, bytes) = post_json("/severance", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_EMPLOYEE");
        assert!(error.message.contains("negative"));
    }

    #[tokio::test]
    async fn test_company_rollup_reports_unparseable_rows() {
        let body = serde_json::json!({
            "employees": [
                {
                    "id": "emp_001",
                    "admission_date": "2023-01-01",
                    "termination_date": "2024-07-01",
                    "contract_type": "CLT",
                    "base_salary": 3000
                },
                {
                    "id": "emp_002",
                    "admission_date": "not a date",
                    "contract_type": "PJ",
                    "base_salary": 3000
                }
            ],
            "reference_date": "2025-01-01"
        });

        let (status, _, bytes) = post_json("/severance/company", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: CompanySeveranceResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result.rollup.employees_included, 1);
        assert_eq!(result.rollup.excluded_count(), 1);
        assert_eq!(result.rollup.excluded[0].employee_id, "emp_002");
        assert_eq!(
            result.rollup.total_severance,
            Decimal::from_str("12848.00").unwrap()
        );
    }

    #[tokio::test]
    async fn test_company_rollup_exclusions_follow_input_order() {
        let body = serde_json::json!({
            "employees": [
                {
                    "id": "emp_001",
                    "admission_date": "2024-05-01",
                    "termination_date": "2024-04-01",
                    "contract_type": "CLT",
                    "base_salary": 3000
                },
                {
                    "id": "emp_002",
                    "admission_date": "2023-01-01",
                    "contract_type": "ESTAGIO",
                    "base_salary": 3000
                },
                {
                    "id": "emp_003",
                    "admission_date": "2023-01-01",
                    "termination_date": "2024-07-01",
                    "contract_type": "CLT",
                    "base_salary": 3000
                }
            ],
            "reference_date": "2025-01-01"
        });

        let (status, _, bytes) = post_json("/severance/company", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: CompanySeveranceResponse = serde_json::from_slice(&bytes).unwrap();
        let excluded: Vec<(&str, &str)> = result
            .rollup
            .excluded
            .iter()
            .map(|e| (e.employee_id.as_str(), e.code.as_str()))
            .collect();
        assert_eq!(
            excluded,
            vec![("emp_001", "INCONSISTENT_DATES"), ("emp_002", "INVALID_EMPLOYEE")]
        );
        assert_eq!(result.rollup.employees_included, 1);
    }
}
