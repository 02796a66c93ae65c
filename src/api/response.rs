//! Response types for the payroll engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Payslip, PayrollRun};

/// Response body for `GET /runs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResponse {
    /// The committed run.
    pub run: PayrollRun,
    /// The payslips belonging to the run.
    pub payslips: Vec<Payslip>,
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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a run not found error response.
    pub fn run_not_found(run_id: impl std::fmt::Display) -> Self {
        Self::new("RUN_NOT_FOUND", format!("Payroll run not found: {}", run_id))
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
        match error {
            EngineError::InvalidPeriod { month, year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid payroll period: month {}, year {}", month, year),
                    "Month must be between 1 and 12 and year must be positive",
                ),
            },
            EngineError::EmptyRoster { month, year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EMPTY_ROSTER",
                    format!("No payslips to commit for period {}/{}", month, year),
                    "Set confirm_empty to commit a run with zero payslips",
                ),
            },
            EngineError::DownstreamUnavailable { upstream, message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "DOWNSTREAM_UNAVAILABLE",
                    format!("Upstream data source unavailable: {}", upstream),
                    message,
                ),
            },
            EngineError::PersistenceFailure { stage, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PERSISTENCE_FAILURE",
                    format!("Failed to persist payroll data at stage: {}", stage),
                    message,
                ),
            },
            EngineError::CatalogNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Component catalog error",
                    format!("Catalog file not found: {}", path),
                ),
            },
            EngineError::CatalogParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Component catalog parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_period_maps_to_400() {
        let engine_error = EngineError::InvalidPeriod { month: 13, year: 2026 };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_PERIOD");
    }

    #[test]
    fn test_empty_roster_maps_to_400() {
        let engine_error = EngineError::EmptyRoster { month: 7, year: 2026 };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "EMPTY_ROSTER");
    }

    #[test]
    fn test_downstream_unavailable_maps_to_503() {
        let engine_error = EngineError::DownstreamUnavailable {
            upstream: "attendance".to_string(),
            message: "connection refused".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_error.error.code, "DOWNSTREAM_UNAVAILABLE");
    }

    #[test]
    fn test_persistence_failure_maps_to_500() {
        let engine_error = EngineError::PersistenceFailure {
            stage: "insert_run".to_string(),
            message: "disk full".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "PERSISTENCE_FAILURE");
    }
}
