//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;
use crate::committer::{CommitParams, commit_run};
use crate::error::EngineResult;
use crate::models::{Employee, PayrollCalculation, Period};
use crate::resolver::resolve_roster;

use super::request::{CalculationRequest, CommitRequest};
use super::response::{ApiError, ApiErrorResponse, RunResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/runs", post(commit_handler))
        .route("/runs/:id", get(get_run_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into the API error envelope.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
    }
}

/// Fetches period data and produces the full draft calculation.
///
/// Inactive employees are dropped from the roster before calculation;
/// `employee_ids`, when present, narrows the roster further.
fn build_period_calculation(
    state: &AppState,
    period: Period,
    employee_ids: Option<&[String]>,
) -> EngineResult<PayrollCalculation> {
    period.validate()?;

    let mut roster: Vec<Employee> = state
        .data()
        .roster()?
        .into_iter()
        .filter(|e| e.is_active)
        .collect();
    if let Some(ids) = employee_ids {
        roster.retain(|e| ids.contains(&e.id));
    }

    let attendance = state.data().attendance(period)?;
    let approved_leave = state.data().approved_leave(period)?;
    let overrides = state.data().overrides()?;

    let resolved = resolve_roster(&roster, state.catalog().components(), &overrides);

    calculate(period, &roster, &attendance, &approved_leave, &resolved)
}

/// Handler for the `POST /calculate` endpoint.
///
/// Previews the payroll calculation for a period without persisting
/// anything.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(rejection_error(rejection, correlation_id)),
            )
                .into_response();
        }
    };

    match build_period_calculation(&state, request.period(), request.employee_ids.as_deref()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                period = %result.period,
                employee_count = result.totals.employee_count,
                total_net = %result.totals.total_net,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the `POST /runs` endpoint.
///
/// Commits the operator-reviewed payslip drafts carried in the request
/// as a new payroll run. Nothing is recalculated here: the run persists
/// exactly what the operator reviewed, even if stored attendance or
/// components have changed since the `/calculate` preview.
async fn commit_handler(
    State(state): State<AppState>,
    payload: Result<Json<CommitRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing commit request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(rejection_error(rejection, correlation_id)),
            )
                .into_response();
        }
    };

    let params = CommitParams {
        period: request.period(),
        title: request.title,
        notes: request.notes,
        created_by: request.created_by,
    };

    match commit_run(
        state.store(),
        state.audit(),
        params,
        request.payslips,
        request.confirm_empty,
    ) {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %run.id,
                "Run committed successfully"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(run),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Commit failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the `GET /runs/{id}` endpoint.
async fn get_run_handler(
    State(state): State<AppState>,
    Path(run_id): Path<Uuid>,
) -> impl IntoResponse {
    let run = match state.store().get_run(run_id) {
        Ok(Some(run)) => run,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::run_not_found(run_id)),
            )
                .into_response();
        }
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    match state.store().payslips_for_run(run_id) {
        Ok(payslips) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(RunResponse { run, payslips }),
        )
            .into_response(),
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
