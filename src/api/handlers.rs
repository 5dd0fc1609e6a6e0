//! HTTP request handlers for the InHand API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::advisor::advise_or_fallback;
use crate::calculation::{compare_in_hand, compute_breakdown, evaluate_tax_detailed};
use crate::config::RegimeConfig;
use crate::export::Payslip;
use crate::models::{
    BreakdownResult, InputWarning, MAX_AMOUNT, SalaryBreakdown, SalaryComponents, clamp_amount,
};

use super::request::{BreakdownRequest, CompareRequest, PayslipRequest, TaxRequest};
use super::response::{
    AdviceResponse, ApiError, ApiErrorResponse, RegimeSummary, RegimesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/regimes", get(regimes_handler))
        .route("/tax", post(tax_handler))
        .route("/breakdown", post(breakdown_handler))
        .route("/payslip", post(payslip_handler))
        .route("/compare", post(compare_handler))
        .route("/advice", post(advice_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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

/// Looks up the requested regime, or builds the error response.
fn resolve_regime<'a>(
    state: &'a AppState,
    code: Option<&str>,
    correlation_id: Uuid,
) -> Result<&'a RegimeConfig, Response> {
    state.config().resolve_regime(code).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Regime lookup failed"
        );
        error_response(err.into())
    })
}

/// Sanitizes the caller's components and computes the breakdown.
fn breakdown_for(
    regime: &RegimeConfig,
    components: &SalaryComponents,
    correlation_id: Uuid,
) -> (SalaryBreakdown, Vec<InputWarning>) {
    let (components, warnings) = components.sanitized();
    for warning in &warnings {
        warn!(
            correlation_id = %correlation_id,
            field = %warning.field,
            "Coerced salary component"
        );
    }
    (compute_breakdown(&components, regime), warnings)
}

/// Handler for GET /regimes.
async fn regimes_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    let default_code = &config.metadata().default_regime;
    let regimes = config
        .regimes()
        .map(|regime| RegimeSummary::new(regime, &regime.code == default_code))
        .collect();

    json_response(StatusCode::OK, RegimesResponse { regimes })
}

/// Handler for POST /tax.
async fn tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let regime = match resolve_regime(&state, request.regime.as_deref(), correlation_id) {
        Ok(regime) => regime,
        Err(response) => return response,
    };

    let (taxable_income, coerced) = clamp_amount(request.taxable_income);
    if let Some(message) = coerced {
        warn!(
            correlation_id = %correlation_id,
            field = "taxable_income",
            reason = %message,
            "Coerced taxable income"
        );
    }
    let evaluation = evaluate_tax_detailed(taxable_income, regime);

    info!(
        correlation_id = %correlation_id,
        regime = %regime.code,
        taxable_income = %taxable_income,
        tax = %evaluation.total,
        rebate_applied = evaluation.rebate_applied,
        "Tax evaluated"
    );
    json_response(StatusCode::OK, evaluation)
}

/// Handler for POST /breakdown.
///
/// Accepts salary components and returns the full breakdown.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let regime = match resolve_regime(&state, request.regime.as_deref(), correlation_id) {
        Ok(regime) => regime,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let (breakdown, warnings) = breakdown_for(regime, &request.components, correlation_id);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        regime = %regime.code,
        gross_annual = %breakdown.gross_annual,
        in_hand_monthly = %breakdown.in_hand_monthly,
        duration_us = duration.as_micros(),
        "Breakdown completed successfully"
    );

    let result = BreakdownResult {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        monthly: breakdown.monthly_view(),
        breakdown,
        warnings,
    };
    json_response(StatusCode::OK, result)
}

/// Handler for POST /payslip.
///
/// Returns the monthly payslip as a plain-text attachment.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let regime = match resolve_regime(&state, request.regime.as_deref(), correlation_id) {
        Ok(regime) => regime,
        Err(response) => return response,
    };

    let (breakdown, _) = breakdown_for(regime, &request.components, correlation_id);
    let payslip = Payslip {
        breakdown: &breakdown,
        regime,
        period: request.period.unwrap_or_else(|| Utc::now().date_naive()),
        issuer: &state.config().metadata().name,
    };
    let disposition = format!("attachment; filename=\"{}\"", payslip.file_name());

    info!(
        correlation_id = %correlation_id,
        regime = %regime.code,
        file_name = %payslip.file_name(),
        "Payslip rendered"
    );
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payslip.render(),
    )
        .into_response()
}

/// Handler for POST /compare.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compare request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let regime = match resolve_regime(&state, request.regime.as_deref(), correlation_id) {
        Ok(regime) => regime,
        Err(response) => return response,
    };

    let current = request
        .current_in_hand_monthly
        .clamp(-MAX_AMOUNT, MAX_AMOUNT);
    if current != request.current_in_hand_monthly {
        warn!(
            correlation_id = %correlation_id,
            field = "current_in_hand_monthly",
            "Coerced current take-home to the amount limit"
        );
    }

    let (breakdown, _) = breakdown_for(regime, &request.components, correlation_id);
    let comparison = compare_in_hand(breakdown.in_hand_monthly, current);

    info!(
        correlation_id = %correlation_id,
        regime = %regime.code,
        difference = %comparison.difference,
        "Comparison completed"
    );
    json_response(StatusCode::OK, comparison)
}

/// Handler for POST /advice.
///
/// Always answers 200; an unavailable advisory service yields the fallback
/// message.
async fn advice_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing advice request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let regime = match resolve_regime(&state, request.regime.as_deref(), correlation_id) {
        Ok(regime) => regime,
        Err(response) => return response,
    };

    let (breakdown, _) = breakdown_for(regime, &request.components, correlation_id);
    let advice = advise_or_fallback(state.advisor(), &breakdown).await;

    json_response(StatusCode::OK, AdviceResponse { advice })
}
