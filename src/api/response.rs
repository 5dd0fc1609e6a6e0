//! Response types for the InHand API.
//!
//! This module defines the success bodies that are not engine records
//! themselves, the error response structure, and the mapping from engine
//! errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{RegimeConfig, SlabBand};
use crate::error::EngineError;

/// Summary of one configured regime, returned by `/regimes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeSummary {
    /// Regime code.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Assessment-year label.
    pub assessment_year: String,
    /// True for the regime used when a request names none.
    pub is_default: bool,
    /// Taxable income at or below which no tax is due.
    pub rebate_threshold: Decimal,
    /// Cess on the slab tax.
    pub cess_rate: Decimal,
    /// Standard deduction.
    pub standard_deduction: Decimal,
    /// The slab table.
    pub slabs: Vec<SlabBand>,
}

impl RegimeSummary {
    /// Summarises `regime`.
    pub fn new(regime: &RegimeConfig, is_default: bool) -> Self {
        Self {
            code: regime.code.clone(),
            name: regime.name.clone(),
            assessment_year: regime.assessment_year.clone(),
            is_default,
            rebate_threshold: regime.rebate_threshold,
            cess_rate: regime.cess_rate,
            standard_deduction: regime.standard_deduction,
            slabs: regime.slabs.bands().to_vec(),
        }
    }
}

/// Response body for `/regimes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimesResponse {
    /// Every configured regime, ordered by code.
    pub regimes: Vec<RegimeSummary>,
}

/// Response body for `/advice`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    /// Free-text advice, or a fixed fallback message.
    pub advice: String,
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

    /// Creates a regime not found error response.
    pub fn regime_not_found(code: &str) -> Self {
        Self::with_details(
            "REGIME_NOT_FOUND",
            format!("Tax regime not found: {}", code),
            format!("The regime code '{}' is not configured on this engine", code),
        )
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
        match error {
            EngineError::RegimeNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::regime_not_found(&code),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            err @ (EngineError::InvalidRegime { .. } | EngineError::InvalidSlabTable { .. }) => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Invalid regime configuration",
                        err.to_string(),
                    ),
                }
            }
        }
    }
}
