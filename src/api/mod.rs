//! HTTP API module for the InHand engine.
//!
//! This module exposes the tax evaluator, the breakdown aggregator and the
//! collaborators that consume a breakdown (payslip export, take-home
//! comparison, advice) as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BreakdownRequest, CompareRequest, PayslipRequest, TaxRequest};
pub use response::{AdviceResponse, ApiError, RegimeSummary, RegimesResponse};
pub use state::AppState;
