//! Core data models for the InHand engine.
//!
//! This module contains the salary inputs and the breakdown records the
//! calculation produces.

mod salary_breakdown;
mod salary_components;

pub use salary_breakdown::{
    BreakdownResult, MONTHS_PER_YEAR, MonthlyView, SalaryBreakdown, per_month,
};
pub use salary_components::{InputWarning, MAX_AMOUNT, SalaryComponents, clamp_amount};
