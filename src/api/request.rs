//! Request types for the InHand API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SalaryComponents;

/// Request body for `/breakdown` and `/advice`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// Regime code; the configured default is used when omitted.
    #[serde(default)]
    pub regime: Option<String>,
    /// The annual salary components. Omitted components count as zero.
    #[serde(default)]
    pub components: SalaryComponents,
}

/// Request body for `/tax`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRequest {
    /// Regime code; the configured default is used when omitted.
    #[serde(default)]
    pub regime: Option<String>,
    /// Annual taxable income.
    pub taxable_income: Decimal,
}

/// Request body for `/payslip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// Regime code; the configured default is used when omitted.
    #[serde(default)]
    pub regime: Option<String>,
    /// The annual salary components.
    #[serde(default)]
    pub components: SalaryComponents,
    /// Any date in the payslip month; today when omitted.
    #[serde(default)]
    pub period: Option<NaiveDate>,
}

/// Request body for `/compare`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    /// Regime code; the configured default is used when omitted.
    #[serde(default)]
    pub regime: Option<String>,
    /// The annual salary components of the offer.
    #[serde(default)]
    pub components: SalaryComponents,
    /// What the employee takes home per month today.
    pub current_in_hand_monthly: Decimal,
}
