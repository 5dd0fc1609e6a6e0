//! The salary breakdown record and its monthly view.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::InputWarning;

/// Number of pay periods in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// The full take-home breakdown for one set of salary components.
///
/// Built fresh by [`compute_breakdown`](crate::calculation::compute_breakdown)
/// and never mutated. All amounts are unrounded; formatting is left to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Code of the regime the breakdown was computed under.
    pub regime: String,
    /// Annual basic pay.
    pub basic_annual: Decimal,
    /// Annual house rent allowance.
    pub hra_annual: Decimal,
    /// Annual special allowance.
    pub special_allowance_annual: Decimal,
    /// Annual device benefit.
    pub device_benefit_annual: Decimal,
    /// Annual leave travel allowance.
    pub travel_allowance_annual: Decimal,
    /// Sum of the five components.
    pub gross_annual: Decimal,
    /// `gross_annual / 12`.
    pub gross_monthly: Decimal,
    /// The regime's standard deduction.
    pub standard_deduction: Decimal,
    /// `max(0, gross_annual - standard_deduction)`.
    pub taxable_income: Decimal,
    /// Income tax for the year, cess included.
    pub annual_income_tax: Decimal,
    /// `annual_income_tax / 12`.
    pub monthly_income_tax: Decimal,
    /// Flat professional tax per month.
    pub professional_tax_monthly: Decimal,
    /// Provident-fund contribution per month.
    pub provident_fund_monthly: Decimal,
    /// Provident-fund contribution for the year (never above the cap).
    pub provident_fund_annual: Decimal,
    /// True when the annual cap reduced the provident-fund contribution.
    pub provident_fund_capped: bool,
    /// Income tax + professional tax + provident fund, for the year.
    pub total_deductions: Decimal,
    /// `gross_annual - total_deductions`. May be negative.
    pub in_hand_annual: Decimal,
    /// `in_hand_annual / 12`.
    pub in_hand_monthly: Decimal,
}

/// Every figure of a breakdown expressed per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyView {
    /// Monthly basic pay.
    pub basic: Decimal,
    /// Monthly house rent allowance.
    pub hra: Decimal,
    /// Monthly special allowance.
    pub special_allowance: Decimal,
    /// Monthly device benefit.
    pub device_benefit: Decimal,
    /// Monthly leave travel allowance.
    pub travel_allowance: Decimal,
    /// Monthly gross.
    pub gross: Decimal,
    /// Monthly income tax.
    pub income_tax: Decimal,
    /// Monthly provident fund.
    pub provident_fund: Decimal,
    /// Monthly professional tax.
    pub professional_tax: Decimal,
    /// Monthly share of total deductions.
    pub total_deductions: Decimal,
    /// Monthly take-home.
    pub in_hand: Decimal,
}

impl SalaryBreakdown {
    /// Presents the breakdown per month.
    ///
    /// # Example
    ///
    /// ```
    /// use inhand_engine::calculation::compute_breakdown;
    /// use inhand_engine::config::ConfigLoader;
    /// use inhand_engine::models::SalaryComponents;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::load("./config/inhand").unwrap();
    /// let components = SalaryComponents {
    ///     basic: Decimal::from(120_000),
    ///     ..Default::default()
    /// };
    /// let breakdown = compute_breakdown(&components, loader.default_regime());
    /// assert_eq!(breakdown.monthly_view().basic, Decimal::from(10_000));
    /// ```
    pub fn monthly_view(&self) -> MonthlyView {
        MonthlyView {
            basic: per_month(self.basic_annual),
            hra: per_month(self.hra_annual),
            special_allowance: per_month(self.special_allowance_annual),
            device_benefit: per_month(self.device_benefit_annual),
            travel_allowance: per_month(self.travel_allowance_annual),
            gross: self.gross_monthly,
            income_tax: self.monthly_income_tax,
            provident_fund: self.provident_fund_monthly,
            professional_tax: self.professional_tax_monthly,
            total_deductions: per_month(self.total_deductions),
            in_hand: self.in_hand_monthly,
        }
    }
}

/// Divides an annual amount into its monthly share.
pub fn per_month(annual: Decimal) -> Decimal {
    annual / Decimal::from(MONTHS_PER_YEAR)
}

/// A breakdown together with the metadata of the calculation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The computed breakdown.
    pub breakdown: SalaryBreakdown,
    /// The breakdown per month.
    pub monthly: MonthlyView,
    /// Inputs that were coerced before calculation.
    pub warnings: Vec<InputWarning>,
}
