//! Provident fund contribution calculation.
//!
//! The contribution is a fixed share of basic pay only, capped at an annual
//! ceiling. For most salaried employees the cap is what binds.

use rust_decimal::Decimal;

use crate::config::ProvidentFundRule;

/// The result of applying the provident-fund rule to basic pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidentFundResult {
    /// The annual contribution after the cap.
    pub annual: Decimal,
    /// True when the cap reduced the contribution.
    pub cap_applied: bool,
}

/// Calculates the annual provident-fund contribution on `basic` pay.
///
/// # Examples
///
/// ```
/// use inhand_engine::calculation::calculate_provident_fund;
/// use inhand_engine::config::ProvidentFundRule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rule = ProvidentFundRule {
///     rate: Decimal::from_str("0.12").unwrap(),
///     annual_cap: Decimal::from(21_600),
/// };
///
/// let result = calculate_provident_fund(Decimal::from(600_000), &rule);
/// assert_eq!(result.annual, Decimal::from(21_600));
/// assert!(result.cap_applied);
/// ```
pub fn calculate_provident_fund(basic: Decimal, rule: &ProvidentFundRule) -> ProvidentFundResult {
    let uncapped_annual = basic * rule.rate;

    let (annual, cap_applied) = if uncapped_annual > rule.annual_cap {
        (rule.annual_cap, true)
    } else {
        (uncapped_annual, false)
    };

    ProvidentFundResult {
        annual,
        cap_applied,
    }
}
