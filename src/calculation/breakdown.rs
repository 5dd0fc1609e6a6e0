//! Salary breakdown aggregation.
//!
//! Derives every figure of a [`SalaryBreakdown`] from the five annual
//! components. The steps run in a fixed order because each depends on the
//! ones before it: gross, taxable income, income tax, provident fund,
//! professional tax, total deductions, take-home.

use rust_decimal::Decimal;

use crate::config::RegimeConfig;
use crate::models::{MONTHS_PER_YEAR, SalaryBreakdown, SalaryComponents, per_month};

use super::provident_fund::calculate_provident_fund;
use super::tax_slabs::evaluate_tax;

/// Gross income less the standard deduction, floored at zero.
pub fn taxable_income(gross_annual: Decimal, standard_deduction: Decimal) -> Decimal {
    gross_annual
        .saturating_sub(standard_deduction)
        .max(Decimal::ZERO)
}

/// Computes the full take-home breakdown for `components` under `regime`.
///
/// Total: it never fails or panics, and a negative take-home is returned
/// as-is rather than treated as an error. Sums saturate at the `Decimal`
/// bounds; inputs passed through [`SalaryComponents::sanitized`] stay far
/// below them.
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
/// let regime = loader.get_regime("fy2025_26").unwrap();
/// let components = SalaryComponents {
///     basic: Decimal::from(800_000),
///     ..Default::default()
/// };
///
/// let breakdown = compute_breakdown(&components, regime);
/// assert_eq!(breakdown.taxable_income, Decimal::from(725_000));
/// assert_eq!(breakdown.annual_income_tax, Decimal::ZERO);
/// ```
pub fn compute_breakdown(components: &SalaryComponents, regime: &RegimeConfig) -> SalaryBreakdown {
    let gross_annual = components.total();
    let taxable_income = taxable_income(gross_annual, regime.standard_deduction);
    let annual_income_tax = evaluate_tax(taxable_income, regime);

    let provident_fund = calculate_provident_fund(components.basic, &regime.provident_fund);
    let professional_tax_annual = regime.professional_tax_monthly * Decimal::from(MONTHS_PER_YEAR);

    let total_deductions = annual_income_tax
        .saturating_add(professional_tax_annual)
        .saturating_add(provident_fund.annual);
    let in_hand_annual = gross_annual.saturating_sub(total_deductions);

    SalaryBreakdown {
        regime: regime.code.clone(),
        basic_annual: components.basic,
        hra_annual: components.hra,
        special_allowance_annual: components.special_allowance,
        device_benefit_annual: components.device_benefit,
        travel_allowance_annual: components.travel_allowance,
        gross_annual,
        gross_monthly: per_month(gross_annual),
        standard_deduction: regime.standard_deduction,
        taxable_income,
        annual_income_tax,
        monthly_income_tax: per_month(annual_income_tax),
        professional_tax_monthly: regime.professional_tax_monthly,
        provident_fund_monthly: per_month(provident_fund.annual),
        provident_fund_annual: provident_fund.annual,
        provident_fund_capped: provident_fund.cap_applied,
        total_deductions,
        in_hand_annual,
        in_hand_monthly: per_month(in_hand_annual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::fixtures::{dec, regime_fy2024_25, regime_fy2025_26};

    fn components(
        basic: &str,
        hra: &str,
        special: &str,
        device: &str,
        lta: &str,
    ) -> SalaryComponents {
        SalaryComponents {
            basic: dec(basic),
            hra: dec(hra),
            special_allowance: dec(special),
            device_benefit: dec(device),
            travel_allowance: dec(lta),
        }
    }

    #[test]
    fn test_taxable_income_floors_at_zero() {
        assert_eq!(taxable_income(dec("50000"), dec("75000")), Decimal::ZERO);
        assert_eq!(taxable_income(dec("75000"), dec("75000")), Decimal::ZERO);
        assert_eq!(taxable_income(dec("75001"), dec("75000")), dec("1"));
    }

    #[test]
    fn test_fy2024_25_twelve_lakh_package() {
        let breakdown = compute_breakdown(
            &components("600000", "300000", "200000", "50000", "50000"),
            &regime_fy2024_25(),
        );

        assert_eq!(breakdown.regime, "fy2024_25");
        assert_eq!(breakdown.gross_annual, dec("1200000"));
        assert_eq!(breakdown.gross_monthly, dec("100000"));
        assert_eq!(breakdown.standard_deduction, dec("75000"));
        assert_eq!(breakdown.taxable_income, dec("1125000"));
        assert_eq!(breakdown.annual_income_tax, dec("71500"));
        assert_eq!(breakdown.provident_fund_annual, dec("21600"));
        assert_eq!(breakdown.provident_fund_monthly, dec("1800"));
        assert_eq!(breakdown.professional_tax_monthly, dec("200"));
        assert_eq!(breakdown.total_deductions, dec("95500"));
        assert_eq!(breakdown.in_hand_annual, dec("1104500"));
        assert_eq!(breakdown.in_hand_monthly, dec("1104500") / dec("12"));
    }

    #[test]
    fn test_monthly_take_home_matches_monthly_deductions() {
        let breakdown = compute_breakdown(
            &components("600000", "300000", "200000", "50000", "50000"),
            &regime_fy2024_25(),
        );

        let derived = breakdown.gross_monthly
            - breakdown.monthly_income_tax
            - breakdown.provident_fund_monthly
            - breakdown.professional_tax_monthly;
        let drift = (derived - breakdown.in_hand_monthly).abs();
        assert!(drift < dec("0.000000000001"), "drift was {}", drift);
    }

    #[test]
    fn test_fy2025_26_income_under_rebate_pays_no_tax() {
        let breakdown = compute_breakdown(
            &components("800000", "0", "0", "0", "0"),
            &regime_fy2025_26(),
        );

        assert_eq!(breakdown.taxable_income, dec("725000"));
        assert_eq!(breakdown.annual_income_tax, Decimal::ZERO);
        assert_eq!(breakdown.monthly_income_tax, Decimal::ZERO);
        assert_eq!(breakdown.provident_fund_annual, dec("21600"));
        assert!(breakdown.provident_fund_capped);
        assert_eq!(breakdown.total_deductions, dec("24000"));
        assert_eq!(breakdown.in_hand_annual, dec("776000"));
    }

    #[test]
    fn test_provident_fund_uses_basic_not_gross() {
        // 12% of 100000 basic is 12000, well under the cap, even though
        // gross is far higher.
        let breakdown = compute_breakdown(
            &components("100000", "900000", "500000", "0", "0"),
            &regime_fy2025_26(),
        );
        assert_eq!(breakdown.provident_fund_annual, dec("12000"));
        assert_eq!(breakdown.provident_fund_monthly, dec("1000"));
        assert!(!breakdown.provident_fund_capped);
    }

    #[test]
    fn test_zero_salary_gives_negative_take_home() {
        let breakdown = compute_breakdown(&SalaryComponents::default(), &regime_fy2025_26());

        assert_eq!(breakdown.gross_annual, Decimal::ZERO);
        assert_eq!(breakdown.taxable_income, Decimal::ZERO);
        assert_eq!(breakdown.total_deductions, dec("2400"));
        assert_eq!(breakdown.in_hand_annual, dec("-2400"));
        assert_eq!(breakdown.in_hand_monthly, dec("-200"));
    }

    #[test]
    fn test_rebate_cliff_shows_in_take_home() {
        let regime = regime_fy2025_26();
        // Gross 1275000 puts taxable income exactly on the threshold.
        let at_threshold = compute_breakdown(&components("1275000", "0", "0", "0", "0"), &regime);
        let above = compute_breakdown(&components("1275001", "0", "0", "0", "0"), &regime);

        assert_eq!(at_threshold.annual_income_tax, Decimal::ZERO);
        assert_eq!(above.annual_income_tax, dec("62400.156"));
        assert!(above.in_hand_annual < at_threshold.in_hand_annual);
    }

    #[test]
    fn test_identical_inputs_give_identical_breakdowns() {
        let regime = regime_fy2024_25();
        let input = components("654321.5", "123456", "98765", "1", "2");
        assert_eq!(
            compute_breakdown(&input, &regime),
            compute_breakdown(&input, &regime)
        );
    }

    #[test]
    fn test_extreme_components_do_not_overflow() {
        let regime = regime_fy2024_25();
        let huge = SalaryComponents {
            basic: Decimal::MAX,
            hra: Decimal::MAX,
            ..Default::default()
        };
        let breakdown = compute_breakdown(&huge, &regime);
        assert_eq!(breakdown.gross_annual, Decimal::MAX);
        assert!(breakdown.annual_income_tax > Decimal::ZERO);
        assert!(breakdown.in_hand_annual > Decimal::ZERO);
        assert!(breakdown.in_hand_annual < breakdown.gross_annual);

        let negative = SalaryComponents {
            basic: Decimal::MIN,
            hra: Decimal::MIN,
            ..Default::default()
        };
        let breakdown = compute_breakdown(&negative, &regime);
        assert_eq!(breakdown.taxable_income, Decimal::ZERO);
        assert_eq!(breakdown.annual_income_tax, Decimal::ZERO);
        assert!(breakdown.in_hand_annual < Decimal::ZERO);
    }
}
