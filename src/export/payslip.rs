//! Fixed-width text payslip export.
//!
//! Renders the monthly view of an already-computed breakdown. Nothing here
//! recalculates; every figure comes from the [`SalaryBreakdown`].

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::RegimeConfig;
use crate::models::SalaryBreakdown;

use super::currency::format_inr;

const RULE: &str = "----------------------------------------------------";
const LABEL_WIDTH: usize = 24;

/// A monthly payslip for one breakdown.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use inhand_engine::calculation::compute_breakdown;
/// use inhand_engine::config::ConfigLoader;
/// use inhand_engine::export::Payslip;
/// use inhand_engine::models::SalaryComponents;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/inhand").unwrap();
/// let regime = loader.default_regime();
/// let components = SalaryComponents {
///     basic: Decimal::from(600_000),
///     ..Default::default()
/// };
/// let breakdown = compute_breakdown(&components, regime);
///
/// let payslip = Payslip {
///     breakdown: &breakdown,
///     regime,
///     period: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
///     issuer: "InHand Calculator",
/// };
/// assert!(payslip.render().contains("Period: October 2026"));
/// assert_eq!(payslip.file_name(), "Payslip_October_2026.txt");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Payslip<'a> {
    /// The breakdown to render.
    pub breakdown: &'a SalaryBreakdown,
    /// The regime the breakdown was computed under.
    pub regime: &'a RegimeConfig,
    /// Any date in the month the payslip covers.
    pub period: NaiveDate,
    /// Name printed in the footer.
    pub issuer: &'a str,
}

impl Payslip<'_> {
    /// Renders the payslip as plain text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Suggested download file name, e.g. `Payslip_October_2026.txt`.
    pub fn file_name(&self) -> String {
        format!("Payslip_{}.txt", self.period.format("%B_%Y"))
    }
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, amount: Decimal) -> fmt::Result {
    writeln!(
        f,
        "{:<width$}{}",
        format!("{}:", label),
        format_inr(amount),
        width = LABEL_WIDTH
    )
}

impl fmt::Display for Payslip<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let monthly = self.breakdown.monthly_view();

        writeln!(f, "INHAND MONTHLY PAYSLIP")?;
        writeln!(f, "Period: {}", self.period.format("%B %Y"))?;
        writeln!(f, "{}", RULE)?;

        writeln!(f, "EARNINGS (Monthly)")?;
        line(f, "Basic Pay", monthly.basic)?;
        line(f, "HRA", monthly.hra)?;
        line(f, "Special Allowance", monthly.special_allowance)?;
        if monthly.device_benefit > Decimal::ZERO {
            line(f, "Laptop Benefit", monthly.device_benefit)?;
        }
        if monthly.travel_allowance > Decimal::ZERO {
            line(f, "LTA Component", monthly.travel_allowance)?;
        }
        line(f, "Gross Monthly Salary", monthly.gross)?;
        writeln!(f, "{}", RULE)?;

        writeln!(f, "DEDUCTIONS (Monthly)")?;
        line(f, "Income Tax (TDS)", monthly.income_tax)?;
        line(f, "Provident Fund (EPF)", monthly.provident_fund)?;
        line(f, "Professional Tax", monthly.professional_tax)?;
        line(f, "Total Deductions", monthly.total_deductions)?;
        writeln!(f, "{}", RULE)?;

        line(f, "NET TAKE-HOME", monthly.in_hand)?;
        writeln!(f, "{}", RULE)?;

        writeln!(
            f,
            "Note: Calculated under {} Slabs ({}).",
            self.regime.assessment_year, self.regime.name
        )?;
        write!(f, "Generated via {}.", self.issuer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_breakdown;
    use crate::calculation::fixtures::{dec, regime_fy2024_25};
    use crate::models::SalaryComponents;

    fn period() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn render(components: SalaryComponents) -> String {
        let regime = regime_fy2024_25();
        let breakdown = compute_breakdown(&components, &regime);
        Payslip {
            breakdown: &breakdown,
            regime: &regime,
            period: period(),
            issuer: "InHand Calculator",
        }
        .render()
    }

    fn full_package() -> SalaryComponents {
        SalaryComponents {
            basic: dec("600000"),
            hra: dec("300000"),
            special_allowance: dec("200000"),
            device_benefit: dec("50000"),
            travel_allowance: dec("50000"),
        }
    }

    #[test]
    fn test_payslip_header_and_period() {
        let text = render(full_package());
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("INHAND MONTHLY PAYSLIP"));
        assert_eq!(lines.next(), Some("Period: October 2026"));
        assert_eq!(lines.next(), Some(RULE));
    }

    #[test]
    fn test_payslip_earnings_are_monthly_and_aligned() {
        let text = render(full_package());

        assert!(text.contains("Basic Pay:              ₹50,000\n"));
        assert!(text.contains("HRA:                    ₹25,000\n"));
        assert!(text.contains("Special Allowance:      ₹16,667\n"));
        assert!(text.contains("Laptop Benefit:         ₹4,167\n"));
        assert!(text.contains("LTA Component:          ₹4,167\n"));
        assert!(text.contains("Gross Monthly Salary:   ₹1,00,000\n"));
    }

    #[test]
    fn test_payslip_deductions_and_net() {
        let text = render(full_package());

        // 71500 / 12 = 5958.33
        assert!(text.contains("Income Tax (TDS):       ₹5,958\n"));
        assert!(text.contains("Provident Fund (EPF):   ₹1,800\n"));
        assert!(text.contains("Professional Tax:       ₹200\n"));
        // 95500 / 12 = 7958.33
        assert!(text.contains("Total Deductions:       ₹7,958\n"));
        // 1104500 / 12 = 92041.67
        assert!(text.contains("NET TAKE-HOME:          ₹92,042\n"));
    }

    #[test]
    fn test_payslip_omits_zero_optional_benefits() {
        let text = render(SalaryComponents {
            device_benefit: Decimal::ZERO,
            travel_allowance: Decimal::ZERO,
            ..full_package()
        });

        assert!(!text.contains("Laptop Benefit"));
        assert!(!text.contains("LTA Component"));
    }

    #[test]
    fn test_payslip_footer_names_regime_and_issuer() {
        let text = render(full_package());

        assert!(text.contains("Note: Calculated under AY test Slabs (Test fy2024_25)."));
        assert!(text.ends_with("Generated via InHand Calculator."));
    }

    #[test]
    fn test_payslip_file_name() {
        let regime = regime_fy2024_25();
        let breakdown = compute_breakdown(&full_package(), &regime);
        let payslip = Payslip {
            breakdown: &breakdown,
            regime: &regime,
            period: NaiveDate::from_ymd_opt(2027, 3, 1).unwrap(),
            issuer: "InHand Calculator",
        };
        assert_eq!(payslip.file_name(), "Payslip_March_2027.txt");
    }
}
