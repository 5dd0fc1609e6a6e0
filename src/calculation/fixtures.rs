//! Regime fixtures shared by the calculation tests.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config::{ProvidentFundRule, RegimeConfig, SlabBand, SlabTable};

pub(crate) fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn regime(code: &str, rebate: &str, bands: Vec<SlabBand>) -> RegimeConfig {
    RegimeConfig {
        code: code.to_string(),
        name: format!("Test {}", code),
        assessment_year: "AY test".to_string(),
        slabs: SlabTable::new(bands).unwrap(),
        rebate_threshold: dec(rebate),
        cess_rate: dec("0.04"),
        standard_deduction: dec("75000"),
        provident_fund: ProvidentFundRule {
            rate: dec("0.12"),
            annual_cap: dec("21600"),
        },
        professional_tax_monthly: dec("200"),
    }
}

/// 0-3L nil, 3-7L 5%, 7-10L 10%, 10-12L 15%, 12-15L 20%, above 30%; rebate 7L.
pub(crate) fn regime_fy2024_25() -> RegimeConfig {
    regime(
        "fy2024_25",
        "700000",
        vec![
            SlabBand::bounded(dec("300000"), dec("0")),
            SlabBand::bounded(dec("400000"), dec("0.05")),
            SlabBand::bounded(dec("300000"), dec("0.10")),
            SlabBand::bounded(dec("200000"), dec("0.15")),
            SlabBand::bounded(dec("300000"), dec("0.20")),
            SlabBand::unbounded(dec("0.30")),
        ],
    )
}

/// 0-4L nil, then 4L bands at 5/10/15/20/25%, above 24L 30%; rebate 12L.
pub(crate) fn regime_fy2025_26() -> RegimeConfig {
    regime(
        "fy2025_26",
        "1200000",
        vec![
            SlabBand::bounded(dec("400000"), dec("0")),
            SlabBand::bounded(dec("400000"), dec("0.05")),
            SlabBand::bounded(dec("400000"), dec("0.10")),
            SlabBand::bounded(dec("400000"), dec("0.15")),
            SlabBand::bounded(dec("400000"), dec("0.20")),
            SlabBand::bounded(dec("400000"), dec("0.25")),
            SlabBand::unbounded(dec("0.30")),
        ],
    )
}
