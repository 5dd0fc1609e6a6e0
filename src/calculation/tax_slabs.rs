//! Progressive slab tax evaluation.
//!
//! Income above the regime's rebate threshold is walked through the slab
//! table band by band, each slice taxed at its band's marginal rate, and the
//! cess is then added on top of the slab tax. Income at or below the
//! threshold owes nothing at all: the rebate is a cliff, so one rupee above
//! it is taxed from the first taxable band upward.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RegimeConfig;

/// Tax charged in one band during a slab walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabCharge {
    /// One-based position of the band in the slab table.
    pub band: usize,
    /// Income level at which the band starts.
    pub lower_bound: Decimal,
    /// Portion of income that fell in this band.
    pub taxed_amount: Decimal,
    /// The band's marginal rate.
    pub rate: Decimal,
    /// `taxed_amount * rate`.
    pub tax: Decimal,
}

/// The detailed result of evaluating tax on a taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEvaluation {
    /// Code of the regime used.
    pub regime: String,
    /// The income that was evaluated.
    pub taxable_income: Decimal,
    /// The regime's rebate threshold.
    pub rebate_threshold: Decimal,
    /// True when the income was at or below the threshold.
    pub rebate_applied: bool,
    /// Per-band charges, in slab order. Empty when the rebate applied.
    pub charges: Vec<SlabCharge>,
    /// Sum of the band charges.
    pub slab_tax: Decimal,
    /// `slab_tax * cess_rate`.
    pub cess: Decimal,
    /// `slab_tax + cess`.
    pub total: Decimal,
}

/// Returns the annual tax liability on `taxable_income` under `regime`.
///
/// # Example
///
/// ```
/// use inhand_engine::calculation::evaluate_tax;
/// use inhand_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/inhand").unwrap();
/// let regime = loader.get_regime("fy2024_25").unwrap();
///
/// assert_eq!(evaluate_tax(Decimal::from(700_000), regime), Decimal::ZERO);
/// assert_eq!(evaluate_tax(Decimal::from(1_000_000), regime), Decimal::from(52_000));
/// ```
pub fn evaluate_tax(taxable_income: Decimal, regime: &RegimeConfig) -> Decimal {
    evaluate_tax_detailed(taxable_income, regime).total
}

/// Evaluates tax and records how each band contributed.
pub fn evaluate_tax_detailed(taxable_income: Decimal, regime: &RegimeConfig) -> TaxEvaluation {
    if taxable_income <= regime.rebate_threshold {
        return TaxEvaluation {
            regime: regime.code.clone(),
            taxable_income,
            rebate_threshold: regime.rebate_threshold,
            rebate_applied: true,
            charges: Vec::new(),
            slab_tax: Decimal::ZERO,
            cess: Decimal::ZERO,
            total: Decimal::ZERO,
        };
    }

    let mut charges = Vec::new();
    let mut slab_tax = Decimal::ZERO;
    let mut remaining = taxable_income;
    let mut lower_bound = Decimal::ZERO;

    for (index, band) in regime.slabs.bands().iter().enumerate() {
        let taxed_amount = match band.width {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        let tax = taxed_amount.saturating_mul(band.rate);
        slab_tax = slab_tax.saturating_add(tax);
        charges.push(SlabCharge {
            band: index + 1,
            lower_bound,
            taxed_amount,
            rate: band.rate,
            tax,
        });

        // The final band has no width and always ends the walk.
        let Some(width) = band.width else {
            break;
        };
        remaining -= width;
        lower_bound = lower_bound.saturating_add(width);
        if remaining <= Decimal::ZERO {
            break;
        }
    }

    let cess = slab_tax.saturating_mul(regime.cess_rate);

    TaxEvaluation {
        regime: regime.code.clone(),
        taxable_income,
        rebate_threshold: regime.rebate_threshold,
        rebate_applied: false,
        charges,
        slab_tax,
        cess,
        total: slab_tax.saturating_add(cess),
    }
}
