//! Calculation logic for the InHand engine.
//!
//! This module contains the progressive slab tax evaluator, the provident
//! fund rule, the breakdown aggregator that ties them together, and the
//! take-home comparison used by callers weighing an offer.

mod breakdown;
mod comparison;
mod provident_fund;
mod tax_slabs;

#[cfg(test)]
pub(crate) mod fixtures;

pub use breakdown::{compute_breakdown, taxable_income};
pub use comparison::{InHandComparison, compare_in_hand};
pub use provident_fund::{ProvidentFundResult, calculate_provident_fund};
pub use tax_slabs::{SlabCharge, TaxEvaluation, evaluate_tax, evaluate_tax_detailed};
