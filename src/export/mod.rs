//! Presentation helpers that consume a computed breakdown.
//!
//! Currency strings and the downloadable text payslip live here, outside the
//! calculation engine.

mod currency;
mod payslip;

pub use currency::format_inr;
pub use payslip::Payslip;
