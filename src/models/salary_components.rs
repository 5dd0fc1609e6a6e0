//! Salary component inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest annual amount accepted from callers: ten lakh crore rupees.
///
/// [`SalaryComponents::sanitized`] clamps anything above it, which keeps
/// every sum and difference the engine forms far inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Clamps `value` into `[0, MAX_AMOUNT]`, describing any change made.
pub fn clamp_amount(value: Decimal) -> (Decimal, Option<String>) {
    if value < Decimal::ZERO {
        (Decimal::ZERO, Some(format!("negative amount {} treated as 0", value)))
    } else if value > MAX_AMOUNT {
        (
            MAX_AMOUNT,
            Some(format!("amount {} above the limit {} treated as the limit", value, MAX_AMOUNT)),
        )
    } else {
        (value, None)
    }
}

/// The five annual salary components a breakdown is computed from.
///
/// The engine does not validate these amounts. Callers that accept
/// free-form input should pass it through [`SalaryComponents::sanitized`]
/// first.
///
/// # Example
///
/// ```
/// use inhand_engine::models::SalaryComponents;
/// use rust_decimal::Decimal;
///
/// let components = SalaryComponents {
///     basic: Decimal::from(600_000),
///     hra: Decimal::from(300_000),
///     special_allowance: Decimal::from(200_000),
///     device_benefit: Decimal::from(50_000),
///     travel_allowance: Decimal::from(50_000),
/// };
/// assert_eq!(components.total(), Decimal::from(1_200_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// Annual basic pay.
    #[serde(default)]
    pub basic: Decimal,
    /// Annual house rent allowance.
    #[serde(default)]
    pub hra: Decimal,
    /// Annual special (flexible) allowance.
    #[serde(default)]
    pub special_allowance: Decimal,
    /// Annual device/laptop benefit.
    #[serde(default)]
    pub device_benefit: Decimal,
    /// Annual leave travel allowance.
    #[serde(default)]
    pub travel_allowance: Decimal,
}

/// A component that was coerced to zero by [`SalaryComponents::sanitized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputWarning {
    /// The name of the coerced field.
    pub field: String,
    /// What happened to the value.
    pub message: String,
}

impl SalaryComponents {
    /// Sum of all five components, saturating at the `Decimal` bounds.
    pub fn total(&self) -> Decimal {
        [
            self.hra,
            self.special_allowance,
            self.device_benefit,
            self.travel_allowance,
        ]
        .into_iter()
        .fold(self.basic, Decimal::saturating_add)
    }

    /// Returns a copy with every amount clamped into `[0, MAX_AMOUNT]`,
    /// plus one warning per clamped field.
    pub fn sanitized(&self) -> (Self, Vec<InputWarning>) {
        let mut warnings = Vec::new();
        let mut clamp = |field: &str, value: Decimal| {
            let (clamped, message) = clamp_amount(value);
            if let Some(message) = message {
                warnings.push(InputWarning {
                    field: field.to_string(),
                    message,
                });
            }
            clamped
        };

        let sanitized = Self {
            basic: clamp("basic", self.basic),
            hra: clamp("hra", self.hra),
            special_allowance: clamp("special_allowance", self.special_allowance),
            device_benefit: clamp("device_benefit", self.device_benefit),
            travel_allowance: clamp("travel_allowance", self.travel_allowance),
        };

        (sanitized, warnings)
    }
}
