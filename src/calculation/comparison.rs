//! Comparison of a proposed take-home against the current one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a proposed monthly take-home differs from the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InHandComparison {
    /// Proposed monthly take-home.
    pub proposed_monthly: Decimal,
    /// Current monthly take-home supplied by the caller.
    pub current_monthly: Decimal,
    /// `proposed - current`; negative for a pay cut.
    pub difference: Decimal,
    /// Difference as a percentage of current pay, or 0 when current pay is
    /// not positive.
    pub percentage_change: Decimal,
}

/// Compares a proposed monthly take-home with the current one.
///
/// # Example
///
/// ```
/// use inhand_engine::calculation::compare_in_hand;
/// use rust_decimal::Decimal;
///
/// let comparison = compare_in_hand(Decimal::from(110_000), Decimal::from(100_000));
/// assert_eq!(comparison.difference, Decimal::from(10_000));
/// assert_eq!(comparison.percentage_change, Decimal::from(10));
/// ```
pub fn compare_in_hand(proposed_monthly: Decimal, current_monthly: Decimal) -> InHandComparison {
    let difference = proposed_monthly.saturating_sub(current_monthly);
    let percentage_change = if current_monthly > Decimal::ZERO {
        match difference.checked_div(current_monthly) {
            Some(ratio) => ratio.saturating_mul(Decimal::ONE_HUNDRED),
            None if difference.is_sign_negative() => Decimal::MIN,
            None => Decimal::MAX,
        }
    } else {
        Decimal::ZERO
    };

    InHandComparison {
        proposed_monthly,
        current_monthly,
        difference,
        percentage_change,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::fixtures::dec;

    #[test]
    fn test_raise_is_positive() {
        let comparison = compare_in_hand(dec("92041.67"), dec("80000"));
        assert_eq!(comparison.difference, dec("12041.67"));
        assert!(comparison.percentage_change > dec("15"));
        assert!(comparison.percentage_change < dec("15.1"));
    }

    #[test]
    fn test_pay_cut_is_negative() {
        let comparison = compare_in_hand(dec("75000"), dec("100000"));
        assert_eq!(comparison.difference, dec("-25000"));
        assert_eq!(comparison.percentage_change, dec("-25"));
    }

    #[test]
    fn test_zero_current_pay_has_no_percentage() {
        let comparison = compare_in_hand(dec("50000"), Decimal::ZERO);
        assert_eq!(comparison.difference, dec("50000"));
        assert_eq!(comparison.percentage_change, Decimal::ZERO);
    }

    #[test]
    fn test_negative_current_pay_has_no_percentage() {
        let comparison = compare_in_hand(dec("50000"), dec("-10"));
        assert_eq!(comparison.percentage_change, Decimal::ZERO);
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let comparison = compare_in_hand(Decimal::MAX, Decimal::MIN);
        assert_eq!(comparison.difference, Decimal::MAX);
        assert_eq!(comparison.percentage_change, Decimal::ZERO);

        let tiny = Decimal::new(1, 28);
        let comparison = compare_in_hand(Decimal::MAX, tiny);
        assert_eq!(comparison.percentage_change, Decimal::MAX);

        let comparison = compare_in_hand(Decimal::MIN, tiny);
        assert_eq!(comparison.percentage_change, Decimal::MIN);
    }
}
