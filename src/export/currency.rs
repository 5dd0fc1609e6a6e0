//! Rupee formatting for presentation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// Rounds half away from zero, groups the last three digits and then pairs
/// of digits (lakh/crore), and prefixes a minus sign for negative amounts.
///
/// # Examples
///
/// ```
/// use inhand_engine::export::format_inr;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_inr(Decimal::from(1_200_000)), "₹12,00,000");
/// assert_eq!(format_inr(Decimal::from_str("5958.5").unwrap()), "₹5,959");
/// assert_eq!(format_inr(Decimal::from(-2400)), "-₹2,400");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = rounded.abs().trunc().normalize().to_string();

    format!("{}₹{}", sign, group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
