use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::SalaryBreakdown;

fn whole(amount: Decimal) -> Decimal {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Builds the request sent to the advisory service for `breakdown`.
pub fn build_advice_prompt(breakdown: &SalaryBreakdown) -> String {
    format!(
        "Act as a senior financial advisor in India.\n\
         Analyze this salary breakdown for a salaried employee \
         under the new tax regime ({regime}):\n\
         - Gross Annual Salary: ₹{gross}\n\
         - Annual Income Tax: ₹{tax}\n\
         - Take Home (Monthly): ₹{in_hand}\n\
         - Monthly PF Contribution: ₹{pf}\n\
         \n\
         Provide 3-4 concise, professional bullet points on:\n\
         1. Their tax efficiency.\n\
         2. Suggestions for investment (e.g. PPF, ELSS, NPS) for long-term wealth creation, \
         even though section 80C matters less under the new regime.\n\
         3. A quick rule of thumb for budgeting (e.g. 50/30/20).\n\
         \n\
         Keep it encouraging and data-driven.",
        regime = breakdown.regime,
        gross = whole(breakdown.gross_annual),
        tax = whole(breakdown.annual_income_tax),
        in_hand = whole(breakdown.in_hand_monthly),
        pf = whole(breakdown.provident_fund_monthly),
    )
}
