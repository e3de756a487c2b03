//! Required-withdrawal schedule
//!
//! Turns the projected cash-flow streams into the pre-tax portfolio
//! withdrawal required for each retirement year. Each year is an
//! independent gross-up at that year's age; there is no running balance
//! here, only the draw schedule assuming sufficient assets exist.

use crate::model::{CashFlowSeries, ClientProfile, TaxConfig, WithdrawalSeries};
use crate::taxes::gross_up;

pub fn solve_withdrawals(
    profile: &ClientProfile,
    flows: &CashFlowSeries,
    taxes: &TaxConfig,
) -> WithdrawalSeries {
    let retirement_age = profile.retirement_age();

    let amounts = (0..flows.len())
        .map(|year| {
            gross_up(
                flows.funding_gap(year),
                flows.social_security[year],
                flows.pension[year],
                flows.other_income[year],
                retirement_age + year as u32,
                profile.filing_status,
                taxes,
            )
            .pre_tax_withdrawal
        })
        .collect();

    WithdrawalSeries { amounts }
}
