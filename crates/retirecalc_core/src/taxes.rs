//! Tax calculations for retirement withdrawal modeling
//!
//! Progressive federal tax, the Social Security taxability step function,
//! flat state tax with an age-gated exclusion, and the gross-up that turns
//! an after-tax funding gap into a required pre-tax withdrawal.

use crate::model::{FilingStatus, StateTaxConfig, TaxBracket, TaxConfig};

/// Provisional income below this owes no tax on Social Security
pub const SS_TAXABILITY_TIER_1: f64 = 25_000.0;
/// Provisional income below this has half of Social Security taxable;
/// at or above, 85% is taxable
pub const SS_TAXABILITY_TIER_2: f64 = 34_000.0;

/// Calculate federal income tax using progressive brackets.
/// Married filing doubles every threshold relative to single.
/// Returns exactly zero for income <= 0.
pub fn federal_tax(income: f64, filing: FilingStatus, brackets: &[TaxBracket]) -> f64 {
    if income <= 0.0 || brackets.is_empty() {
        return 0.0;
    }

    let scale = match filing {
        FilingStatus::Single => 1.0,
        FilingStatus::Married => 2.0,
    };

    let mut tax = 0.0;
    let mut prev_threshold = brackets[0].threshold * scale;

    for (i, bracket) in brackets.iter().enumerate() {
        match brackets.get(i + 1) {
            Some(next) => {
                let upper = next.threshold * scale;
                tax += (income.min(upper) - prev_threshold).max(0.0) * bracket.rate;
                prev_threshold = upper;
                if income <= upper {
                    break;
                }
            }
            // Top bracket is open-ended
            None => tax += (income - prev_threshold).max(0.0) * bracket.rate,
        }
    }

    tax
}

/// Fraction of the Social Security benefit that is taxable, as a step
/// function of provisional income. Single-filer thresholds.
pub fn social_security_taxable_fraction(provisional_income: f64) -> f64 {
    if provisional_income < SS_TAXABILITY_TIER_1 {
        0.0
    } else if provisional_income < SS_TAXABILITY_TIER_2 {
        0.50
    } else {
        0.85
    }
}

/// Flat state tax after the age-gated retirement exclusion.
/// The exclusion never drives the taxable base negative.
pub fn state_tax(taxable_income: f64, age: u32, state: &StateTaxConfig) -> f64 {
    let exclusion = if state.resident && age >= state.exclusion_age {
        state.exclusion_amount
    } else {
        0.0
    };
    (taxable_income - exclusion).max(0.0) * state.rate
}

/// Breakdown of one gross-up computation
#[derive(Debug, Clone, Copy, Default)]
pub struct GrossUpResult {
    /// Total taxable income: the funding gap and all guaranteed income,
    /// plus the taxable fraction of Social Security
    pub taxable_income: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    /// Federal tax divided by taxable income; zero when taxable income is zero
    pub effective_rate: f64,
    /// Pre-tax portfolio withdrawal covering the gap after taxes, never
    /// negative even when guaranteed income exceeds needs
    pub pre_tax_withdrawal: f64,
}

/// Convert an after-tax funding gap into the pre-tax withdrawal required to
/// cover it once federal and state tax are paid on the blended income.
pub fn gross_up(
    net_gap: f64,
    ss_income: f64,
    pension_income: f64,
    other_income: f64,
    age: u32,
    filing: FilingStatus,
    config: &TaxConfig,
) -> GrossUpResult {
    let total_income = net_gap + ss_income + pension_income + other_income;
    let provisional_income = total_income / 2.0 + ss_income / 2.0;
    let taxable_ss = ss_income * social_security_taxable_fraction(provisional_income);
    let taxable_income = total_income + taxable_ss;

    let federal = federal_tax(taxable_income, filing, &config.federal_brackets);
    let state = state_tax(taxable_income, age, &config.state);

    let effective_rate = if taxable_income != 0.0 {
        federal / taxable_income
    } else {
        0.0
    };

    let pre_tax_withdrawal = (net_gap + (federal + state) / (1.0 - effective_rate)).max(0.0);

    GrossUpResult {
        taxable_income,
        federal_tax: federal,
        state_tax: state,
        effective_rate,
        pre_tax_withdrawal,
    }
}
