//! Year-by-year cash-flow projection
//!
//! Builds the five retirement-year streams (needs, Social Security,
//! pension, other income, long-term care) from a validated profile. Each
//! stream escalates under its own rule: needs follow the short/long
//! inflation schedule continued from today, guaranteed income escalates at
//! the long rate only, and care costs compound at their own hotter rate
//! with a phased mitigation factor.

use crate::model::{CashFlowSeries, ClientProfile, LtcAssumptions, MarketAssumptions};

/// Per-year inflation assignment over the projection horizon: the first two
/// years (counted from today) use the short rate, all later years the long
/// rate.
#[derive(Debug, Clone, Copy)]
pub struct InflationSchedule {
    pub short_rate: f64,
    pub long_rate: f64,
}

impl InflationSchedule {
    pub fn from_market(market: &MarketAssumptions) -> Self {
        Self {
            short_rate: market.inflation_short,
            long_rate: market.inflation_long,
        }
    }

    pub fn rate(&self, year_index: usize) -> f64 {
        if year_index < 2 {
            self.short_rate
        } else {
            self.long_rate
        }
    }

    /// Cumulative growth factor over years `[start, end)`
    pub fn factor_between(&self, start: usize, end: usize) -> f64 {
        (start..end).map(|i| 1.0 + self.rate(i)).product()
    }
}

/// Project all five cash-flow streams across the retirement horizon.
///
/// `ss_annual` is the claiming-age benefit from the benefit calculator;
/// it starts flowing after the pre-claiming span and escalates at the long
/// rate from its first paid year.
pub fn project_cash_flows(
    profile: &ClientProfile,
    ss_annual: f64,
    market: &MarketAssumptions,
    ltc: &LtcAssumptions,
    terminal_age: u32,
) -> CashFlowSeries {
    let pre_years = profile.years_to_retirement as usize;
    let ret_years = profile.retirement_years(terminal_age);
    let pre_ss_years = profile.pre_social_security_years();
    let schedule = InflationSchedule::from_market(market);

    let annual_need_now = profile.monthly_income * 12.0;
    let need_at_retirement = annual_need_now * schedule.factor_between(0, pre_years);

    let long_growth = 1.0 + market.inflation_long;
    let ltc_growth = 1.0 + ltc.inflation;
    let half_horizon = ret_years as f64 / 2.0;

    let mut needs = Vec::with_capacity(ret_years);
    let mut social_security = Vec::with_capacity(ret_years);
    let mut pension = Vec::with_capacity(ret_years);
    let mut other_income = Vec::with_capacity(ret_years);
    let mut ltc_needs = Vec::with_capacity(ret_years);

    for year in 0..ret_years {
        // Retirement year `year` carries year + 1 years of escalation past
        // the retirement date.
        let k = year + 1;

        needs.push(need_at_retirement * schedule.factor_between(pre_years, pre_years + k));

        social_security.push(if year < pre_ss_years {
            0.0
        } else {
            ss_annual * long_growth.powi((k - pre_ss_years) as i32)
        });

        pension.push(profile.pension_income * long_growth.powi(k as i32));
        other_income.push(profile.other_income * long_growth.powi(k as i32));

        let mitigation = ltc.max_reduction * (k as f64 / half_horizon).min(1.0);
        ltc_needs.push(
            (ltc.base_cost * ltc_growth.powi(k as i32) * (1.0 - mitigation)
                - profile.ltc_insurance)
                .max(0.0),
        );
    }

    CashFlowSeries {
        needs,
        social_security,
        pension,
        other_income,
        ltc: ltc_needs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FilingStatus, SocialSecurityBenefits};

    fn profile() -> ClientProfile {
        ClientProfile {
            current_age: 50,
            years_to_retirement: 15,
            years_to_social_security: 17,
            monthly_income: 5_000.0,
            legacy_desired: 0.0,
            benefits: SocialSecurityBenefits {
                at_62: 20_000.0,
                at_fra: 30_000.0,
                at_70: 40_000.0,
                fra_age: 67,
            },
            ltc_insurance: 50_000.0,
            pension_income: 10_000.0,
            other_income: 5_000.0,
            filing_status: FilingStatus::Single,
        }
    }

    #[test]
    fn test_schedule_switches_to_long_rate_after_two_years() {
        let schedule = InflationSchedule {
            short_rate: 0.029,
            long_rate: 0.023,
        };
        assert_eq!(schedule.rate(0), 0.029);
        assert_eq!(schedule.rate(1), 0.029);
        assert_eq!(schedule.rate(2), 0.023);
        assert_eq!(schedule.rate(50), 0.023);
    }

    #[test]
    fn test_series_lengths_match_horizon() {
        let p = profile();
        let market = MarketAssumptions::default();
        let flows = project_cash_flows(&p, 30_000.0, &market, &LtcAssumptions::default(), 120);
        // Retires at 65, plans to 120
        assert_eq!(flows.len(), 55);
        assert_eq!(flows.social_security.len(), 55);
        assert_eq!(flows.pension.len(), 55);
        assert_eq!(flows.other_income.len(), 55);
        assert_eq!(flows.ltc.len(), 55);
    }

    #[test]
    fn test_first_year_need_carries_full_escalation() {
        let p = profile();
        let market = MarketAssumptions::default();
        let flows = project_cash_flows(&p, 30_000.0, &market, &LtcAssumptions::default(), 120);
        // Two short years, then long years through the first retirement year
        let expected = 5_000.0 * 12.0 * 1.029_f64.powi(2) * 1.023_f64.powi(14);
        assert!(
            (flows.needs[0] - expected).abs() < 0.01,
            "Expected {}, got {}",
            expected,
            flows.needs[0]
        );
    }

    #[test]
    fn test_social_security_starts_after_claiming_span() {
        let p = profile();
        let market = MarketAssumptions::default();
        let flows = project_cash_flows(&p, 30_000.0, &market, &LtcAssumptions::default(), 120);
        // Retires at 65, claims at 67: two zero years
        assert_eq!(flows.social_security[0], 0.0);
        assert_eq!(flows.social_security[1], 0.0);
        let expected = 30_000.0 * 1.023;
        assert!(
            (flows.social_security[2] - expected).abs() < 0.01,
            "Expected {}, got {}",
            expected,
            flows.social_security[2]
        );
    }

    #[test]
    fn test_claiming_before_retirement_pays_from_year_zero() {
        let mut p = profile();
        p.years_to_social_security = 12; // claims at 62, retires at 65
        let market = MarketAssumptions::default();
        let flows = project_cash_flows(&p, 20_000.0, &market, &LtcAssumptions::default(), 120);
        assert!(flows.social_security[0] > 0.0);
    }

    #[test]
    fn test_guaranteed_income_escalates_at_long_rate_only() {
        let p = profile();
        let market = MarketAssumptions::default();
        let flows = project_cash_flows(&p, 30_000.0, &market, &LtcAssumptions::default(), 120);
        assert!((flows.pension[0] - 10_000.0 * 1.023).abs() < 0.01);
        let ratio = flows.pension[10] / flows.pension[9];
        assert!((ratio - 1.023).abs() < 1e-9);
    }

    #[test]
    fn test_ltc_insurance_floors_at_zero() {
        let mut p = profile();
        p.ltc_insurance = 1_000_000.0;
        let market = MarketAssumptions::default();
        let flows = project_cash_flows(&p, 30_000.0, &market, &LtcAssumptions::default(), 120);
        assert!(flows.ltc.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_ltc_mitigation_caps_at_max_reduction() {
        let mut p = profile();
        p.ltc_insurance = 0.0;
        let market = MarketAssumptions::default();
        let ltc = LtcAssumptions::default();
        let flows = project_cash_flows(&p, 30_000.0, &market, &ltc, 120);
        // Past the phase-in (half the horizon), the mitigation stays at cap
        let late = flows.len() - 1;
        let k = late as f64 + 1.0;
        let expected = ltc.base_cost * 1.05_f64.powi(k as i32) * (1.0 - ltc.max_reduction);
        assert!(
            (flows.ltc[late] - expected).abs() < 0.01,
            "Expected {}, got {}",
            expected,
            flows.ltc[late]
        );
    }

    #[test]
    fn test_funding_gap_may_be_negative() {
        let mut p = profile();
        p.monthly_income = 100.0;
        p.pension_income = 200_000.0;
        p.ltc_insurance = 1_000_000.0;
        let market = MarketAssumptions::default();
        let flows = project_cash_flows(&p, 30_000.0, &market, &LtcAssumptions::default(), 120);
        assert!(flows.funding_gap(0) < 0.0);
    }
}
