//! Engine output types
//!
//! Read-only records produced once per calculation. A presentation layer
//! can render tables and charts from these without re-running the engine.

use serde::{Deserialize, Serialize};

/// Year-by-year projected cash-flow streams, indexed by retirement year
/// (year 0 = first year of retirement). All five streams have equal length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashFlowSeries {
    /// Inflation-escalated living-expense needs
    pub needs: Vec<f64>,
    /// Social Security income (zero before the claiming year)
    pub social_security: Vec<f64>,
    /// Pension income
    pub pension: Vec<f64>,
    /// Other guaranteed income
    pub other_income: Vec<f64>,
    /// Long-term-care need net of mitigation and insurance
    pub ltc: Vec<f64>,
}

impl CashFlowSeries {
    pub fn len(&self) -> usize {
        self.needs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.needs.is_empty()
    }

    /// Funding gap for one retirement year: needs plus care cost, less all
    /// guaranteed income. May be negative when guaranteed income exceeds
    /// needs.
    pub fn funding_gap(&self, year: usize) -> f64 {
        self.needs[year] + self.ltc[year]
            - self.social_security[year]
            - self.pension[year]
            - self.other_income[year]
    }
}

/// Required pre-tax portfolio withdrawal per retirement year
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WithdrawalSeries {
    pub amounts: Vec<f64>,
}

impl WithdrawalSeries {
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// One point on the Monte Carlo sweep curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuccessPoint {
    /// Candidate asset level at retirement
    pub assets: f64,
    /// Fraction of trials that funded every year and met the legacy floor
    pub success_rate: f64,
}

/// The (asset level, success rate) curve, ordered by increasing asset level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessCurve {
    pub points: Vec<SuccessPoint>,
}

impl SuccessCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Complete result of one requirement calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementRequirement {
    /// Assets needed at retirement to hit the target success probability
    pub assets_at_retirement: f64,
    /// Present value of the at-retirement requirement
    pub assets_today: f64,
    /// Compound annual growth rate needed to get from today's requirement
    /// to the at-retirement requirement
    pub required_growth_rate: f64,
    /// Annual Social Security benefit at the chosen claiming age
    pub benefit_at_claiming: f64,
    /// Deterministic present-value baseline anchoring the candidate range
    pub baseline_assets: f64,
    /// Sustainable annual income from the required assets at the configured
    /// safe-withdrawal fraction
    pub safe_withdrawal_income: f64,
    pub cash_flows: CashFlowSeries,
    pub withdrawals: WithdrawalSeries,
    pub success_curve: SuccessCurve,
}
