//! Planning assumptions
//!
//! Every knob the engine consumes lives here as one immutable value object
//! passed explicitly into each component. Defaults reflect a conservative
//! planning baseline; none of these are hard-coded into the computation
//! modules.

use serde::{Deserialize, Serialize};

use super::tax_config::TaxConfig;

/// Market return and inflation assumptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAssumptions {
    /// Mean annual portfolio return after retirement
    pub post_retirement_return_mean: f64,
    /// Standard deviation of the annual post-retirement return
    pub post_retirement_return_sd: f64,
    /// Inflation rate applied to the first two projection years
    pub inflation_short: f64,
    /// Inflation rate applied to all later years and to guaranteed income
    pub inflation_long: f64,
    /// Standard deviation of the annual inflation draw in simulation
    pub inflation_sd: f64,
    /// Assumed portfolio growth rate before retirement, used to discount the
    /// at-retirement requirement back to today
    pub pre_retirement_growth: f64,
    /// Growth rate reported when the compound-rate solve is degenerate
    /// (zero-year horizon or non-positive present value)
    pub default_growth_rate: f64,
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            post_retirement_return_mean: 0.05,
            post_retirement_return_sd: 0.10,
            inflation_short: 0.029,
            inflation_long: 0.023,
            inflation_sd: 0.005,
            pre_retirement_growth: 0.07,
            default_growth_rate: 0.07,
        }
    }
}

/// Long-term-care cost assumptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LtcAssumptions {
    /// Annual care cost in today's dollars
    pub base_cost: f64,
    /// Care-cost inflation rate (runs hotter than general inflation)
    pub inflation: f64,
    /// Maximum mitigation fraction, phased in linearly over the first half
    /// of the retirement horizon
    pub max_reduction: f64,
}

impl Default for LtcAssumptions {
    fn default() -> Self {
        Self {
            base_cost: 100_000.0,
            inflation: 0.05,
            max_reduction: 0.15,
        }
    }
}

/// Monte Carlo sweep settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Trials per candidate asset level
    pub trials: usize,
    /// Number of evenly spaced candidate asset levels
    pub candidate_count: usize,
    /// Lower bound of the candidate range as a multiple of the deterministic
    /// present-value baseline
    pub candidate_low: f64,
    /// Upper bound of the candidate range as a multiple of the baseline
    pub candidate_high: f64,
    /// Success probability the requirement is solved for
    pub target_success: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            trials: 1_000,
            candidate_count: 20,
            candidate_low: 0.8,
            candidate_high: 1.5,
            target_success: 0.90,
        }
    }
}

/// Complete, immutable configuration for one requirement calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanAssumptions {
    pub market: MarketAssumptions,
    pub taxes: TaxConfig,
    pub ltc: LtcAssumptions,
    pub simulation: SimulationSettings,
    /// Safe-withdrawal fraction used for the headline sustainable-income
    /// figure in the result record
    pub safe_withdrawal_rate: f64,
    /// Blended effective tax assumption; part of the configuration surface
    /// for presentation layers, not consumed by the engine itself
    pub effective_tax_rate: f64,
    /// Terminal planning age; retirement may not start past this age
    pub terminal_age: u32,
}

impl Default for PlanAssumptions {
    fn default() -> Self {
        Self {
            market: MarketAssumptions::default(),
            taxes: TaxConfig::default(),
            ltc: LtcAssumptions::default(),
            simulation: SimulationSettings::default(),
            safe_withdrawal_rate: 0.04,
            effective_tax_rate: 0.15,
            terminal_age: 120,
        }
    }
}
