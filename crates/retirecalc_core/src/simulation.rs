//! Monte Carlo sweep over candidate asset levels
//!
//! For each candidate starting-asset level the engine runs seeded
//! independent trials, each drawing one annual return and one annual
//! inflation rate per retirement year, and measures the fraction of trials
//! that fund every scheduled withdrawal and end at or above the legacy
//! floor. Candidate levels are independent, so the sweep parallelizes
//! across them with no shared state beyond the per-level success counts.
//!
//! Reproducibility contract: for a fixed master seed the sweep produces
//! bit-for-bit identical success rates regardless of thread count. Each
//! level derives its own seed stream from the master seed, and every trial
//! gets a fresh `SmallRng` from that stream.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rand_distr::{Distribution, Normal};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::EngineError;
use crate::model::{
    MarketAssumptions, SimulationSettings, SuccessCurve, SuccessPoint, WithdrawalSeries,
};

/// Progress tracking and cancellation for a running sweep
#[derive(Debug, Clone)]
pub struct SweepProgress {
    /// Completed candidate levels
    completed: Arc<AtomicUsize>,
    /// Total candidate levels
    total: Arc<AtomicUsize>,
    /// Cancellation flag
    cancelled: Arc<AtomicBool>,
}

impl SweepProgress {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total: Arc::new(AtomicUsize::new(total)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    pub fn increment(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset(&self, total: usize) {
        self.completed.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    /// Cancel the sweep; the running batch returns `EngineError::Cancelled`
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Default for SweepProgress {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Deterministic present-value baseline anchoring the candidate range.
///
/// Year k (0-based) discounts at one year of expected growth against k + 1
/// years of compounded long-run inflation; the legacy amount discounts at
/// the final year's factor.
pub fn deterministic_baseline(
    withdrawals: &WithdrawalSeries,
    legacy_desired: f64,
    market: &MarketAssumptions,
) -> f64 {
    if withdrawals.is_empty() {
        return legacy_desired;
    }

    let growth = 1.0 + market.post_retirement_return_mean;
    let inflation = 1.0 + market.inflation_long;

    let mut total = 0.0;
    let mut last_factor = 1.0;
    for (year, withdrawal) in withdrawals.amounts.iter().enumerate() {
        let factor = growth / inflation.powi(year as i32 + 1);
        total += withdrawal / factor;
        last_factor = factor;
    }

    total + legacy_desired / last_factor
}

/// Evenly spaced candidate asset levels across the configured span of the
/// baseline, endpoints inclusive.
pub fn candidate_levels(baseline: f64, settings: &SimulationSettings) -> Vec<f64> {
    let low = baseline * settings.candidate_low;
    let high = baseline * settings.candidate_high;
    let count = settings.candidate_count.max(2);

    (0..count)
        .map(|i| low + (high - low) * i as f64 / (count - 1) as f64)
        .collect()
}

/// One trial: grow the balance by each year's drawn return, then subtract
/// the scheduled withdrawal re-escalated by the year's own drawn inflation
/// compounded to the year index. Fails the moment the balance cannot cover
/// a withdrawal; succeeds only if the ending balance meets the legacy floor.
fn run_trial(
    starting_assets: f64,
    withdrawals: &[f64],
    legacy_desired: f64,
    returns: &mut Vec<f64>,
    inflations: &mut Vec<f64>,
    return_dist: &Normal<f64>,
    inflation_dist: &Normal<f64>,
    rng: &mut SmallRng,
) -> bool {
    let years = withdrawals.len();

    returns.clear();
    returns.extend((0..years).map(|_| return_dist.sample(rng)));
    inflations.clear();
    inflations.extend((0..years).map(|_| inflation_dist.sample(rng)));

    let mut balance = starting_assets;
    for year in 0..years {
        balance *= 1.0 + returns[year];
        let withdrawal = withdrawals[year] * (1.0 + inflations[year]).powi(year as i32);
        if balance < withdrawal {
            return false;
        }
        balance -= withdrawal;
    }

    balance >= legacy_desired
}

/// Success rate for one candidate level over `trials` seeded trials
fn level_success_rate(
    starting_assets: f64,
    withdrawals: &[f64],
    legacy_desired: f64,
    return_dist: &Normal<f64>,
    inflation_dist: &Normal<f64>,
    trials: usize,
    level_seed: u64,
) -> f64 {
    let mut seed_rng = SmallRng::seed_from_u64(level_seed);
    let mut returns = Vec::with_capacity(withdrawals.len());
    let mut inflations = Vec::with_capacity(withdrawals.len());

    let mut successes = 0_usize;
    for _ in 0..trials {
        let mut rng = SmallRng::seed_from_u64(seed_rng.next_u64());
        if run_trial(
            starting_assets,
            withdrawals,
            legacy_desired,
            &mut returns,
            &mut inflations,
            return_dist,
            inflation_dist,
            &mut rng,
        ) {
            successes += 1;
        }
    }

    successes as f64 / trials as f64
}

/// Run the full sweep over the given candidate levels.
pub fn sweep_success_curve(
    levels: &[f64],
    withdrawals: &WithdrawalSeries,
    legacy_desired: f64,
    market: &MarketAssumptions,
    settings: &SimulationSettings,
    seed: u64,
) -> Result<SuccessCurve, EngineError> {
    sweep_success_curve_with_progress(
        levels,
        withdrawals,
        legacy_desired,
        market,
        settings,
        seed,
        &SweepProgress::new(levels.len()),
    )
}

/// Run the full sweep, reporting per-level progress and honoring
/// cancellation requests from another thread.
pub fn sweep_success_curve_with_progress(
    levels: &[f64],
    withdrawals: &WithdrawalSeries,
    legacy_desired: f64,
    market: &MarketAssumptions,
    settings: &SimulationSettings,
    seed: u64,
    progress: &SweepProgress,
) -> Result<SuccessCurve, EngineError> {
    let return_dist = Normal::new(
        market.post_retirement_return_mean,
        market.post_retirement_return_sd,
    )
    .map_err(|_| EngineError::InvalidDistributionParameters {
        profile_type: "Normal return",
        mean: market.post_retirement_return_mean,
        std_dev: market.post_retirement_return_sd,
        reason: "std_dev must be non-negative and finite",
    })?;
    let inflation_dist = Normal::new(market.inflation_long, market.inflation_sd).map_err(|_| {
        EngineError::InvalidDistributionParameters {
            profile_type: "Normal inflation",
            mean: market.inflation_long,
            std_dev: market.inflation_sd,
            reason: "std_dev must be non-negative and finite",
        }
    })?;

    let trials = settings.trials.max(1);

    #[cfg(feature = "parallel")]
    let rates: Vec<Result<f64, EngineError>> = levels
        .par_iter()
        .enumerate()
        .map(|(index, &assets)| {
            if progress.is_cancelled() {
                return Err(EngineError::Cancelled);
            }
            let rate = level_success_rate(
                assets,
                &withdrawals.amounts,
                legacy_desired,
                &return_dist,
                &inflation_dist,
                trials,
                seed.wrapping_add(index as u64),
            );
            progress.increment();
            Ok(rate)
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let rates: Vec<Result<f64, EngineError>> = levels
        .iter()
        .enumerate()
        .map(|(index, &assets)| {
            if progress.is_cancelled() {
                return Err(EngineError::Cancelled);
            }
            let rate = level_success_rate(
                assets,
                &withdrawals.amounts,
                legacy_desired,
                &return_dist,
                &inflation_dist,
                trials,
                seed.wrapping_add(index as u64),
            );
            progress.increment();
            Ok(rate)
        })
        .collect();

    let mut points = Vec::with_capacity(levels.len());
    for (&assets, rate) in levels.iter().zip(rates) {
        points.push(SuccessPoint {
            assets,
            success_rate: rate?,
        });
    }

    Ok(SuccessCurve { points })
}
