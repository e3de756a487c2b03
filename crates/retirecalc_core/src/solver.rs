//! Top-level requirement solver
//!
//! Orchestrates the full pipeline: validate the profile, price the
//! Social Security benefit, project cash flows, gross up withdrawals,
//! anchor a deterministic baseline, sweep candidate asset levels through
//! the Monte Carlo engine, and interpolate the assets required to hit the
//! target success rate.

use crate::benefits::annual_benefit;
use crate::error::EngineError;
use crate::model::{ClientProfile, PlanAssumptions, RetirementRequirement, SuccessCurve};
use crate::projection::project_cash_flows;
use crate::simulation::{
    SweepProgress, candidate_levels, deterministic_baseline, sweep_success_curve_with_progress,
};
use crate::withdrawals::solve_withdrawals;

/// Assets at which the success curve first reaches the target rate.
///
/// The curve is noisy, so this scans for the first adjacent pair that
/// brackets the target and interpolates linearly inside it. Below the
/// first point it clamps to the first asset level; if no pair brackets
/// the target it falls back to the last level.
pub fn interpolate_required_assets(curve: &SuccessCurve, target_success: f64) -> f64 {
    let points = &curve.points;
    if points.is_empty() {
        return 0.0;
    }
    if target_success <= points[0].success_rate {
        return points[0].assets;
    }

    for pair in points.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if lo.success_rate < target_success && hi.success_rate >= target_success {
            let span = hi.success_rate - lo.success_rate;
            if span <= 0.0 {
                return hi.assets;
            }
            let t = (target_success - lo.success_rate) / span;
            return lo.assets + t * (hi.assets - lo.assets);
        }
    }

    points[points.len() - 1].assets
}

/// Solve the complete retirement requirement for a client profile.
pub fn calculate_requirement(
    profile: &ClientProfile,
    assumptions: &PlanAssumptions,
    seed: u64,
) -> Result<RetirementRequirement, EngineError> {
    calculate_requirement_with_progress(profile, assumptions, seed, &SweepProgress::default())
}

/// Solve the requirement while reporting sweep progress and honoring
/// cancellation.
pub fn calculate_requirement_with_progress(
    profile: &ClientProfile,
    assumptions: &PlanAssumptions,
    seed: u64,
    progress: &SweepProgress,
) -> Result<RetirementRequirement, EngineError> {
    profile.validate(assumptions)?;

    let benefit_at_claiming = annual_benefit(profile.claiming_age(), &profile.benefits);
    let cash_flows = project_cash_flows(
        profile,
        benefit_at_claiming,
        &assumptions.market,
        &assumptions.ltc,
        assumptions.terminal_age,
    );
    let withdrawals = solve_withdrawals(profile, &cash_flows, &assumptions.taxes);

    let baseline_assets =
        deterministic_baseline(&withdrawals, profile.legacy_desired, &assumptions.market);

    let (assets_at_retirement, success_curve) = if withdrawals.is_empty() {
        // Degenerate horizon: nothing to withdraw, only the legacy floor
        (profile.legacy_desired, SuccessCurve::default())
    } else {
        let levels = candidate_levels(baseline_assets, &assumptions.simulation);
        progress.reset(levels.len());
        let curve = sweep_success_curve_with_progress(
            &levels,
            &withdrawals,
            profile.legacy_desired,
            &assumptions.market,
            &assumptions.simulation,
            seed,
            progress,
        )?;
        let required = interpolate_required_assets(&curve, assumptions.simulation.target_success);
        (required, curve)
    };

    let pre_years = profile.years_to_retirement as i32;
    let assets_today =
        assets_at_retirement / (1.0 + assumptions.market.pre_retirement_growth).powi(pre_years);

    let required_growth_rate = if pre_years > 0 && assets_today > 0.0 {
        (assets_at_retirement / assets_today).powf(1.0 / pre_years as f64) - 1.0
    } else {
        assumptions.market.default_growth_rate
    };

    Ok(RetirementRequirement {
        assets_at_retirement,
        assets_today,
        required_growth_rate,
        benefit_at_claiming,
        baseline_assets,
        safe_withdrawal_income: assets_at_retirement * assumptions.safe_withdrawal_rate,
        cash_flows,
        withdrawals,
        success_curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SuccessPoint;

    fn curve(points: &[(f64, f64)]) -> SuccessCurve {
        SuccessCurve {
            points: points
                .iter()
                .map(|&(assets, success_rate)| SuccessPoint {
                    assets,
                    success_rate,
                })
                .collect(),
        }
    }

    #[test]
    fn test_interpolation_empty_curve() {
        assert_eq!(interpolate_required_assets(&SuccessCurve::default(), 0.90), 0.0);
    }

    #[test]
    fn test_interpolation_clamps_below_first_point() {
        let c = curve(&[(800_000.0, 0.95), (900_000.0, 0.99)]);
        assert_eq!(interpolate_required_assets(&c, 0.90), 800_000.0);
    }

    #[test]
    fn test_interpolation_linear_inside_bracket() {
        let c = curve(&[(800_000.0, 0.50), (1_000_000.0, 0.90), (1_200_000.0, 1.0)]);
        let required = interpolate_required_assets(&c, 0.70);
        assert!(
            (required - 900_000.0).abs() < 1e-6,
            "Expected 900000, got {}",
            required
        );
    }

    #[test]
    fn test_interpolation_falls_back_to_last_level() {
        let c = curve(&[(800_000.0, 0.40), (900_000.0, 0.60), (1_000_000.0, 0.80)]);
        assert_eq!(interpolate_required_assets(&c, 0.95), 1_000_000.0);
    }

    #[test]
    fn test_interpolation_skips_non_bracketing_dips() {
        // Noisy curve: dips after crossing should not matter
        let c = curve(&[
            (800_000.0, 0.70),
            (900_000.0, 0.92),
            (1_000_000.0, 0.89),
            (1_100_000.0, 0.97),
        ]);
        let required = interpolate_required_assets(&c, 0.90);
        assert!(
            required > 800_000.0 && required < 900_000.0,
            "first crossing wins, got {}",
            required
        );
    }
}
