//! Criterion benchmarks for retirecalc_core
//!
//! Run with: cargo bench -p retirecalc_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use retirecalc_core::model::{
    ClientProfile, FilingStatus, PlanAssumptions, SocialSecurityBenefits,
};
use retirecalc_core::projection::project_cash_flows;
use retirecalc_core::simulation::{candidate_levels, deterministic_baseline, sweep_success_curve};
use retirecalc_core::solver::calculate_requirement;
use retirecalc_core::withdrawals::solve_withdrawals;

fn create_profile() -> ClientProfile {
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

fn bench_cash_flow_projection(c: &mut Criterion) {
    let profile = create_profile();
    let assumptions = PlanAssumptions::default();

    c.bench_function("project_55yr_cash_flows", |b| {
        b.iter(|| {
            project_cash_flows(
                black_box(&profile),
                black_box(30_000.0),
                black_box(&assumptions.market),
                black_box(&assumptions.ltc),
                black_box(assumptions.terminal_age),
            )
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    let profile = create_profile();
    let assumptions = PlanAssumptions::default();
    let flows = project_cash_flows(
        &profile,
        30_000.0,
        &assumptions.market,
        &assumptions.ltc,
        assumptions.terminal_age,
    );
    let withdrawals = solve_withdrawals(&profile, &flows, &assumptions.taxes);
    let baseline = deterministic_baseline(&withdrawals, 0.0, &assumptions.market);

    let mut group = c.benchmark_group("sweep");
    for trials in [100, 500, 1000].iter() {
        let mut settings = assumptions.simulation.clone();
        settings.trials = *trials;
        let levels = candidate_levels(baseline, &settings);

        group.bench_with_input(BenchmarkId::new("trials", trials), trials, |b, _| {
            b.iter(|| {
                sweep_success_curve(
                    black_box(&levels),
                    black_box(&withdrawals),
                    black_box(0.0),
                    black_box(&assumptions.market),
                    black_box(&settings),
                    black_box(42),
                )
            })
        });
    }
    group.finish();
}

fn bench_full_requirement(c: &mut Criterion) {
    let profile = create_profile();
    let mut assumptions = PlanAssumptions::default();
    assumptions.simulation.trials = 500;

    c.bench_function("calculate_requirement_500_trials", |b| {
        b.iter(|| {
            calculate_requirement(black_box(&profile), black_box(&assumptions), black_box(42))
        })
    });
}

criterion_group!(
    benches,
    bench_cash_flow_projection,
    bench_sweep,
    bench_full_requirement
);
criterion_main!(benches);
