//! Performance benchmarks for the Euler integrator and the preprocessor
//!
//! # What We're Measuring
//!
//! 1. **Simulated runs**: cost per step of each rate law, coupled (θ, A)
//!    recurrence, one rate evaluation per step
//! 2. **Data-driven runs**: occupancy-only recurrence against an injected
//!    concentration sequence
//! 3. **Preprocessing**: resampling and baseline correction of a trace
//!
//! # Expected Results
//!
//! Time ∝ number of samples. The photo variants evaluate one exponential
//! per step and should be measurably slower than the dark ones.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench integrator_performance
//!
//! # Only the variant comparison
//! cargo bench --bench integrator_performance variants
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use photosorb_rs::models::{KineticVariant, ReactorModel};
use photosorb_rs::physics::ReactorParameters;
use photosorb_rs::preprocess::{correct_drift, interpolate};
use photosorb_rs::presets;
use photosorb_rs::solver::{EulerSolver, Scenario, Solver, SolverConfiguration};

/// Parameters accepted by every variant
fn all_variant_parameters() -> ReactorParameters {
    ReactorParameters {
        initial_occupied_fraction: 0.3,
        initial_adsorbate_concentration: Some(0.0044),
        generation_product: Some(1e11 * 1e6 / presets::AVOGADRO_NUMBER),
        ..presets::thermal_desorption()
    }
}

/// Cost of each rate law over the same grid
fn benchmark_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variants");
    let parameters = all_variant_parameters();

    // 0.1 s at 1e-4 s → 1 000 samples
    let config = SolverConfiguration::new(presets::REFERENCE_TIME_STEP, 0.1);
    let solver = EulerSolver::new();

    for variant in KineticVariant::ALL {
        let scenario = Scenario::new(ReactorModel::build(variant, &parameters).unwrap());

        group.bench_with_input(BenchmarkId::from_parameter(variant), &scenario, |b, scenario| {
            b.iter(|| solver.solve(black_box(scenario), black_box(&config)).unwrap());
        });
    }

    group.finish();
}

/// Scaling with the number of samples
fn benchmark_run_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_length");
    let model = ReactorModel::build(KineticVariant::Desorption, &presets::thermal_desorption()).unwrap();
    let scenario = Scenario::new(model);
    let solver = EulerSolver::new();

    for samples in [1_000usize, 10_000, 100_000] {
        let config = SolverConfiguration::new(1e-4, samples as f64 * 1e-4);

        group.bench_with_input(BenchmarkId::from_parameter(samples), &config, |b, config| {
            b.iter(|| solver.solve(black_box(&scenario), black_box(config)).unwrap());
        });
    }

    group.finish();
}

/// Simulated versus measured concentration channel
fn benchmark_data_driven(c: &mut Criterion) {
    let mut group = c.benchmark_group("concentration_source");
    let model = ReactorModel::build(KineticVariant::Desorption, &presets::thermal_desorption()).unwrap();
    let config = SolverConfiguration::new(1e-4, 1.0);
    let solver = EulerSolver::new();

    let simulated = Scenario::new(model.clone());
    let measured = Scenario::with_measured_concentration(model, vec![1e-3; config.sample_count()]);

    group.bench_function("simulated", |b| {
        b.iter(|| solver.solve(black_box(&simulated), black_box(&config)).unwrap())
    });
    group.bench_function("measured", |b| {
        b.iter(|| solver.solve(black_box(&measured), black_box(&config)).unwrap())
    });

    group.finish();
}

/// Resampling a 1 Hz trace onto a 1 ms grid
fn benchmark_preprocess(c: &mut Criterion) {
    let trace: Vec<(f64, f64)> = (0..600)
        .map(|i| (i as f64, 1.0 + 0.01 * i as f64 + (i as f64 * 0.1).sin()))
        .collect();

    c.bench_function("preprocess/interpolate_and_correct", |b| {
        b.iter(|| {
            let mut samples = interpolate(black_box(&trace), 0.0, 599.0, 1e-3).unwrap();
            correct_drift(&mut samples).unwrap();
            samples
        })
    });
}

criterion_group!(
    benches,
    benchmark_variants,
    benchmark_run_length,
    benchmark_data_driven,
    benchmark_preprocess,
);
criterion_main!(benches);
