//! End-to-end tests for the estimation engine.

use varsweep::{ConfigError, DivisorSweep, SweepResult};

/// Small configuration for fast structural checks.
fn quick_sweep() -> DivisorSweep {
    DivisorSweep::new()
        .simulations(2_000)
        .bootstrap_iterations(50)
}

/// The reference experiment: S=10000, n=5, V=10, B=200, seed=42.
fn reference_run() -> SweepResult {
    DivisorSweep::new().run().expect("default config is valid")
}

#[test]
fn runs_are_deterministic() {
    let a = quick_sweep().run().unwrap();
    let b = quick_sweep().run().unwrap();
    // Bit-identical, not merely close.
    assert_eq!(a.results, b.results);
}

#[test]
fn different_seeds_differ() {
    let a = quick_sweep().seed(1).run().unwrap();
    let b = quick_sweep().seed(2).run().unwrap();
    assert_ne!(a.results, b.results);
}

#[test]
fn grid_order_is_preserved() {
    let sweep = quick_sweep().run().unwrap();
    let divisors: Vec<f64> = sweep.results.iter().map(|r| r.divisor).collect();
    let expected = DivisorSweep::new().config().divisor_grid();
    assert_eq!(divisors, expected);
}

#[test]
fn mse_decomposition_is_exact() {
    let sweep = quick_sweep().run().unwrap();
    for row in &sweep.results {
        // Exact by construction, so bitwise equality is required.
        assert_eq!(row.mse, row.bias_sq + row.variance);
    }
}

#[test]
fn intervals_are_ordered() {
    let sweep = quick_sweep().run().unwrap();
    for row in &sweep.results {
        assert!(row.bias_sq_ci.lower <= row.bias_sq_ci.upper);
        assert!(row.variance_ci.lower <= row.variance_ci.upper);
        assert!(row.mse_ci.lower <= row.mse_ci.upper);
    }
}

#[test]
fn variance_term_decreases_with_divisor() {
    // Estimates scale as 1/a, so the variance term scales as 1/a² and must
    // be strictly decreasing over an increasing grid.
    let sweep = quick_sweep().run().unwrap();
    for pair in sweep.results.windows(2) {
        assert!(pair[1].variance < pair[0].variance);
    }
}

#[test]
fn reference_experiment_shows_bias_variance_tradeoff() {
    let sweep = reference_run();
    let row = |divisor: f64| {
        sweep
            .results
            .iter()
            .find(|r| (r.divisor - divisor).abs() < 1e-9)
            .expect("divisor on grid")
    };

    // a = n−1 = 4 is the unbiased estimator: bias² indistinguishable from 0
    // at S = 10,000 (measured 2.8e-4 with the default seed).
    let unbiased = row(4.0);
    assert!(unbiased.bias_sq < 0.01);
    assert!((unbiased.mse - unbiased.variance).abs() < 0.5);
    // Theoretical variance term at a=4 is 2(n−1)V²/a² = 50.
    assert!(unbiased.variance > 40.0 && unbiased.variance < 60.0);

    // The MSE minimum lies above the unbiased divisor: n+1 beats both n and
    // n−1 under normality.
    assert!(row(6.0).mse < row(5.0).mse);
    assert!(row(5.0).mse < row(4.0).mse);
}

#[test]
fn single_value_grid_produces_one_result() {
    let sweep = quick_sweep().divisor_grid(4.0, 4.1, 0.5).run().unwrap();
    assert_eq!(sweep.results.len(), 1);
    let row = &sweep.results[0];
    assert_eq!(row.divisor, 4.0);
    assert!(row.bias_sq_ci.lower.is_finite());
    assert!(row.mse_ci.lower <= row.mse_ci.upper);
}

#[test]
fn metadata_snapshots_configuration() {
    let sweep = quick_sweep().seed(7).confidence(0.9).run().unwrap();
    assert_eq!(sweep.metadata.simulations, 2_000);
    assert_eq!(sweep.metadata.bootstrap_iterations, 50);
    assert_eq!(sweep.metadata.seed, 7);
    assert!((sweep.metadata.confidence - 0.9).abs() < 1e-12);
    assert!(sweep.metadata.runtime_secs >= 0.0);
}

#[test]
fn invalid_configurations_are_rejected() {
    assert_eq!(
        DivisorSweep::new().observations(1).run().err(),
        Some(ConfigError::TooFewObservations { got: 1 })
    );
    assert_eq!(
        DivisorSweep::new().bootstrap_iterations(1).run().err(),
        Some(ConfigError::TooFewBootstrapIterations { got: 1 })
    );
    assert_eq!(
        DivisorSweep::new().divisor_grid(5.0, 5.0, 0.5).run().err(),
        Some(ConfigError::EmptyDivisorGrid)
    );
    assert_eq!(
        DivisorSweep::new().true_variance(-1.0).run().err(),
        Some(ConfigError::NonPositiveVariance { got: -1.0 })
    );
}
