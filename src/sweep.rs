//! Main `DivisorSweep` entry point and estimation engine.

use std::time::Instant;

use log::{debug, info};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::{Config, ConfigError};
use crate::generator::SamplePool;
use crate::result::{DivisorResult, Metadata, SweepResult};
use crate::statistics::{mean, resample_indices_into, sample_variance, t_interval};

/// Main entry point for the estimator sweep.
///
/// Use the builder pattern to configure and run the experiment.
///
/// # Example
///
/// ```ignore
/// use varsweep::DivisorSweep;
///
/// let sweep = DivisorSweep::new()
///     .simulations(10_000)
///     .bootstrap_iterations(200)
///     .seed(42)
///     .run()?;
///
/// println!("{}", varsweep::output::terminal::format_table(&sweep));
/// ```
///
/// The run consumes one seeded generator in strict sequential order: pool
/// generation first, then B × S index draws per divisor in grid order. This
/// ordering is what makes results reproducible; reordering the divisor loop
/// (e.g. parallelizing it) would change every number while remaining
/// statistically valid.
#[derive(Debug, Clone, Default)]
pub struct DivisorSweep {
    config: Config,
}

/// Per-replicate summaries collected during the bootstrap pass.
struct ReplicateSummaries {
    bias_sq: Vec<f64>,
    variance: Vec<f64>,
    mse: Vec<f64>,
}

impl DivisorSweep {
    /// Create with the default configuration (the reference experiment).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an existing configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Number of simulated samples in the pool.
    pub fn simulations(mut self, simulations: usize) -> Self {
        self.config.simulations = simulations;
        self
    }

    /// Observations per sample.
    pub fn observations(mut self, observations: usize) -> Self {
        self.config.observations = observations;
        self
    }

    /// True variance of the simulated population.
    pub fn true_variance(mut self, true_variance: f64) -> Self {
        self.config.true_variance = true_variance;
        self
    }

    /// Divisor grid as (start, exclusive stop, step).
    pub fn divisor_grid(mut self, start: f64, stop: f64, step: f64) -> Self {
        self.config.grid_start = start;
        self.config.grid_stop = stop;
        self.config.grid_step = step;
        self
    }

    /// Bootstrap resamples per divisor.
    pub fn bootstrap_iterations(mut self, iterations: usize) -> Self {
        self.config.bootstrap_iterations = iterations;
        self
    }

    /// Seed for the run's generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Confidence level for the bootstrap intervals.
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.config.confidence = confidence;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the sweep: generate the pool, then estimate bias², variance, and
    /// MSE with bootstrap confidence intervals for every grid divisor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation. No
    /// computation happens in that case.
    pub fn run(&self) -> Result<SweepResult, ConfigError> {
        self.config.validate()?;
        let config = &self.config;
        let start = Instant::now();

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        let pool = SamplePool::generate(
            config.simulations,
            config.observations,
            config.true_variance,
            &mut rng,
        );
        info!(
            "generated pool: {} samples x {} observations, true variance {}",
            config.simulations, config.observations, config.true_variance
        );

        let grid = config.divisor_grid();
        let mut results = Vec::with_capacity(grid.len());
        for divisor in grid {
            let row = sweep_divisor(&pool, divisor, config, &mut rng);
            debug!(
                "a = {:.2}: bias^2 = {:.4} {}, variance = {:.4} {}, mse = {:.4} {}",
                row.divisor,
                row.bias_sq,
                row.bias_sq_ci,
                row.variance,
                row.variance_ci,
                row.mse,
                row.mse_ci
            );
            results.push(row);
        }

        let metadata = Metadata {
            simulations: config.simulations,
            observations: config.observations,
            true_variance: config.true_variance,
            bootstrap_iterations: config.bootstrap_iterations,
            seed: config.seed,
            confidence: config.confidence,
            runtime_secs: start.elapsed().as_secs_f64(),
        };
        info!(
            "sweep finished: {} divisors in {:.2}s",
            results.len(),
            metadata.runtime_secs
        );

        Ok(SweepResult { results, metadata })
    }
}

/// Point estimates plus bootstrap intervals for a single divisor.
fn sweep_divisor(
    pool: &SamplePool,
    divisor: f64,
    config: &Config,
    rng: &mut Xoshiro256PlusPlus,
) -> DivisorResult {
    let v = config.true_variance;

    // Point estimate pass over the full pool.
    let mut estimates = vec![0.0; pool.simulations()];
    pool.estimates_into(divisor, &mut estimates);
    let bias = mean(&estimates) - v;
    let bias_sq = bias * bias;
    let variance = sample_variance(&estimates);
    let mse = bias_sq + variance;

    let summaries = bootstrap_replicates(pool, divisor, v, config.bootstrap_iterations, rng);

    DivisorResult {
        divisor,
        bias_sq,
        bias_sq_ci: t_interval(&summaries.bias_sq, config.confidence),
        variance,
        variance_ci: t_interval(&summaries.variance, config.confidence),
        mse,
        mse_ci: t_interval(&summaries.mse, config.confidence),
    }
}

/// Run B pool-level bootstrap resamples for one divisor.
///
/// Each resample draws S row indices with replacement and evaluates the same
/// estimator over the resampled pool. Rows travel whole, so a resampled row's
/// variance estimate is the original row's precomputed deviation sum divided
/// by the divisor; no matrix is materialized.
fn bootstrap_replicates(
    pool: &SamplePool,
    divisor: f64,
    true_variance: f64,
    iterations: usize,
    rng: &mut Xoshiro256PlusPlus,
) -> ReplicateSummaries {
    let s = pool.simulations();
    let sum_sq_dev = pool.sum_sq_dev();

    let mut bias_sq = Vec::with_capacity(iterations);
    let mut variance = Vec::with_capacity(iterations);
    let mut mse = Vec::with_capacity(iterations);

    let mut indices = vec![0usize; s];
    let mut resampled = vec![0.0; s];
    for _ in 0..iterations {
        resample_indices_into(s, rng, &mut indices);
        for (slot, &idx) in resampled.iter_mut().zip(indices.iter()) {
            *slot = sum_sq_dev[idx] / divisor;
        }

        let rep_bias = mean(&resampled) - true_variance;
        let rep_bias_sq = rep_bias * rep_bias;
        let rep_variance = sample_variance(&resampled);
        bias_sq.push(rep_bias_sq);
        variance.push(rep_variance);
        mse.push(rep_bias_sq + rep_variance);
    }

    ReplicateSummaries {
        bias_sq,
        variance,
        mse,
    }
}
