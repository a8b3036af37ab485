//! Sweep result types and related structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A confidence interval around a bootstrap distribution's mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ci {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl Ci {
    /// Create a new interval. `lower` must not exceed `upper`.
    pub fn new(lower: f64, upper: f64) -> Self {
        debug_assert!(lower <= upper, "interval bounds out of order");
        Self { lower, upper }
    }

    /// Interval width.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value lies within the interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for Ci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.lower, self.upper)
    }
}

/// Point estimates and confidence intervals for one divisor value.
///
/// `mse` is `bias_sq + variance` by construction, so the decomposition
/// identity holds exactly at the point-estimate level. The CI triple does not
/// share that identity: each interval is computed from its own bootstrap
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisorResult {
    /// Divisor `a` applied to the sum of squared deviations.
    pub divisor: f64,

    /// Squared bias of the estimator across the pool.
    pub bias_sq: f64,
    /// Bootstrap confidence interval for bias².
    pub bias_sq_ci: Ci,

    /// Sample variance of the pool's estimates (Bessel-corrected).
    pub variance: f64,
    /// Bootstrap confidence interval for the variance term.
    pub variance_ci: Ci,

    /// Mean squared error: bias² + variance.
    pub mse: f64,
    /// Bootstrap confidence interval for the MSE.
    pub mse_ci: Ci,
}

/// Configuration snapshot and run information attached to a sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Samples in the pool.
    pub simulations: usize,
    /// Observations per sample.
    pub observations: usize,
    /// True variance of the simulated population.
    pub true_variance: f64,
    /// Bootstrap resamples per divisor.
    pub bootstrap_iterations: usize,
    /// Seed of the run's generator.
    pub seed: u64,
    /// Confidence level of all intervals.
    pub confidence: f64,
    /// Total runtime in seconds.
    pub runtime_secs: f64,
}

/// Complete result of a divisor sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    /// One record per grid divisor, in grid order.
    pub results: Vec<DivisorResult>,
    /// Run configuration and timing.
    pub metadata: Metadata,
}

impl SweepResult {
    /// The record with the smallest MSE point estimate, if any.
    pub fn min_mse(&self) -> Option<&DivisorResult> {
        self.results.iter().min_by(|a, b| {
            a.mse
                .partial_cmp(&b.mse)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "bounds out of order")]
    fn ci_rejects_inverted_bounds() {
        let _ = Ci::new(3.0, 1.0);
    }

    #[test]
    fn ci_accessors() {
        let ci = Ci::new(1.0, 3.0);
        assert_eq!(ci.width(), 2.0);
        assert!(ci.contains(2.0));
        assert!(!ci.contains(3.5));
        assert_eq!(format!("{}", ci), "[1.00, 3.00]");
    }

    #[test]
    fn min_mse_picks_smallest() {
        let row = |divisor: f64, mse: f64| DivisorResult {
            divisor,
            bias_sq: 0.0,
            bias_sq_ci: Ci::new(0.0, 0.0),
            variance: mse,
            variance_ci: Ci::new(0.0, 0.0),
            mse,
            mse_ci: Ci::new(0.0, 0.0),
        };
        let sweep = SweepResult {
            results: vec![row(4.0, 47.0), row(6.0, 32.0), row(8.0, 37.0)],
            metadata: Metadata {
                simulations: 1,
                observations: 2,
                true_variance: 1.0,
                bootstrap_iterations: 2,
                seed: 0,
                confidence: 0.95,
                runtime_secs: 0.0,
            },
        };
        assert_eq!(sweep.min_mse().map(|r| r.divisor), Some(6.0));
    }
}
