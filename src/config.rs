//! Configuration for the estimator sweep.

use std::fmt;

/// Configuration options for [`DivisorSweep`](crate::DivisorSweep).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of simulated samples in the pool (default: 10,000).
    pub simulations: usize,

    /// Observations per sample (default: 5). Must be at least 2 for the
    /// deviation sum to be meaningful.
    pub observations: usize,

    /// True variance of the Normal(0, V) population (default: 10.0).
    pub true_variance: f64,

    /// First divisor in the grid (default: 3.5).
    pub grid_start: f64,

    /// Exclusive upper bound of the divisor grid (default: 9.0).
    pub grid_stop: f64,

    /// Step between consecutive divisors (default: 0.5).
    pub grid_step: f64,

    /// Bootstrap resamples per divisor (default: 200). Must be at least 2
    /// for the t-interval to have positive degrees of freedom.
    pub bootstrap_iterations: usize,

    /// Seed for the run's Xoshiro256++ generator (default: 42).
    pub seed: u64,

    /// Confidence level for the bootstrap intervals (default: 0.95).
    pub confidence: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulations: 10_000,
            observations: 5,
            true_variance: 10.0,
            grid_start: 3.5,
            grid_stop: 9.0,
            grid_step: 0.5,
            bootstrap_iterations: 200,
            seed: 42,
            confidence: 0.95,
        }
    }
}

impl Config {
    /// Materialize the divisor grid.
    ///
    /// Half-open arange semantics: `start, start + step, ...` while strictly
    /// below `stop`. The default grid is 3.5, 4.0, ..., 8.5. Each divisor is
    /// computed as `start + i * step` rather than by accumulation, so the
    /// grid values carry no compounding rounding error.
    pub fn divisor_grid(&self) -> Vec<f64> {
        (0..)
            .map(|i| self.grid_start + i as f64 * self.grid_step)
            .take_while(|a| *a < self.grid_stop)
            .collect()
    }

    /// Check the configuration before running a sweep.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint. See [`ConfigError`] for the
    /// full list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulations == 0 {
            return Err(ConfigError::NoSimulations);
        }
        if self.observations < 2 {
            return Err(ConfigError::TooFewObservations {
                got: self.observations,
            });
        }
        if !(self.true_variance > 0.0) {
            return Err(ConfigError::NonPositiveVariance {
                got: self.true_variance,
            });
        }
        if self.bootstrap_iterations < 2 {
            return Err(ConfigError::TooFewBootstrapIterations {
                got: self.bootstrap_iterations,
            });
        }
        if !(self.grid_step > 0.0) {
            return Err(ConfigError::NonPositiveGridStep {
                got: self.grid_step,
            });
        }
        let grid = self.divisor_grid();
        if grid.is_empty() {
            return Err(ConfigError::EmptyDivisorGrid);
        }
        // Grid values are increasing, so checking the first suffices.
        if grid[0] <= 0.0 {
            return Err(ConfigError::NonPositiveDivisor { got: grid[0] });
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(ConfigError::InvalidConfidence {
                got: self.confidence,
            });
        }
        Ok(())
    }
}

/// Configuration errors reported before any computation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The pool would contain no samples.
    NoSimulations,
    /// Fewer than 2 observations per sample: the deviation sum degenerates.
    TooFewObservations {
        /// Configured observation count.
        got: usize,
    },
    /// The population variance must be positive.
    NonPositiveVariance {
        /// Configured true variance.
        got: f64,
    },
    /// Fewer than 2 bootstrap resamples: the t-interval has no degrees of
    /// freedom.
    TooFewBootstrapIterations {
        /// Configured resample count.
        got: usize,
    },
    /// The grid step must be positive for the grid to terminate.
    NonPositiveGridStep {
        /// Configured grid step.
        got: f64,
    },
    /// The divisor grid contains no values (start ≥ stop).
    EmptyDivisorGrid,
    /// A divisor of zero or below would make the estimator undefined.
    NonPositiveDivisor {
        /// Offending grid value.
        got: f64,
    },
    /// The confidence level must lie strictly between 0 and 1.
    InvalidConfidence {
        /// Configured confidence level.
        got: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoSimulations => write!(f, "simulations must be at least 1"),
            ConfigError::TooFewObservations { got } => {
                write!(f, "observations per sample must be at least 2, got {}", got)
            }
            ConfigError::NonPositiveVariance { got } => {
                write!(f, "true variance must be positive, got {}", got)
            }
            ConfigError::TooFewBootstrapIterations { got } => {
                write!(f, "bootstrap iterations must be at least 2, got {}", got)
            }
            ConfigError::NonPositiveGridStep { got } => {
                write!(f, "grid step must be positive, got {}", got)
            }
            ConfigError::EmptyDivisorGrid => write!(f, "divisor grid is empty"),
            ConfigError::NonPositiveDivisor { got } => {
                write!(f, "divisors must be positive, grid starts at {}", got)
            }
            ConfigError::InvalidConfidence { got } => {
                write!(f, "confidence must be in (0, 1), got {}", got)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
