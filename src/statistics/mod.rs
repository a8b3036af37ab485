//! Statistical primitives for the estimator sweep.
//!
//! This module provides the small set of named reductions the engine needs:
//! - Sample mean and Bessel-corrected sample variance
//! - Uniform index resampling with replacement for the pool-level bootstrap
//! - t-based confidence intervals around a collection's mean

mod bootstrap;
mod descriptive;
mod interval;

pub use bootstrap::resample_indices_into;
pub use descriptive::{mean, sample_variance};
pub use interval::t_interval;
