//! t-based confidence intervals.

use statrs::distribution::{ContinuousCDF, StudentsT};

use super::descriptive::{mean, sample_variance};
use crate::result::Ci;

/// Confidence interval for the mean of `data` using Student's t-distribution.
///
/// The interval is `mean ± t(1 − α/2, n−1) · sd/√n` with the Bessel-corrected
/// standard deviation. This is the interval the bootstrap pass places around
/// the replicate mean of each metric: centered on the bootstrap distribution's
/// mean, not a percentile interval.
///
/// With fewer than two values the degrees of freedom vanish and the interval
/// is unbounded.
pub fn t_interval(data: &[f64], confidence: f64) -> Ci {
    let n = data.len();
    if n < 2 {
        return Ci::new(f64::NEG_INFINITY, f64::INFINITY);
    }

    let m = mean(data);
    let se = (sample_variance(data) / n as f64).sqrt();
    let alpha = 1.0 - confidence;
    let df = (n - 1) as f64;

    let t = match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => dist.inverse_cdf(1.0 - alpha / 2.0),
        // df >= 1 here; unreachable unless confidence is degenerate.
        Err(_) => return Ci::new(f64::NEG_INFINITY, f64::INFINITY),
    };

    let h = t * se;
    Ci::new(m - h, m + h)
}
