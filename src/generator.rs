//! Synthetic sample pool generation.

use nalgebra::{DMatrix, DVector};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Pool of S independent samples, each of n observations drawn i.i.d. from
/// Normal(0, V).
///
/// The pool is generated once per run and shared read-only by every divisor
/// and every bootstrap resample. Alongside the raw matrix it carries the
/// per-row sum of squared deviations from the row mean: bootstrap resampling
/// happens at the pool level (whole rows, never split), so a resampled row's
/// deviation sum is the original row's and can be looked up instead of
/// recomputed.
#[derive(Debug, Clone)]
pub struct SamplePool {
    data: DMatrix<f64>,
    sum_sq_dev: DVector<f64>,
}

impl SamplePool {
    /// Generate a pool of `simulations` × `observations` normal draws with
    /// mean 0 and variance `true_variance`.
    ///
    /// Draws are filled row by row so the generator state advances in
    /// "sample after sample" order; given the same RNG state the pool is
    /// reproducible bit for bit.
    pub fn generate<R: Rng>(
        simulations: usize,
        observations: usize,
        true_variance: f64,
        rng: &mut R,
    ) -> Self {
        let scale = true_variance.sqrt();
        let mut data = DMatrix::zeros(simulations, observations);
        for i in 0..simulations {
            for j in 0..observations {
                let z: f64 = StandardNormal.sample(rng);
                data[(i, j)] = scale * z;
            }
        }

        let sum_sq_dev = DVector::from_iterator(
            simulations,
            (0..simulations).map(|i| {
                let row = data.row(i);
                let mean = row.mean();
                row.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>()
            }),
        );

        Self { data, sum_sq_dev }
    }

    /// Number of samples in the pool.
    pub fn simulations(&self) -> usize {
        self.data.nrows()
    }

    /// Observations per sample.
    pub fn observations(&self) -> usize {
        self.data.ncols()
    }

    /// The raw S×n observation matrix.
    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Per-row sum of squared deviations from the row mean.
    pub fn sum_sq_dev(&self) -> &DVector<f64> {
        &self.sum_sq_dev
    }

    /// Write the per-row variance estimates for `divisor` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len()` differs from the pool's sample count.
    pub fn estimates_into(&self, divisor: f64, out: &mut [f64]) {
        assert_eq!(
            out.len(),
            self.simulations(),
            "output buffer must have one slot per sample"
        );
        for (slot, ss) in out.iter_mut().zip(self.sum_sq_dev.iter()) {
            *slot = ss / divisor;
        }
    }
}
