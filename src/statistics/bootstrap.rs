//! Pool-level bootstrap resampling.
//!
//! The bootstrap in this crate resamples whole synthetic samples (rows of
//! the pool), not individual observations. One resample is therefore fully
//! described by a vector of row indices drawn uniformly with replacement.

use rand::Rng;

/// Draw `out.len()` row indices uniformly with replacement from
/// `0..pool_size`, writing them into an existing buffer.
///
/// Writing into a preallocated buffer keeps the bootstrap loop free of
/// allocations; the caller reuses one index buffer across all B resamples.
///
/// # Panics
///
/// Panics if `pool_size` is zero.
pub fn resample_indices_into<R: Rng>(pool_size: usize, rng: &mut R, out: &mut [usize]) {
    assert!(pool_size > 0, "cannot resample from an empty pool");
    for slot in out.iter_mut() {
        *slot = rng.random_range(0..pool_size);
    }
}
