//! Shared inputs of the ReliefF sampling engines.
//!
//! ## Purpose
//!
//! Both engines read the same prepared matrix and search settings. This
//! module bundles them into one borrowed view so the engines stay independent
//! of how the data was prepared.
//!
//! ## Invariants
//!
//! * `x.len()` is a multiple of `dims`, and `dims > 0`.
//! * `neighbors > 0`.

use num_traits::Float;

use crate::math::distance::AttributeDistance;
use crate::math::kernel::RankDecay;

// ============================================================================
// Relieff Context
// ============================================================================

/// Borrowed view of the prepared data and search settings.
#[derive(Debug, Clone, Copy)]
pub struct RelieffContext<'a, T: Float> {
    /// Row-major matrix of accepted attributes.
    pub x: &'a [T],
    /// Number of accepted attributes per row.
    pub dims: usize,
    /// Requested neighbor count K.
    pub neighbors: usize,
    /// Rank-decay kernel.
    pub kernel: RankDecay<T>,
    /// Distance convention.
    pub metric: AttributeDistance,
}

impl<'a, T: Float> RelieffContext<'a, T> {
    /// Attribute values of row `r`.
    #[inline]
    pub fn row(&self, r: usize) -> &'a [T] {
        &self.x[r * self.dims..(r + 1) * self.dims]
    }

    /// Number of rows.
    #[inline]
    pub fn n_obs(&self) -> usize {
        self.x.len() / self.dims
    }

    /// Add the rank-weighted per-attribute distances between `point` and
    /// each row in `neighbors` to `out`.
    ///
    /// `rank_weights` is refilled for the neighbor count, so `out` receives a
    /// weighted mean per attribute.
    pub fn add_weighted_diffs(
        &self,
        point: &[T],
        neighbors: &[usize],
        rank_weights: &mut Vec<T>,
        out: &mut [T],
    ) {
        self.kernel.fill_weights(neighbors.len(), rank_weights);
        for (&row, &w) in neighbors.iter().zip(rank_weights.iter()) {
            let other = self.row(row);
            for ((acc, &a), &b) in out.iter_mut().zip(point.iter()).zip(other.iter()) {
                *acc = *acc + w * self.metric.diff(a, b);
            }
        }
    }
}
