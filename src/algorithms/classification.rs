//! ReliefF weighting for categorical outcomes.
//!
//! ## Purpose
//!
//! For each sampled observation, this engine compares it with its nearest
//! same-class neighbors (hits) and its nearest neighbors from every other
//! class (misses). Attributes that differ more across classes than within a
//! class gain weight.
//!
//! ## Design notes
//!
//! * **Per-class indices**: Hits and misses are found with one index per
//!   class, so a query never needs to filter by label.
//! * **Fixed accumulation order**: Draws, classes and attributes are visited
//!   in a fixed order, so identical draws give bit-identical weights.
//! * **Positional self match**: The hit query asks for one extra neighbor and
//!   drops the nearest. That entry is the sampled observation or a duplicate
//!   of it, and both are zero distance in every attribute, so which one is
//!   dropped never changes the weights.
//!
//! ## Key concepts
//!
//! * **diffHit(a)**: Rank-weighted mean distance in attribute `a` to the hits.
//! * **diffMiss(a)**: For each foreign class, the rank-weighted mean distance
//!   to its misses times the class probability, summed and divided by the
//!   total probability of the foreign classes, i.e. `P(C) / (1 - P(class(r)))`.
//! * **Update**: `w(a) += (diffMiss(a) - diffHit(a)) / m` for `m` draws.
//!
//! ## Invariants
//!
//! * With attributes scaled to unit range, weights lie in [-1, 1].
//!
//! ## Non-goals
//!
//! * This module does not draw observations; the caller supplies the draws.

use num_traits::Float;
use tracing::{debug, warn};

use crate::algorithms::context::RelieffContext;
use crate::algorithms::neighbors::NeighborIndex;
use crate::primitives::buffer::RelieffBuffer;
use crate::primitives::outcome::ClassMembership;

// ============================================================================
// Classification Engine
// ============================================================================

/// Hit/miss ReliefF engine.
pub struct ClassificationEngine;

impl ClassificationEngine {
    /// Compute attribute weights from the given draws.
    ///
    /// `probabilities[c]` is the normalized prior of class `c`.
    pub fn run<T: Float>(
        ctx: &RelieffContext<'_, T>,
        membership: &ClassMembership,
        probabilities: &[T],
        draws: &[usize],
    ) -> Vec<T> {
        let dims = ctx.dims;
        let mut weights = vec![T::zero(); dims];
        if draws.is_empty() {
            return weights;
        }

        if membership.n_classes() < 2 {
            warn!(
                classes = membership.n_classes(),
                "only one class present; weights reflect hits only"
            );
        }

        let indices = NeighborIndex::per_class(ctx.x, dims, membership, ctx.metric);
        let largest_class = membership.members.iter().map(Vec::len).max().unwrap_or(0);
        let mut buffer = RelieffBuffer::new(ctx.neighbors.min(largest_class), dims);
        let num_updates = T::from(draws.len()).unwrap_or_else(T::one);

        debug!(
            draws = draws.len(),
            classes = membership.n_classes(),
            attributes = dims,
            neighbors = ctx.neighbors,
            "running classification ReliefF"
        );

        for &r in draws {
            let point = ctx.row(r);
            let class = membership.class_of[r];

            // Hits
            buffer.diff_hit.reset(dims, T::zero());
            let n_hits = membership
                .class_size(class)
                .saturating_sub(1)
                .min(ctx.neighbors);
            if n_hits > 0 {
                indices[class].query(point, n_hits + 1, &mut buffer);
                buffer.neighborhood.remove(0);
                ctx.add_weighted_diffs(
                    point,
                    &buffer.neighborhood.indices,
                    &mut buffer.rank_weights,
                    &mut buffer.diff_hit,
                );
            }

            // Misses
            buffer.diff_miss.reset(dims, T::zero());
            let mut miss_probability = T::zero();
            for (other, index) in indices.iter().enumerate() {
                if other == class || index.is_empty() {
                    continue;
                }
                let n_misses = index.len().min(ctx.neighbors);
                index.query(point, n_misses, &mut buffer);

                buffer.diff_class.reset(dims, T::zero());
                ctx.add_weighted_diffs(
                    point,
                    &buffer.neighborhood.indices,
                    &mut buffer.rank_weights,
                    &mut buffer.diff_class,
                );

                let p = probabilities[other];
                for (miss, &d) in buffer.diff_miss.iter_mut().zip(buffer.diff_class.iter()) {
                    *miss = *miss + p * d;
                }
                miss_probability = miss_probability + p;
            }

            if miss_probability > T::zero() {
                for miss in buffer.diff_miss.iter_mut() {
                    *miss = *miss / miss_probability;
                }
            }

            for ((w, &miss), &hit) in weights
                .iter_mut()
                .zip(buffer.diff_miss.iter())
                .zip(buffer.diff_hit.iter())
            {
                *w = *w + (miss - hit) / num_updates;
            }
        }

        weights
    }
}
