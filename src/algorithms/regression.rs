//! RReliefF weighting for continuous outcomes.
//!
//! ## Purpose
//!
//! Regression has no hits or misses. Instead, for each sampled observation
//! and each of its nearest neighbors, this engine accumulates how often the
//! outcome differs (`NdC`), how often each attribute differs (`NdA`), and how
//! often both differ together (`NdAdC`). The weight estimates the difference
//! between `P(attribute differs | outcome differs)` and
//! `P(attribute differs | outcome agrees)`.
//!
//! ## Design notes
//!
//! * **Single index**: One global index over every prepared row.
//! * **Self removal**: Each query asks for one extra neighbor. The sampled
//!   row is dropped if returned, otherwise the farthest neighbor is dropped.
//! * **Fixed kernel**: Every query returns the same number of neighbors, so
//!   the rank weights are computed once.
//!
//! ## Key concepts
//!
//! * **Outcome scaling**: The outcome is centered and divided by its range so
//!   that `|y_r - y_n|` lies in [0, 1]. A constant outcome becomes all zeros.
//! * **Weight**: `NdAdC / NdC - (NdA - NdAdC) / (m - NdC)` for `m` draws.
//!
//! ## Invariants
//!
//! * A zero denominator is reported through [`WeightStatus::Degenerate`],
//!   never as an error and never as a silent division by zero.

use core::fmt;
use num_traits::Float;
use tracing::{debug, warn};

use crate::algorithms::context::RelieffContext;
use crate::algorithms::neighbors::NeighborIndex;
use crate::math::distance::AttributeDistance;
use crate::primitives::buffer::RelieffBuffer;

// ============================================================================
// Weight Status
// ============================================================================

/// Reason a regression run could not produce weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Neighbors never differ in outcome (`NdC = 0`).
    NoOutcomeDifference,

    /// Neighbors always differ maximally in outcome (`NdC = m`).
    NoOutcomeAgreement,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::NoOutcomeDifference => write!(f, "no outcome difference among neighbors"),
            Degeneracy::NoOutcomeAgreement => write!(f, "no outcome agreement among neighbors"),
        }
    }
}

/// Whether the attribute weights of a run are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightStatus {
    /// Weights are finite for every accepted attribute.
    #[default]
    Valid,

    /// The regression denominators vanished; every weight is `NaN`.
    Degenerate(Degeneracy),
}

impl WeightStatus {
    /// Returns true if the weights are meaningful.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, WeightStatus::Valid)
    }
}

impl fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightStatus::Valid => write!(f, "valid"),
            WeightStatus::Degenerate(reason) => write!(f, "degenerate ({})", reason),
        }
    }
}

// ============================================================================
// Regression Engine
// ============================================================================

/// Neighbor-decay RReliefF engine.
pub struct RegressionEngine;

impl RegressionEngine {
    /// Center `y` and divide by its range.
    ///
    /// A constant outcome maps to all zeros.
    pub fn scale_outcome<T: Float>(y: &[T]) -> Vec<T> {
        if y.is_empty() {
            return Vec::new();
        }

        let (min, max) = y.iter().fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
        if AttributeDistance::is_constant(min, max) {
            return vec![T::zero(); y.len()];
        }

        let n = T::from(y.len()).unwrap_or_else(T::one);
        let mean = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;
        let range = max - min;
        y.iter().map(|&v| (v - mean) / range).collect()
    }

    /// Compute attribute weights from the given draws.
    ///
    /// `outcome` must already be scaled with [`Self::scale_outcome`].
    pub fn run<T: Float>(
        ctx: &RelieffContext<'_, T>,
        outcome: &[T],
        draws: &[usize],
    ) -> (Vec<T>, WeightStatus) {
        let dims = ctx.dims;
        let n_obs = ctx.n_obs();
        let len_nei = n_obs.saturating_sub(1).min(ctx.neighbors);

        let index = NeighborIndex::global(ctx.x, dims, ctx.metric);
        let mut buffer = RelieffBuffer::new(len_nei, dims);
        let rank_weights = ctx.kernel.weights(len_nei);

        debug!(
            draws = draws.len(),
            attributes = dims,
            neighbors = len_nei,
            sigma = ctx.kernel.sigma().to_f64().unwrap_or(f64::NAN),
            "running regression ReliefF"
        );

        let mut nd_c = T::zero();
        let mut nd_a = vec![T::zero(); dims];
        let mut nd_adc = vec![T::zero(); dims];

        for &r in draws {
            let point = ctx.row(r);
            index.query(point, len_nei + 1, &mut buffer);

            match buffer.neighborhood.indices.iter().position(|&i| i == r) {
                Some(pos) => buffer.neighborhood.remove(pos),
                None => buffer.neighborhood.truncate(len_nei),
            }

            for (&n, &w) in buffer.neighborhood.indices.iter().zip(rank_weights.iter()) {
                let d_y = (outcome[r] - outcome[n]).abs();
                nd_c = nd_c + d_y * w;

                let other = ctx.row(n);
                for a in 0..dims {
                    let d_a = ctx.metric.diff(point[a], other[a]);
                    nd_a[a] = nd_a[a] + d_a * w;
                    nd_adc[a] = nd_adc[a] + d_a * d_y * w;
                }
            }
        }

        let m = T::from(draws.len()).unwrap_or_else(T::zero);
        let tolerance = T::epsilon() * m;
        let status = if nd_c <= tolerance {
            WeightStatus::Degenerate(Degeneracy::NoOutcomeDifference)
        } else if m - nd_c <= tolerance {
            WeightStatus::Degenerate(Degeneracy::NoOutcomeAgreement)
        } else {
            WeightStatus::Valid
        };

        if let WeightStatus::Degenerate(reason) = status {
            warn!(
                %reason,
                draws = draws.len(),
                "regression weights are undefined; reporting NaN"
            );
            return (vec![T::nan(); dims], status);
        }

        let weights = nd_a
            .iter()
            .zip(nd_adc.iter())
            .map(|(&na, &nadc)| nadc / nd_c - (na - nadc) / (m - nd_c))
            .collect();

        (weights, status)
    }
}
