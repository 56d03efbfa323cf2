//! Rank-decay kernel for neighbor weighting.
//!
//! ## Purpose
//!
//! ReliefF averages per-attribute distances over an ordered list of
//! neighbors. This module computes the weight of each rank: nearer neighbors
//! count more when the kernel width is finite, and all ranks count equally
//! when it is infinite.
//!
//! ## Key concepts
//!
//! * **Rank weight**: `w_i = exp(-(i / sigma)^2)` for 1-based rank `i`,
//!   renormalized so the weights of one neighbor list sum to 1.
//! * **No decay**: `sigma = +inf` gives `1 / L` to each of `L` ranks.
//!
//! ## Invariants
//!
//! * Weights are non-negative, non-increasing in rank, and sum to 1 for
//!   any non-empty list.

use num_traits::Float;

// ============================================================================
// Rank Decay
// ============================================================================

/// Gaussian-shaped rank-decay kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankDecay<T> {
    sigma: T,
}

impl<T: Float> RankDecay<T> {
    /// Default kernel width for regression.
    pub const DEFAULT_REGRESSION_WIDTH: f64 = 50.0;

    /// Create a kernel with width `sigma` (`+inf` disables decay).
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }

    /// Kernel that weights every rank equally.
    pub fn uniform() -> Self {
        Self::new(T::infinity())
    }

    /// Kernel width.
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Fill `out` with the normalized weights of ranks `1..=len`.
    ///
    /// When every raw weight underflows to zero, all mass is put on the
    /// first rank, which is the limit of the kernel as `sigma` shrinks.
    pub fn fill_weights(&self, len: usize, out: &mut Vec<T>) {
        out.clear();
        if len == 0 {
            return;
        }

        let mut total = T::zero();
        for i in 1..=len {
            let ratio = T::from(i).unwrap_or_else(T::max_value) / self.sigma;
            let w = (-(ratio * ratio)).exp();
            total = total + w;
            out.push(w);
        }

        if total > T::zero() {
            for w in out.iter_mut() {
                *w = *w / total;
            }
        } else {
            out.iter_mut().for_each(|w| *w = T::zero());
            out[0] = T::one();
        }
    }

    /// Normalized weights of ranks `1..=len`.
    pub fn weights(&self, len: usize) -> Vec<T> {
        let mut out = Vec::with_capacity(len);
        self.fill_weights(len, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_width_is_uniform() {
        let w = RankDecay::<f64>::uniform().weights(4);
        assert!(w.iter().all(|&x| (x - 0.25).abs() < 1e-15));
    }

    #[test]
    fn test_tiny_width_collapses_to_first_rank() {
        let w = RankDecay::new(1e-3f64).weights(3);
        assert_eq!(w, vec![1.0, 0.0, 0.0]);
    }
}
