//! Final ordering of attributes by weight.
//!
//! ## Purpose
//!
//! This module maps the weights of the accepted attributes back to original
//! attribute positions and orders them from most to least important.
//! Rejected (constant) attributes trail the ranking in their original order
//! and carry `NaN` weights.
//!
//! ## Invariants
//!
//! * The ranking is a permutation of `0..n_attributes`.
//! * Equal weights keep ascending original index order.
//! * `NaN` weights sort after every finite weight.

use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Ranker
// ============================================================================

/// Ranking and its weights in original attribute positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    /// Attribute indices, most important first.
    pub ranking: Vec<usize>,
    /// Weight per original attribute position.
    pub weights: Vec<T>,
}

/// Orders attributes by descending weight.
pub struct Ranker;

impl Ranker {
    /// Rank accepted attributes by weight and append the rejected ones.
    ///
    /// `accepted_weights[i]` is the weight of attribute `accepted[i]`.
    pub fn rank<T: Float>(
        accepted_weights: &[T],
        accepted: &[usize],
        rejected: &[usize],
        n_attributes: usize,
    ) -> Ranked<T> {
        debug_assert_eq!(accepted_weights.len(), accepted.len());

        let mut weights = vec![T::nan(); n_attributes];
        for (&attr, &w) in accepted.iter().zip(accepted_weights.iter()) {
            weights[attr] = w;
        }

        let mut order: Vec<usize> = (0..accepted.len()).collect();
        order.sort_by(|&a, &b| {
            Self::descending(accepted_weights[a], accepted_weights[b])
                .then_with(|| accepted[a].cmp(&accepted[b]))
        });

        let mut ranking: Vec<usize> = order.into_iter().map(|i| accepted[i]).collect();
        ranking.extend_from_slice(rejected);

        Ranked { ranking, weights }
    }

    /// Identity ranking with every weight `NaN`.
    pub fn identity<T: Float>(n_attributes: usize) -> Ranked<T> {
        Ranked {
            ranking: (0..n_attributes).collect(),
            weights: vec![T::nan(); n_attributes],
        }
    }

    fn descending<T: Float>(a: T, b: T) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_weights_sort_last() {
        let ranked = Ranker::rank(&[f64::NAN, 0.2, 0.5], &[0, 1, 2], &[], 3);
        assert_eq!(ranked.ranking, vec![2, 1, 0]);
    }

    #[test]
    fn ties_keep_index_order() {
        let ranked = Ranker::rank(&[0.1, 0.3, 0.3], &[4, 1, 3], &[0, 2], 5);
        assert_eq!(ranked.ranking, vec![1, 3, 4, 0, 2]);
        assert!(ranked.weights[0].is_nan());
        assert!(ranked.weights[2].is_nan());
        assert_eq!(ranked.weights[4], 0.1);
    }
}
