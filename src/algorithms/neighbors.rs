//! Neighbor search structures for the ReliefF engines.
//!
//! ## Purpose
//!
//! This module wraps a [`KDTree`] over a subset of the prepared attribute
//! rows and answers "the `count` nearest rows to this point" in terms of the
//! prepared row numbering. Classification builds one index per class;
//! regression builds a single global index.
//!
//! ## Design notes
//!
//! * **Read-only**: An index is built once per ranking call from an immutable
//!   matrix and dropped with the call.
//! * **Row mapping**: The tree numbers its own points; the index translates
//!   them back to prepared row numbers. Rows are kept ascending, so
//!   tie-breaking by tree index equals tie-breaking by row number.
//!
//! ## Invariants
//!
//! * Query results are sorted nearest first.
//! * A query never returns more rows than the index holds.

use num_traits::Float;

use crate::math::distance::AttributeDistance;
use crate::math::neighborhood::KDTree;
use crate::primitives::buffer::RelieffBuffer;
use crate::primitives::outcome::ClassMembership;

// ============================================================================
// Neighbor Index
// ============================================================================

/// K-nearest search over a subset of prepared rows.
#[derive(Debug, Clone)]
pub struct NeighborIndex<T: Float> {
    tree: KDTree<T>,
    rows: Vec<usize>,
    metric: AttributeDistance,
}

impl<T: Float> NeighborIndex<T> {
    /// Index the given rows (ascending) of a row-major matrix.
    pub fn build(x: &[T], dims: usize, rows: &[usize], metric: AttributeDistance) -> Self {
        let mut subset = Vec::with_capacity(rows.len() * dims);
        for &r in rows {
            subset.extend_from_slice(&x[r * dims..(r + 1) * dims]);
        }
        Self {
            tree: KDTree::new(&subset, dims),
            rows: rows.to_vec(),
            metric,
        }
    }

    /// Index every row of a row-major matrix.
    pub fn global(x: &[T], dims: usize, metric: AttributeDistance) -> Self {
        let rows: Vec<usize> = (0..x.len() / dims).collect();
        Self {
            tree: KDTree::new(x, dims),
            rows,
            metric,
        }
    }

    /// One index per class, built over that class's rows.
    pub fn per_class(
        x: &[T],
        dims: usize,
        membership: &ClassMembership,
        metric: AttributeDistance,
    ) -> Vec<Self> {
        membership
            .members
            .iter()
            .map(|rows| Self::build(x, dims, rows, metric))
            .collect()
    }

    /// Number of indexed rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the index holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the `count` nearest rows to `point`.
    ///
    /// Results land in `buffer.neighborhood` as prepared row numbers.
    pub fn query(&self, point: &[T], count: usize, buffer: &mut RelieffBuffer<T>) {
        self.tree.find_k_nearest(
            point,
            count,
            &self.metric,
            &mut buffer.search_buffer,
            &mut buffer.neighborhood,
        );
        for idx in buffer.neighborhood.indices.iter_mut() {
            *idx = self.rows[*idx];
        }
    }
}
