//! KD-Tree for exact k-nearest neighbor search over attribute rows.
//!
//! ## Purpose
//!
//! This module implements a KD-tree so that the hit, miss and neighbor
//! queries issued for every sampled observation do not scan the whole
//! dataset.
//!
//! ## Design notes
//!
//! * **Static Construction**: The tree is built once per ranking call and then only queried.
//! * **Eytzinger Layout**: Tree nodes are stored in a left-complete binary tree (array) layout for cache locality.
//! * **Implicit Axis**: The split axis of a node is its depth modulo the dimensionality, so traversal only tracks node indices.
//! * **Trait-based Distance**: Any metric that can bound its distance from a single coordinate works.
//!
//! ## Key concepts
//!
//! * **Splitting Plane**: The dimension and value used to split points at each node.
//! * **Implicit Navigation**: Child nodes are accessed via arithmetic ($2i+1$, $2i+2$) rather than pointers.
//! * **Pruning**: Skipping branches whose lower distance bound exceeds the current k-th distance.
//! * **Canonical Ties**: Candidates are ordered by `(distance, index)`, so equal distances resolve to the lower point index.
//!
//! ## Invariants
//!
//! * Queries return the exact `k` smallest `(distance, index)` pairs.
//! * Results are sorted nearest first.
//!
//! ## Non-goals
//!
//! * This module does not support dynamic insertions or deletions.
//! * This module does not support approximate nearest neighbor search.

use core::cmp::Ordering::{self, Equal};
use num_traits::Float;

use crate::primitives::buffer::NeighborhoodSearchBuffer;

// ============================================================================
// Helper Types
// ============================================================================

/// Candidate neighbor in the max-heap used during search.
///
/// Orders by distance (the second field), then by point index.
#[derive(Debug, Clone, Copy)]
pub struct NodeDistance<T>(pub usize, pub T);

impl<T: PartialOrd> PartialEq for NodeDistance<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Equal
    }
}
impl<T: PartialOrd> Eq for NodeDistance<T> {}

impl<T: PartialOrd> PartialOrd for NodeDistance<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> Ord for NodeDistance<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1
            .partial_cmp(&other.1)
            .unwrap_or(Equal)
            .then(self.0.cmp(&other.0))
    }
}

/// Distance used to order and prune KD-tree candidates.
pub trait PointDistance<T: Float> {
    /// Aggregate distance between two points.
    fn distance(&self, a: &[T], b: &[T]) -> T;

    /// Lower bound on the distance to any point lying across a splitting
    /// plane at `split_val` from a query coordinate `query_val`.
    fn split_lower_bound(&self, split_val: T, query_val: T) -> T;
}

// ============================================================================
// Neighborhood Structure
// ============================================================================

/// Result container for k-nearest neighbor search.
#[derive(Debug, Clone)]
pub struct Neighborhood<T> {
    /// Indices of the nearest neighbors, nearest first.
    pub indices: Vec<usize>,
    /// Distances to each neighbor (corresponding to indices).
    pub distances: Vec<T>,
    /// Distance to the farthest returned neighbor.
    pub max_distance: T,
}

impl<T: Float> Neighborhood<T> {
    /// Create a new empty neighborhood.
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
            distances: Vec::new(),
            max_distance: T::zero(),
        }
    }

    /// Pre-allocate buffers for a neighborhood of size k.
    pub fn with_capacity(k: usize) -> Self {
        Self {
            indices: Vec::with_capacity(k),
            distances: Vec::with_capacity(k),
            max_distance: T::zero(),
        }
    }

    /// Returns the number of neighbors currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no neighbors are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Remove all neighbors.
    #[inline]
    pub fn clear(&mut self) {
        self.indices.clear();
        self.distances.clear();
        self.max_distance = T::zero();
    }

    /// Remove the neighbor at `position`, keeping the order of the others.
    pub fn remove(&mut self, position: usize) {
        self.indices.remove(position);
        self.distances.remove(position);
        self.max_distance = self.distances.last().copied().unwrap_or(T::zero());
    }

    /// Keep only the `len` nearest neighbors.
    pub fn truncate(&mut self, len: usize) {
        self.indices.truncate(len);
        self.distances.truncate(len);
        self.max_distance = self.distances.last().copied().unwrap_or(T::zero());
    }
}

impl<T: Float> Default for Neighborhood<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// KD-Tree Implementation
// ============================================================================

/// Node of the Eytzinger-ordered tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct KDNode {
    /// Index of the point in the original flattened data array.
    pub index: usize,
}

/// KD-tree for spatial indexing of nD points.
#[derive(Debug, Clone)]
pub struct KDTree<T: Float> {
    /// The implicit Eytzinger tree nodes.
    nodes: Vec<KDNode>,
    /// Permuted points aligned with the nodes for cache locality.
    points: Vec<T>,
    /// Dimensionality of the data.
    dimensions: usize,
}

impl<T: Float> KDTree<T> {
    // ------------------------------------------------------------------------
    // Public API
    // ------------------------------------------------------------------------

    /// Build a KD-tree from a flattened row-major data array.
    pub fn new(points: &[T], dimensions: usize) -> Self {
        let n = if dimensions == 0 {
            0
        } else {
            points.len() / dimensions
        };
        let mut indices: Vec<usize> = (0..n).collect();

        // Eytzinger layout requires the vector to be full size to allow access during build.
        let mut nodes = vec![KDNode::default(); n];
        let mut permuted_points = vec![T::zero(); n * dimensions];

        if n > 0 {
            Self::build_recursive(
                points,
                dimensions,
                &mut indices,
                0,
                &mut nodes,
                &mut permuted_points,
                0,
            );
        }

        Self {
            nodes,
            points: permuted_points,
            dimensions,
        }
    }

    /// Number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dimensionality of the indexed points.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Search for the k nearest neighbors of `query`.
    ///
    /// Results are written to `neighborhood` sorted nearest first. If the
    /// tree holds fewer than `k` points, all are returned.
    pub fn find_k_nearest<D: PointDistance<T>>(
        &self,
        query: &[T],
        k: usize,
        dist_calc: &D,
        buffer: &mut NeighborhoodSearchBuffer<NodeDistance<T>>,
        neighborhood: &mut Neighborhood<T>,
    ) {
        neighborhood.clear();
        if k == 0 || self.nodes.is_empty() {
            return;
        }

        buffer.clear();
        self.search_iterative(query, k, dist_calc, buffer);

        // The max-heap pops farthest first.
        while let Some(NodeDistance(idx, dist)) = buffer.heap.pop() {
            neighborhood.indices.push(idx);
            neighborhood.distances.push(dist);
        }
        neighborhood.indices.reverse();
        neighborhood.distances.reverse();
        neighborhood.max_distance = neighborhood.distances.last().copied().unwrap_or(T::zero());
    }

    // ------------------------------------------------------------------------
    // Private Helpers & Algorithms
    // ------------------------------------------------------------------------

    /// Recursively builds the tree in Eytzinger layout.
    fn build_recursive(
        points: &[T],
        dims: usize,
        indices: &mut [usize],
        depth: usize,
        nodes: &mut [KDNode],
        permuted_points: &mut [T],
        curr_idx: usize,
    ) {
        if indices.is_empty() {
            return;
        }

        let axis = depth % dims;
        let n = indices.len();

        // Pivot rank for a left-complete tree keeps the Eytzinger property
        let median_idx = Self::calculate_left_subtree_size(n);

        if median_idx < n {
            indices.select_nth_unstable_by(median_idx, |&a, &b| {
                points[a * dims + axis]
                    .partial_cmp(&points[b * dims + axis])
                    .unwrap_or(Equal)
            });
        }

        let point_idx = indices[median_idx];
        nodes[curr_idx] = KDNode { index: point_idx };

        let src_start = point_idx * dims;
        let dest_start = curr_idx * dims;
        permuted_points[dest_start..dest_start + dims]
            .copy_from_slice(&points[src_start..src_start + dims]);

        let (left_part, right_part_with_median) = indices.split_at_mut(median_idx);
        let right_part = &mut right_part_with_median[1..];

        Self::build_recursive(
            points,
            dims,
            left_part,
            depth + 1,
            nodes,
            permuted_points,
            2 * curr_idx + 1,
        );
        Self::build_recursive(
            points,
            dims,
            right_part,
            depth + 1,
            nodes,
            permuted_points,
            2 * curr_idx + 2,
        );
    }

    /// Iterative search using an explicit stack for traversal.
    fn search_iterative<D: PointDistance<T>>(
        &self,
        query: &[T],
        k: usize,
        dist_calc: &D,
        buffer: &mut NeighborhoodSearchBuffer<NodeDistance<T>>,
    ) {
        let d = self.dimensions;
        let heap = &mut buffer.heap;
        let stack = &mut buffer.stack;
        let nodes_len = self.nodes.len();

        stack.push(0);

        while let Some(node_idx) = stack.pop() {
            let node = self.nodes[node_idx];
            let offset = node_idx * d;
            let node_point = &self.points[offset..offset + d];

            // 1. Offer the current node
            let candidate = NodeDistance(node.index, dist_calc.distance(query, node_point));
            if heap.len() < k {
                heap.push(candidate);
            } else if let Some(mut top) = heap.peek_mut() {
                if candidate < *top {
                    *top = candidate;
                }
            }

            // 2. Leaf check: implicit left child is at 2*i + 1
            let left_child = 2 * node_idx + 1;
            if left_child >= nodes_len {
                continue;
            }
            let right_child = left_child + 1;
            let has_right = right_child < nodes_len;

            let axis = Self::depth_of(node_idx) % d;
            let split_val = node_point[axis];
            let query_on_left = query[axis] <= split_val;

            let (near, far, has_near, has_far) = if query_on_left {
                (left_child, right_child, true, has_right)
            } else {
                (right_child, left_child, has_right, true)
            };

            // 3. Far side only if it can hold a point at least as close as the current k-th
            if has_far {
                let bound = dist_calc.split_lower_bound(split_val, query[axis]);
                let worst = heap.peek().map(|nd| nd.1);
                match worst {
                    Some(w) if heap.len() >= k && bound > w => {}
                    _ => stack.push(far),
                }
            }

            // 4. Near side is explored first
            if has_near {
                stack.push(near);
            }
        }
    }

    /// Depth of a node in the implicit tree.
    #[inline]
    fn depth_of(node_idx: usize) -> usize {
        (usize::BITS - 1 - (node_idx + 1).leading_zeros()) as usize
    }

    /// Calculate number of nodes in the left subtree of a left-complete binary tree of size N.
    pub fn calculate_left_subtree_size(n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        // Height: H = floor(log2(n))
        let h = (usize::BITS - n.leading_zeros() - 1) as usize;
        if h == 0 {
            return 0;
        }

        let max_leaf_capacity = 1 << h;

        // Nodes in the last level
        let total_nodes_above_leaf = max_leaf_capacity - 1;
        let r = n - total_nodes_above_leaf;

        // Left subtree gets the filled portion of the last level
        let left_part_leaves = r.min(max_leaf_capacity / 2);

        let left_subtree_capacity_full = (max_leaf_capacity / 2) - 1;
        left_subtree_capacity_full + left_part_leaves
    }
}
