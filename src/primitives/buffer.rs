//! Reusable scratch space for ReliefF sampling loops.
//!
//! ## Purpose
//!
//! This module provides the buffers reused across draws of the sampling loop
//! so that neighbor searches and per-attribute accumulation do not allocate
//! on every draw.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: [`RelieffBuffer`] holds all per-run scratch
//!   space and is passed explicitly through the engines.
//! * **Lazy Expansion**: Slots grow on demand and are never shrunk.
//!
//! ## Key concepts
//!
//! * **NeighborhoodSearchBuffer**: Heap and traversal stack for KD-tree queries.
//! * **Slot**: A vector that is logically cleared between draws.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared between draws, never deallocated.
//!
//! ## Non-goals
//!
//! * Buffers are not shared across threads or across ranking calls.

use std::collections::BinaryHeap;

use core::ops::{Deref, DerefMut};
use num_traits::Float;

use crate::math::neighborhood::{Neighborhood, NodeDistance};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T: Clone> Slot<T> {
    /// Clear the slot and refill it with `len` copies of `value`.
    #[inline]
    pub fn reset(&mut self, len: usize, value: T) {
        self.0.clear();
        self.0.resize(len, value);
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// Search Buffer
// ============================================================================

/// Persistent buffers for KD-tree search to avoid allocations.
#[derive(Debug)]
pub struct NeighborhoodSearchBuffer<N> {
    pub(crate) heap: BinaryHeap<N>,
    pub(crate) stack: Vec<usize>,
}

impl<N: Ord> NeighborhoodSearchBuffer<N> {
    /// Create a new search buffer with capacity k.
    pub fn new(k: usize) -> Self {
        // Stack depth is bounded by tree height.
        Self {
            heap: BinaryHeap::with_capacity(k),
            stack: Vec::with_capacity(32),
        }
    }

    /// Clear all internal buffers for reuse.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.stack.clear();
    }
}

// ============================================================================
// Main Workspace
// ============================================================================

/// Pre-allocated buffers for one ranking run.
#[derive(Debug)]
pub struct RelieffBuffer<T: Float> {
    /// KD-tree search state.
    pub search_buffer: NeighborhoodSearchBuffer<NodeDistance<T>>,
    /// Neighbors returned by the latest query.
    pub neighborhood: Neighborhood<T>,
    /// Rank-decay weights matching the latest neighborhood.
    pub rank_weights: Slot<T>,
    /// Per-attribute distance to hits (classification).
    pub diff_hit: Slot<T>,
    /// Per-attribute distance to misses (classification).
    pub diff_miss: Slot<T>,
    /// Per-attribute distance to one miss class (classification).
    pub diff_class: Slot<T>,
}

impl<T: Float> RelieffBuffer<T> {
    /// Create a workspace for queries of up to `k` neighbors over `dims` attributes.
    pub fn new(k: usize, dims: usize) -> Self {
        Self {
            search_buffer: NeighborhoodSearchBuffer::new(k + 1),
            neighborhood: Neighborhood::with_capacity(k + 1),
            rank_weights: Slot::new(k + 1),
            diff_hit: Slot::new(dims),
            diff_miss: Slot::new(dims),
            diff_class: Slot::new(dims),
        }
    }
}
