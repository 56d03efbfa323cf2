//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numeric building blocks of ReliefF:
//! - Per-attribute and aggregate distances
//! - The rank-decay kernel for neighbor weighting
//! - KD-tree k-nearest search
//!
//! These are reusable building blocks with no ReliefF-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Attribute distance conventions and range helpers.
pub mod distance;

/// Rank-decay kernel.
pub mod kernel;

/// KD-tree neighbor search.
pub mod neighborhood;
