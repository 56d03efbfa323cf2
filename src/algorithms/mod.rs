//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the ReliefF estimators themselves:
//! - Neighbor indices over prepared rows
//! - Class priors for miss weighting
//! - The classification and regression sampling engines
//! - Final ranking of attributes by weight
//!
//! Everything here works on already prepared data; validation and filtering
//! live in the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-class and global neighbor indices.
pub mod neighbors;

/// Class prior choices and normalization.
pub mod priors;

/// Borrowed view shared by both engines.
pub mod context;

/// Hit/miss ReliefF for categorical outcomes.
pub mod classification;

/// RReliefF for continuous outcomes.
pub mod regression;

/// Attribute ordering by weight.
pub mod ranking;
