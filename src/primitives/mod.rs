//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Fundamental types shared by every other layer: the error taxonomy, the
//! outcome representation with its class encoding, and reusable buffers.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Reusable scratch buffers.
pub mod buffer;

/// Error types.
pub mod errors;

/// Outcome type and class encoding.
pub mod outcome;
