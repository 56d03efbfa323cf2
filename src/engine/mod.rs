//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer drives a ranking run end to end:
//! - Input validation
//! - Row filtering, class purging and attribute scaling
//! - Dispatch to the sampling engines
//! - Result assembly
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Row filtering and attribute preparation.
pub mod preprocess;

/// Run orchestration.
pub mod executor;

/// Ranking result type.
pub mod output;
