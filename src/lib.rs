//! # ReliefF: Instance-Based Feature Ranking for Rust
//!
//! A ReliefF implementation for ranking the attributes of a tabular dataset
//! by how well they separate observations with different outcomes, for both
//! categorical outcomes (classification) and continuous outcomes (regression).
//!
//! ## What is ReliefF?
//!
//! ReliefF estimates attribute quality from nearest neighbors. It samples
//! observations, finds their nearest neighbors, and rewards attributes whose
//! values differ between neighbors with different outcomes while penalizing
//! attributes whose values differ between neighbors with the same outcome.
//! Because neighbors are found in the full attribute space, ReliefF detects
//! attributes that only matter in interaction with others.
//!
//! **How ReliefF works:**
//!
//! 1. Drop rows with missing values and set constant attributes aside
//! 2. Scale continuous attributes to unit range
//! 3. For each sampled observation, find its K nearest neighbors
//!    - Classification: K hits from its own class, K misses from each other class
//!    - Regression: K neighbors overall, weighted by outcome difference
//! 4. Accumulate per-attribute differences, nearer neighbors weighted more
//! 5. Rank attributes by their final weight
//!
//! ## Quick Start
//!
//! ### Classification
//!
//! ```rust
//! use relieff_rs::prelude::*;
//!
//! // Four observations with two attributes each (row-major)
//! let x = vec![
//!     0.0, 0.0,
//!     0.0, 1.0,
//!     1.0, 0.0,
//!     1.0, 1.0,
//! ];
//! let y = Outcome::categorical(["A", "A", "B", "B"]);
//!
//! let model = Relieff::new()
//!     .dimensions(2)
//!     .neighbors(1)
//!     .build()?;
//!
//! let result = model.fit_seeded(&x, &y, 42)?;
//!
//! // Attribute 0 separates the classes perfectly
//! assert_eq!(result.ranking, vec![0, 1]);
//! println!("{}", result);
//! # Result::<(), RelieffError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Mode: classification
//!   Observations: 4
//!   Updates: 4
//!   Neighbors: 1
//!   Kernel width: inf
//!   Status: valid
//!
//! Classes:
//!   A            0.5000
//!   B            0.5000
//!
//! Ranking:
//!     Rank  Attribute       Weight
//!   ------------------------------
//!        1          0     1.000000
//!        2          1     0.000000
//! ```
//!
//! ### Regression
//!
//! A numeric outcome selects regression automatically.
//!
//! ```rust
//! use relieff_rs::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let x: Vec<f64> = (0..40)
//!     .flat_map(|i| [i as f64, ((i * 7) % 5) as f64])
//!     .collect();
//! let y = Outcome::numeric((0..40).map(|i| 2.0 * i as f64).collect());
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = Relieff::new()
//!     .dimensions(2)
//!     .neighbors(5)
//!     .sample_count(20)
//!     .build()?
//!     .fit(&x, &y, &mut rng)?;
//!
//! assert_eq!(result.mode, Regression);
//! assert_eq!(result.updates, 20);
//! # Result::<(), RelieffError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `fit` method returns a `Result<RelieffResult<T>, RelieffError>`.
//!
//! - **`Ok(RelieffResult<T>)`**: Contains the ranking, weights and run details.
//! - **`Err(RelieffError)`**: Indicates a failure (e.g., mismatched input
//!   lengths, too few complete rows, or a prior that does not match the classes).
//!
//! Every error is raised before sampling starts. [`RelieffError::kind`] maps
//! each error to one of four categories: invalid input, invalid mode,
//! insufficient data, or invalid prior.
//!
//! A regression run whose neighbors never differ in outcome has undefined
//! weights. This is not an error: the result carries
//! `WeightStatus::Degenerate`, every weight is `NaN`, and a warning is logged.
//!
//! ## Parameters
//!
//! | Parameter                  | Default                  | Range/Options                       | Description                               |
//! |----------------------------|--------------------------|-------------------------------------|-------------------------------------------|
//! | **dimensions**             | 1                        | [1, ∞)                              | Attributes per row                        |
//! | **neighbors**              | 10                       | (0, ∞), rounded up                  | Neighbor count K                          |
//! | **mode**                   | from outcome type        | `Classification`, `Regression`      | Force the ranking mode                    |
//! | **prior**                  | `Empirical`              | `Empirical`, `Uniform`, `ByName`, `Vector` | Class probabilities (classification) |
//! | **sample_count**           | `All`                    | `All` or (0, ∞), rounded up         | Number of sampled observations            |
//! | **categorical_attributes** | false                    | true/false                          | Compare attributes as category codes      |
//! | **kernel_width**           | 50 (regression), ∞ (classification) | (0, ∞]                   | Rank-decay width; ∞ weights ranks equally |
//!
//! ### Mode Selection
//!
//! | Outcome                          | Default          | Override                         |
//! |----------------------------------|------------------|----------------------------------|
//! | `Outcome::Numeric`               | `Regression`     | `Classification` allowed         |
//! | `Outcome::Categorical`/`boolean` | `Classification` | `Regression` is an error         |
//!
//! ### Missing Values
//!
//! Missing attribute values are `NaN`; missing categorical outcomes are
//! `None`. Rows containing any missing value are dropped before ranking and
//! counted in `RelieffResult::rows_dropped`.
//!
//! ### Logging
//!
//! The crate emits [`tracing`] events (`debug` for run summaries, `warn` for
//! degenerate runs and capped sample counts). It never installs a subscriber.
//!
//! ## References
//!
//! - Kononenko, I. (1994). "Estimating Attributes: Analysis and Extensions of RELIEF"
//! - Robnik-Šikonja, M. & Kononenko, I. (2003). "Theoretical and Empirical Analysis of ReliefF and RReliefF"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error taxonomy, the outcome type with its class encoding,
// and reusable search buffers.
mod primitives;

// Layer 2: Math - pure numeric building blocks.
//
// Contains attribute distances, the rank-decay kernel and the KD-tree.
mod math;

// Layer 3: Algorithms - core ReliefF estimators.
//
// Contains neighbor indices, class priors, the classification and
// regression engines, and the final ranking.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains validation, preprocessing, run dispatch and result assembly.
mod engine;

// High-level fluent API for ReliefF ranking.
//
// Provides the `Relieff` builder for configuring and running a ranking.
mod api;

pub use api::rank_features;

// ============================================================================
// Prelude
// ============================================================================

/// Standard ReliefF prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use relieff_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        rank_features, Degeneracy, ErrorKind,
        Mode::{self, Classification, Regression},
        Outcome,
        Prior::{self, Empirical, Uniform},
        RelieffBuilder as Relieff, RelieffError, RelieffResult, RelieffRunner,
        SampleCount::{self, All},
        WeightStatus,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
