//! High-level API for ReliefF feature ranking.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring a ranking run and a runner that applies the
//! configuration to data.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; data
//!   is validated when `.fit()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RelieffBuilder`] via `Relieff::new()`.
//! 2. Chain configuration methods (`.neighbors()`, `.sample_count()`, etc.).
//! 3. Call `.build()` to obtain a [`RelieffRunner`].
//! 4. Call `.fit(&x, &y, &mut rng)` or `.fit_seeded(&x, &y, seed)`.

use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::executor::{RelieffConfig, RelieffExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::priors::Prior;
pub use crate::algorithms::regression::{Degeneracy, WeightStatus};
pub use crate::engine::executor::SampleCount;
pub use crate::engine::output::RelieffResult;
pub use crate::primitives::errors::{ErrorKind, RelieffError};
pub use crate::primitives::outcome::{Mode, Outcome};

/// Fluent builder for configuring a ReliefF ranking run.
#[derive(Debug, Clone)]
pub struct RelieffBuilder<T> {
    /// Number of attributes per row (default: 1).
    pub dimensions: Option<usize>,

    /// Neighbor count K (default: 10).
    pub neighbors: Option<f64>,

    /// Mode override.
    pub mode: Option<Mode>,

    /// Class prior (classification only).
    pub prior: Option<Prior<T>>,

    /// Number of sampled observations (default: all).
    pub sample_count: Option<SampleCount>,

    /// Treat attributes as category codes.
    pub categorical_attributes: Option<bool>,

    /// Rank-decay kernel width.
    pub kernel_width: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RelieffBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RelieffBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            dimensions: None,
            neighbors: None,
            mode: None,
            prior: None,
            sample_count: None,
            categorical_attributes: None,
            kernel_width: None,
            duplicate_param: None,
        }
    }

    /// Set the number of attributes per row.
    pub fn dimensions(mut self, dims: usize) -> Self {
        if self.dimensions.is_some() {
            self.duplicate_param = Some("dimensions");
        }
        self.dimensions = Some(dims);
        self
    }

    /// Set the neighbor count K. Fractional values are rounded up.
    pub fn neighbors<K: Into<f64>>(mut self, k: K) -> Self {
        if self.neighbors.is_some() {
            self.duplicate_param = Some("neighbors");
        }
        self.neighbors = Some(k.into());
        self
    }

    /// Force classification or regression.
    pub fn mode(mut self, mode: Mode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the class prior.
    pub fn prior(mut self, prior: Prior<T>) -> Self {
        if self.prior.is_some() {
            self.duplicate_param = Some("prior");
        }
        self.prior = Some(prior);
        self
    }

    /// Set the number of sampled observations.
    pub fn sample_count<S: Into<SampleCount>>(mut self, count: S) -> Self {
        if self.sample_count.is_some() {
            self.duplicate_param = Some("sample_count");
        }
        self.sample_count = Some(count.into());
        self
    }

    /// Treat every attribute as category codes.
    pub fn categorical_attributes(mut self, categorical: bool) -> Self {
        if self.categorical_attributes.is_some() {
            self.duplicate_param = Some("categorical_attributes");
        }
        self.categorical_attributes = Some(categorical);
        self
    }

    /// Set the rank-decay kernel width (`inf` disables decay).
    pub fn kernel_width(mut self, sigma: T) -> Self {
        if self.kernel_width.is_some() {
            self.duplicate_param = Some("kernel_width");
        }
        self.kernel_width = Some(sigma);
        self
    }

    /// Validate the configuration and build a runner.
    pub fn build(self) -> Result<RelieffRunner<T>, RelieffError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = RelieffConfig {
            dimensions: self.dimensions.unwrap_or(1),
            neighbors: self.neighbors.unwrap_or(RelieffExecutor::DEFAULT_NEIGHBORS),
            mode: self.mode,
            prior: self.prior,
            sample_count: self.sample_count.unwrap_or_default(),
            categorical_attributes: self.categorical_attributes.unwrap_or(false),
            kernel_width: self.kernel_width,
        };

        if config.dimensions == 0 {
            return Err(RelieffError::InvalidDimensions(0));
        }
        Validator::validate_neighbors(config.neighbors)?;
        Validator::validate_sample_count(config.sample_count)?;
        if let Some(sigma) = config.kernel_width {
            Validator::validate_kernel_width(sigma)?;
        }
        if let Some(mode) = config.mode {
            Validator::validate_prior_mode(mode, config.prior.is_some())?;
        }

        Ok(RelieffRunner { config })
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Configured ReliefF ranking run.
#[derive(Debug, Clone)]
pub struct RelieffRunner<T> {
    config: RelieffConfig<T>,
}

impl<T: Float> RelieffRunner<T> {
    /// The validated configuration.
    pub fn config(&self) -> &RelieffConfig<T> {
        &self.config
    }

    /// Rank the attributes of the row-major matrix `x` against `y`.
    pub fn fit<R: Rng + ?Sized>(
        &self,
        x: &[T],
        y: &Outcome<T>,
        rng: &mut R,
    ) -> Result<RelieffResult<T>, RelieffError> {
        RelieffExecutor::run_with_config(x, y, &self.config, rng)
    }

    /// Rank with a generator seeded from `seed`, for reproducible runs.
    pub fn fit_seeded(
        &self,
        x: &[T],
        y: &Outcome<T>,
        seed: u64,
    ) -> Result<RelieffResult<T>, RelieffError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.fit(x, y, &mut rng)
    }
}

/// Rank the attributes of `x` against `y` with default settings.
pub fn rank_features<T: Float, R: Rng + ?Sized>(
    x: &[T],
    dimensions: usize,
    y: &Outcome<T>,
    rng: &mut R,
) -> Result<RelieffResult<T>, RelieffError> {
    RelieffBuilder::new()
        .dimensions(dimensions)
        .build()?
        .fit(x, y, rng)
}
