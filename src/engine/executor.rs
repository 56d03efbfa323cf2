//! Execution engine for ReliefF ranking runs.
//!
//! ## Purpose
//!
//! This module orchestrates a ranking run: it prepares the data, draws the
//! observations to sample, dispatches to the classification or regression
//! engine, and maps the weights back to original attribute positions.
//!
//! ## Design notes
//!
//! * **Configuration payload**: [`RelieffConfig`] carries every setting, so
//!   the builder and direct callers share one entry point.
//! * **Injected randomness**: The caller owns the random generator. Sampling
//!   every observation consumes no randomness.
//! * **Early exit**: When every attribute is constant, no neighbor index is
//!   built and the identity ranking is returned.
//!
//! ## Key concepts
//!
//! * **Draws**: The prepared row numbers visited by the sampling loop,
//!   uniform without replacement.
//!
//! ## Non-goals
//!
//! * This module does not parse or format results (see `output`).

use num_traits::Float;
use rand::Rng;
use tracing::{debug, warn};

use crate::algorithms::classification::ClassificationEngine;
use crate::algorithms::context::RelieffContext;
use crate::algorithms::priors::Prior;
use crate::algorithms::ranking::Ranker;
use crate::algorithms::regression::{RegressionEngine, WeightStatus};
use crate::engine::output::RelieffResult;
use crate::engine::preprocess::{PreparedData, PreparedTarget, Preprocessor};
use crate::primitives::errors::RelieffError;
use crate::primitives::outcome::{Mode, Outcome};

// ============================================================================
// Sample Count
// ============================================================================

/// Number of observations sampled by the ReliefF loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SampleCount {
    /// Visit every observation once, in order.
    #[default]
    All,

    /// Draw this many observations (rounded up, capped at the observation count).
    Count(f64),
}

impl SampleCount {
    /// Number of draws for `n_obs` observations.
    pub fn resolve(&self, n_obs: usize) -> usize {
        match *self {
            SampleCount::All => n_obs,
            SampleCount::Count(m) => {
                let requested = m.ceil();
                if requested >= n_obs as f64 {
                    if requested > n_obs as f64 {
                        warn!(
                            requested,
                            observations = n_obs,
                            "sample count exceeds observations; using all"
                        );
                    }
                    n_obs
                } else {
                    requested as usize
                }
            }
        }
    }
}

impl From<usize> for SampleCount {
    fn from(m: usize) -> Self {
        SampleCount::Count(m as f64)
    }
}

impl From<u32> for SampleCount {
    fn from(m: u32) -> Self {
        SampleCount::Count(f64::from(m))
    }
}

impl From<i32> for SampleCount {
    fn from(m: i32) -> Self {
        SampleCount::Count(f64::from(m))
    }
}

impl From<f64> for SampleCount {
    fn from(m: f64) -> Self {
        SampleCount::Count(m)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a ReliefF run.
#[derive(Debug, Clone, PartialEq)]
pub struct RelieffConfig<T> {
    /// Number of attributes per row.
    pub dimensions: usize,

    /// Neighbor count K (rounded up).
    pub neighbors: f64,

    /// Mode override. `None` infers the mode from the outcome type.
    pub mode: Option<Mode>,

    /// Class prior (classification only).
    pub prior: Option<Prior<T>>,

    /// Number of sampled observations.
    pub sample_count: SampleCount,

    /// Treat every attribute as categorical codes.
    pub categorical_attributes: bool,

    /// Rank-decay kernel width. `None` picks the default for the mode.
    pub kernel_width: Option<T>,
}

impl<T: Float> Default for RelieffConfig<T> {
    fn default() -> Self {
        Self {
            dimensions: 1,
            neighbors: RelieffExecutor::DEFAULT_NEIGHBORS,
            mode: None,
            prior: None,
            sample_count: SampleCount::All,
            categorical_attributes: false,
            kernel_width: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for ReliefF ranking runs.
pub struct RelieffExecutor;

impl RelieffExecutor {
    /// Default neighbor count K.
    pub const DEFAULT_NEIGHBORS: f64 = 10.0;

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Rank the attributes of `x` against `y` using a `RelieffConfig` payload.
    pub fn run_with_config<T, R>(
        x: &[T],
        y: &Outcome<T>,
        config: &RelieffConfig<T>,
        rng: &mut R,
    ) -> Result<RelieffResult<T>, RelieffError>
    where
        T: Float,
        R: Rng + ?Sized,
    {
        let prepared = Preprocessor::prepare(x, y, config)?;
        Ok(Self::run_prepared(prepared, rng))
    }

    /// Run the sampling loop on already prepared data.
    pub fn run_prepared<T, R>(prepared: PreparedData<T>, rng: &mut R) -> RelieffResult<T>
    where
        T: Float,
        R: Rng + ?Sized,
    {
        let n_attributes = prepared.n_attributes;

        if prepared.accepted.is_empty() {
            debug!(
                attributes = n_attributes,
                "every attribute is constant; returning identity ranking"
            );
            let ranked = Ranker::identity(n_attributes);
            return RelieffResult::from_parts(prepared, ranked, WeightStatus::Valid, 0);
        }

        let draws = Self::draw_observations(prepared.n_obs, prepared.num_updates, rng);
        let ctx = RelieffContext {
            x: &prepared.x,
            dims: prepared.accepted.len(),
            neighbors: prepared.neighbors,
            kernel: prepared.kernel,
            metric: prepared.metric,
        };

        let (accepted_weights, status) = match &prepared.target {
            PreparedTarget::Classes {
                membership,
                probabilities,
            } => (
                ClassificationEngine::run(&ctx, membership, probabilities, &draws),
                WeightStatus::Valid,
            ),
            PreparedTarget::Numeric(values) => {
                let scaled = RegressionEngine::scale_outcome(values);
                RegressionEngine::run(&ctx, &scaled, &draws)
            }
        };

        let ranked = Ranker::rank(
            &accepted_weights,
            &prepared.accepted,
            &prepared.rejected,
            n_attributes,
        );

        debug!(
            mode = %prepared.mode,
            updates = draws.len(),
            status = %status,
            "ranking finished"
        );

        RelieffResult::from_parts(prepared, ranked, status, draws.len())
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Row numbers to visit, uniform without replacement.
    ///
    /// Drawing every observation returns `0..n_obs` without touching `rng`.
    pub fn draw_observations<R: Rng + ?Sized>(
        n_obs: usize,
        num_updates: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        if num_updates >= n_obs {
            return (0..n_obs).collect();
        }
        rand::seq::index::sample(rng, n_obs, num_updates).into_vec()
    }
}
