//! Input preparation for ReliefF ranking runs.
//!
//! ## Purpose
//!
//! This module turns raw user input into the data the sampling engines
//! expect: complete rows only, constant attributes set aside, continuous
//! attributes rescaled, and class probabilities resolved.
//!
//! ## Design notes
//!
//! * **No mutation**: The caller's matrix is never modified. A new matrix
//!   holding only retained rows and accepted attributes is produced, together
//!   with index mappings back to the original positions.
//! * **Ordering**: Rows with missing values are dropped first, then classes
//!   with zero probability are purged, then attributes are screened.
//!
//! ## Key concepts
//!
//! * **Accepted attribute**: An attribute whose range exceeds the
//!   floating-point spacing at its maximum.
//! * **Scaling**: Continuous attributes are centered and divided by their
//!   range, so per-attribute distances lie in [0, 1].
//!
//! ## Invariants
//!
//! * `accepted` and `rejected` partition `0..n_attributes`, both ascending.
//! * `kept_rows` is ascending and has one entry per prepared row.
//! * Class probabilities are strictly positive and sum to 1.

use num_traits::Float;
use tracing::debug;

use crate::algorithms::priors::Prior;
use crate::engine::executor::RelieffConfig;
use crate::engine::validator::Validator;
use crate::math::distance::AttributeDistance;
use crate::math::kernel::RankDecay;
use crate::primitives::errors::RelieffError;
use crate::primitives::outcome::{ClassMembership, Mode, Outcome};

// ============================================================================
// Prepared Data
// ============================================================================

/// Outcome in the form the selected engine consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedTarget<T> {
    /// Class encoding and normalized class probabilities.
    Classes {
        /// Class of each prepared row.
        membership: ClassMembership,
        /// Probability of each class.
        probabilities: Vec<T>,
    },

    /// Raw numeric outcome of each prepared row.
    Numeric(Vec<T>),
}

/// Filtered, rescaled input ready for sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedData<T: Float> {
    /// Row-major matrix of accepted attributes over retained rows.
    pub x: Vec<T>,
    /// Number of retained rows.
    pub n_obs: usize,
    /// Number of attributes in the caller's matrix.
    pub n_attributes: usize,
    /// Original index of each accepted attribute.
    pub accepted: Vec<usize>,
    /// Original indices of constant attributes.
    pub rejected: Vec<usize>,
    /// Original index of each retained row.
    pub kept_rows: Vec<usize>,
    /// Rows dropped for missing values.
    pub rows_dropped: usize,
    /// Rows removed with zero-probability classes.
    pub rows_purged: usize,
    /// Outcome for the engine.
    pub target: PreparedTarget<T>,
    /// Number of sampling updates.
    pub num_updates: usize,
    /// Neighbor count K.
    pub neighbors: usize,
    /// Rank-decay kernel.
    pub kernel: RankDecay<T>,
    /// Attribute distance convention.
    pub metric: AttributeDistance,
    /// Resolved mode.
    pub mode: Mode,
}

// ============================================================================
// Preprocessor
// ============================================================================

/// Validates and prepares ranking input.
pub struct Preprocessor;

impl Preprocessor {
    /// Validate `x` and `y` against `config` and prepare them for sampling.
    pub fn prepare<T: Float>(
        x: &[T],
        y: &Outcome<T>,
        config: &RelieffConfig<T>,
    ) -> Result<PreparedData<T>, RelieffError> {
        let dims = config.dimensions;

        Validator::validate_inputs(x, y, dims)?;
        Validator::validate_neighbors(config.neighbors)?;
        Validator::validate_sample_count(config.sample_count)?;
        if let Some(sigma) = config.kernel_width {
            Validator::validate_kernel_width(sigma)?;
        }

        let mode = y.resolve_mode(config.mode)?;
        Validator::validate_prior_mode(mode, config.prior.is_some())?;

        // Complete rows
        let n_rows = y.len();
        let complete = Self::complete_rows(x, y, dims);
        let rows_dropped = n_rows - complete.len();
        Validator::validate_observations(complete.len())?;

        // Outcome and class purge
        let (rows, target, rows_purged) = match mode {
            Mode::Classification => {
                let prior = config.prior.clone().unwrap_or_default();
                let (rows, membership, probabilities) =
                    Self::prepare_classes(y, &complete, &prior)?;
                let purged = complete.len() - rows.len();
                (
                    rows,
                    PreparedTarget::Classes {
                        membership,
                        probabilities,
                    },
                    purged,
                )
            }
            Mode::Regression => {
                let values = match y {
                    Outcome::Numeric(values) => complete.iter().map(|&r| values[r]).collect(),
                    Outcome::Categorical(_) => {
                        return Err(RelieffError::ModeConflict {
                            requested: mode,
                            outcome: y.type_name(),
                        })
                    }
                };
                (complete, PreparedTarget::Numeric(values), 0)
            }
        };
        Validator::validate_observations(rows.len())?;

        // Attribute screening and scaling
        let metric = AttributeDistance::from_flag(config.categorical_attributes);
        let (matrix, accepted, rejected) = Self::screen_attributes(x, dims, &rows, metric);

        let n_obs = rows.len();
        let num_updates = config.sample_count.resolve(n_obs);
        // No query can return more than n_obs rows
        let neighbors = (config.neighbors.ceil() as usize).min(n_obs);
        let kernel = match config.kernel_width {
            Some(sigma) => RankDecay::new(sigma),
            None => Self::default_kernel(mode),
        };

        debug!(
            %mode,
            observations = n_obs,
            rows_dropped,
            rows_purged,
            accepted = accepted.len(),
            rejected = rejected.len(),
            num_updates,
            neighbors,
            "prepared ReliefF input"
        );

        Ok(PreparedData {
            x: matrix,
            n_obs,
            n_attributes: dims,
            accepted,
            rejected,
            kept_rows: rows,
            rows_dropped,
            rows_purged,
            target,
            num_updates,
            neighbors,
            kernel,
            metric,
            mode,
        })
    }

    /// Rows with no missing attribute and a present outcome.
    pub fn complete_rows<T: Float>(x: &[T], y: &Outcome<T>, dims: usize) -> Vec<usize> {
        x.chunks_exact(dims)
            .enumerate()
            .filter(|(i, row)| !y.is_missing(*i) && !row.iter().any(|v| v.is_nan()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Encode classes over `rows`, resolve probabilities, and purge classes
    /// with zero probability.
    ///
    /// Returns the surviving original rows, their membership and the
    /// renormalized probabilities.
    pub fn prepare_classes<T: Float>(
        y: &Outcome<T>,
        rows: &[usize],
        prior: &Prior<T>,
    ) -> Result<(Vec<usize>, ClassMembership, Vec<T>), RelieffError> {
        let membership = ClassMembership::from_outcome(y, rows);
        let probabilities = prior.class_probabilities(&membership)?;

        let keep: Vec<bool> = probabilities.iter().map(|&p| p > T::zero()).collect();
        if keep.iter().all(|&k| k) {
            return Ok((rows.to_vec(), membership, probabilities));
        }

        let (membership, positions) = membership.retain_classes(&keep);
        if membership.n_classes() == 0 || positions.is_empty() {
            return Err(RelieffError::AllClassesPurged);
        }

        let kept: Vec<T> = probabilities.into_iter().filter(|&p| p > T::zero()).collect();
        let total = kept.iter().fold(T::zero(), |acc, &p| acc + p);
        let probabilities = kept.into_iter().map(|p| p / total).collect();
        let rows = positions.into_iter().map(|p| rows[p]).collect();

        Ok((rows, membership, probabilities))
    }

    /// Split attributes into accepted and constant ones, and build the
    /// matrix of accepted attributes over `rows`.
    pub fn screen_attributes<T: Float>(
        x: &[T],
        dims: usize,
        rows: &[usize],
        metric: AttributeDistance,
    ) -> (Vec<T>, Vec<usize>, Vec<usize>) {
        let mut gathered = Vec::with_capacity(rows.len() * dims);
        for &r in rows {
            gathered.extend_from_slice(&x[r * dims..(r + 1) * dims]);
        }

        let (mins, maxs) = AttributeDistance::compute_ranges(&gathered, dims);
        let (accepted, rejected): (Vec<usize>, Vec<usize>) =
            (0..dims).partition(|&d| !AttributeDistance::is_constant(mins[d], maxs[d]));

        if accepted.is_empty() {
            return (Vec::new(), accepted, rejected);
        }

        let n = T::from(rows.len()).unwrap_or_else(T::one);
        let mut means = vec![T::zero(); dims];
        for row in gathered.chunks_exact(dims) {
            for (m, &v) in means.iter_mut().zip(row.iter()) {
                *m = *m + v;
            }
        }
        for m in means.iter_mut() {
            *m = *m / n;
        }

        let mut matrix = Vec::with_capacity(rows.len() * accepted.len());
        for row in gathered.chunks_exact(dims) {
            for &d in &accepted {
                let value = match metric {
                    AttributeDistance::Categorical => row[d],
                    AttributeDistance::Continuous => (row[d] - means[d]) / (maxs[d] - mins[d]),
                };
                matrix.push(value);
            }
        }

        (matrix, accepted, rejected)
    }

    /// Kernel used when no width is configured.
    pub fn default_kernel<T: Float>(mode: Mode) -> RankDecay<T> {
        match mode {
            Mode::Regression => RankDecay::new(
                T::from(RankDecay::<T>::DEFAULT_REGRESSION_WIDTH).unwrap_or_else(T::infinity),
            ),
            Mode::Classification => RankDecay::uniform(),
        }
    }
}
