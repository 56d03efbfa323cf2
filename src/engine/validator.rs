//! Input validation for ReliefF configuration and data.
//!
//! ## Purpose
//!
//! This module checks configuration parameters and raw inputs before any
//! filtering or sampling happens, so the sampling loop never sees malformed
//! input.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Missing data**: `NaN` is a missing value, not an invalid one. Only
//!   infinities are rejected.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not drop rows or rescale attributes.

use num_traits::Float;

use crate::engine::executor::SampleCount;
use crate::primitives::errors::RelieffError;
use crate::primitives::outcome::{Mode, Outcome};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for ReliefF configuration and input data.
pub struct Validator;

impl Validator {
    /// Minimum number of complete observations for a ranking run.
    pub const MIN_OBSERVATIONS: usize = 2;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the attribute matrix and outcome shapes and values.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &Outcome<T>,
        dimensions: usize,
    ) -> Result<(), RelieffError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(RelieffError::EmptyInput);
        }

        // Check 2: At least one attribute
        if dimensions == 0 {
            return Err(RelieffError::InvalidDimensions(dimensions));
        }

        // Check 3: x holds exactly one row per outcome
        if x.len() != y.len() * dimensions {
            return Err(RelieffError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
                dimensions,
            });
        }

        // Check 4: No infinities
        for (i, &val) in x.iter().enumerate() {
            if val.is_infinite() {
                return Err(RelieffError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        if let Outcome::Numeric(values) = y {
            for (i, &val) in values.iter().enumerate() {
                if val.is_infinite() {
                    return Err(RelieffError::InvalidNumericValue(format!(
                        "y[{}]={}",
                        i,
                        val.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate the number of usable observations.
    pub fn validate_observations(n_obs: usize) -> Result<(), RelieffError> {
        if n_obs < Self::MIN_OBSERVATIONS {
            return Err(RelieffError::TooFewObservations {
                got: n_obs,
                min: Self::MIN_OBSERVATIONS,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the neighbor count K.
    pub fn validate_neighbors(k: f64) -> Result<(), RelieffError> {
        if !k.is_finite() || k <= 0.0 {
            return Err(RelieffError::InvalidNeighbors(k));
        }
        Ok(())
    }

    /// Validate the number of sampling updates.
    pub fn validate_sample_count(count: SampleCount) -> Result<(), RelieffError> {
        match count {
            SampleCount::All => Ok(()),
            SampleCount::Count(n) if n.is_finite() && n > 0.0 => Ok(()),
            SampleCount::Count(n) => Err(RelieffError::InvalidSampleCount(n)),
        }
    }

    /// Validate the rank-decay kernel width.
    ///
    /// `+inf` is accepted and disables decay.
    pub fn validate_kernel_width<T: Float>(sigma: T) -> Result<(), RelieffError> {
        if sigma.is_nan() || sigma <= T::zero() {
            return Err(RelieffError::InvalidKernelWidth(
                sigma.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that a class prior is only used for classification.
    pub fn validate_prior_mode(mode: Mode, has_prior: bool) -> Result<(), RelieffError> {
        if has_prior && mode == Mode::Regression {
            return Err(RelieffError::PriorWithRegression);
        }
        Ok(())
    }

    /// Validate raw prior values before normalization.
    pub fn validate_prior_values<T: Float>(values: &[T]) -> Result<(), RelieffError> {
        for (i, &p) in values.iter().enumerate() {
            if !p.is_finite() || p < T::zero() {
                return Err(RelieffError::InvalidPrior(format!(
                    "probability {} of class {} must be finite and non-negative",
                    p.to_f64().unwrap_or(f64::NAN),
                    i
                )));
            }
        }
        if values.iter().all(|&p| p == T::zero()) {
            return Err(RelieffError::InvalidPrior(
                "at least one class probability must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RelieffError> {
        if let Some(param) = duplicate_param {
            return Err(RelieffError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
