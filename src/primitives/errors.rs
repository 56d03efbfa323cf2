//! Error types for ReliefF feature ranking.
//!
//! ## Purpose
//!
//! This module defines every failure a ranking call can report. All of them
//! are raised before the sampling loop starts, so a run either fails up front
//! or produces a complete result.
//!
//! ## Design notes
//!
//! * **Specific variants**: Each violated rule has its own variant carrying the
//!   offending value, so messages are actionable.
//! * **Taxonomy**: [`RelieffError::kind`] groups the variants into four broad
//!   categories for callers that only need to branch on the category.
//!
//! ## Non-goals
//!
//! * Degenerate regression denominators are not errors; they are reported as
//!   a result state (see `WeightStatus`).

use thiserror::Error;

use crate::primitives::outcome::Mode;

// ============================================================================
// Error Kind
// ============================================================================

/// Broad category of a [`RelieffError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed data or configuration values.
    InvalidInput,
    /// Outcome type conflicts with the requested mode.
    InvalidMode,
    /// Not enough usable observations to rank attributes.
    InsufficientData,
    /// Malformed class prior.
    InvalidPrior,
}

// ============================================================================
// Error Type
// ============================================================================

/// Errors reported by ReliefF ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelieffError {
    /// Attribute matrix or outcome is empty.
    #[error("Input arrays are empty")]
    EmptyInput,

    /// Attribute matrix length does not match `outcome length * dimensions`.
    #[error("Length mismatch: x has {x_len} values ({dimensions} attributes per row), y has {y_len} outcomes")]
    MismatchedInputs {
        /// Length of the flattened attribute matrix.
        x_len: usize,
        /// Length of the outcome.
        y_len: usize,
        /// Attributes per row.
        dimensions: usize,
    },

    /// Number of attributes per row is zero.
    #[error("Invalid dimensions: {0} (must be at least 1)")]
    InvalidDimensions(usize),

    /// A value that must be finite is not.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Neighbor count is not a positive finite number.
    #[error("Invalid neighbors: {0} (must be > 0 and finite)")]
    InvalidNeighbors(f64),

    /// Sample count is not a positive finite number.
    #[error("Invalid sample count: {0} (must be > 0 and finite)")]
    InvalidSampleCount(f64),

    /// Kernel width is not positive.
    #[error("Invalid kernel width: {0} (must be > 0)")]
    InvalidKernelWidth(f64),

    /// A builder parameter was set more than once.
    #[error("Parameter '{parameter}' was set multiple times")]
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },

    /// The requested mode cannot be applied to the outcome type.
    #[error("Mode conflict: {requested} requested for a {outcome} outcome")]
    ModeConflict {
        /// Mode requested by the caller.
        requested: Mode,
        /// Description of the outcome type.
        outcome: &'static str,
    },

    /// A class prior was supplied for a regression run.
    #[error("A class prior cannot be used in regression mode")]
    PriorWithRegression,

    /// Too few complete observations remain.
    #[error("Too few observations: got {got}, need at least {min}")]
    TooFewObservations {
        /// Observations left after filtering.
        got: usize,
        /// Minimum required.
        min: usize,
    },

    /// Every class was given zero probability.
    #[error("All observations were removed: every class has zero prior probability")]
    AllClassesPurged,

    /// Numeric prior length does not match the number of observed classes.
    #[error("Prior length mismatch: expected {expected} class probabilities, got {got}")]
    PriorLengthMismatch {
        /// Number of observed classes.
        expected: usize,
        /// Number of probabilities supplied.
        got: usize,
    },

    /// A named prior refers to a class that was not observed.
    #[error("Prior names unknown class '{0}'")]
    UnknownClass(String),

    /// A named prior does not cover an observed class.
    #[error("Prior is missing class '{0}'")]
    MissingClass(String),

    /// A prior contains negative, non-finite or only zero values.
    #[error("Invalid prior: {0}")]
    InvalidPrior(String),
}

impl RelieffError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::MismatchedInputs { .. }
            | Self::InvalidDimensions(_)
            | Self::InvalidNumericValue(_)
            | Self::InvalidNeighbors(_)
            | Self::InvalidSampleCount(_)
            | Self::InvalidKernelWidth(_)
            | Self::DuplicateParameter { .. } => ErrorKind::InvalidInput,
            Self::ModeConflict { .. } | Self::PriorWithRegression => ErrorKind::InvalidMode,
            Self::TooFewObservations { .. } | Self::AllClassesPurged => {
                ErrorKind::InsufficientData
            }
            Self::PriorLengthMismatch { .. }
            | Self::UnknownClass(_)
            | Self::MissingClass(_)
            | Self::InvalidPrior(_) => ErrorKind::InvalidPrior,
        }
    }
}
