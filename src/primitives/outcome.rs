//! Outcome representation and class-level encoding.
//!
//! ## Purpose
//!
//! This module defines the tagged outcome type accepted by the ranking API,
//! the run mode it implies, and the dense class encoding used by the
//! classification engine.
//!
//! ## Design notes
//!
//! * **Tagged variant**: A numeric outcome and a categorical outcome are
//!   distinct variants, so mode selection is a pure function of the tag and
//!   an optional override.
//! * **Sparse membership**: The N × G class indicator matrix is stored as one
//!   class index per row plus one row list per class. Exactly one class per
//!   row holds by construction.
//!
//! ## Key concepts
//!
//! * **Levels**: Categorical labels are ordered by first appearance. Numeric
//!   labels used for classification are ordered ascending.
//! * **Missing values**: `NaN` for numeric outcomes, `None` for categorical.
//!
//! ## Invariants
//!
//! * Every class in a [`ClassMembership`] has at least one row.
//! * `class_of[r]` is the index of the single class containing row `r`.

use core::cmp::Ordering::Equal;
use core::fmt;
use num_traits::Float;

use crate::primitives::errors::RelieffError;

// ============================================================================
// Mode
// ============================================================================

/// Kind of outcome being explained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Categorical outcome; weights come from hits and misses.
    Classification,

    /// Continuous outcome; weights come from rank-decayed neighbor statistics.
    Regression,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Classification => write!(f, "classification"),
            Mode::Regression => write!(f, "regression"),
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Outcome observed for each row of the attribute matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Numeric target per observation. `NaN` marks a missing value.
    Numeric(Vec<T>),

    /// Class label per observation. `None` marks a missing value.
    Categorical(Vec<Option<String>>),
}

impl<T: Float> Outcome<T> {
    /// Numeric outcome.
    pub fn numeric(values: Vec<T>) -> Self {
        Outcome::Numeric(values)
    }

    /// Categorical outcome without missing labels.
    pub fn categorical<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Outcome::Categorical(labels.into_iter().map(|s| Some(s.into())).collect())
    }

    /// Categorical outcome where `None` marks a missing label.
    pub fn categorical_with_missing<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Outcome::Categorical(labels.into_iter().map(|s| s.map(Into::into)).collect())
    }

    /// Boolean outcome, treated as two categorical levels.
    pub fn boolean<I>(values: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Outcome::Categorical(
            values
                .into_iter()
                .map(|b| Some(if b { "true" } else { "false" }.to_string()))
                .collect(),
        )
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        match self {
            Outcome::Numeric(v) => v.len(),
            Outcome::Categorical(v) => v.len(),
        }
    }

    /// Returns true if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if observation `i` has no outcome.
    pub fn is_missing(&self, i: usize) -> bool {
        match self {
            Outcome::Numeric(v) => v[i].is_nan(),
            Outcome::Categorical(v) => v[i].is_none(),
        }
    }

    /// Short description of the outcome type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Outcome::Numeric(_) => "numeric",
            Outcome::Categorical(_) => "categorical",
        }
    }

    /// Mode implied by the outcome type alone.
    pub fn default_mode(&self) -> Mode {
        match self {
            Outcome::Numeric(_) => Mode::Regression,
            Outcome::Categorical(_) => Mode::Classification,
        }
    }

    /// Resolve the run mode from the outcome type and an optional override.
    ///
    /// A numeric outcome may be explained as classes; a categorical outcome
    /// cannot be regressed on.
    pub fn resolve_mode(&self, requested: Option<Mode>) -> Result<Mode, RelieffError> {
        match (self, requested) {
            (_, None) => Ok(self.default_mode()),
            (Outcome::Categorical(_), Some(Mode::Regression)) => Err(RelieffError::ModeConflict {
                requested: Mode::Regression,
                outcome: self.type_name(),
            }),
            (_, Some(mode)) => Ok(mode),
        }
    }
}

// ============================================================================
// Class Membership
// ============================================================================

/// Dense class encoding of a categorical view of the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMembership {
    /// Class index of each row.
    pub class_of: Vec<usize>,
    /// Rows of each class, ascending.
    pub members: Vec<Vec<usize>>,
    /// Level name of each class.
    pub levels: Vec<String>,
}

impl ClassMembership {
    /// Encode the outcome values at `rows` into dense classes.
    ///
    /// Row `i` of the membership corresponds to `rows[i]`. Missing outcomes
    /// must already have been filtered out.
    pub fn from_outcome<T: Float>(outcome: &Outcome<T>, rows: &[usize]) -> Self {
        match outcome {
            Outcome::Categorical(labels) => {
                let mut levels: Vec<String> = Vec::new();
                let mut class_of = Vec::with_capacity(rows.len());
                for &r in rows {
                    let label = labels[r].as_deref().unwrap_or_default();
                    let class = match levels.iter().position(|l| l == label) {
                        Some(c) => c,
                        None => {
                            levels.push(label.to_string());
                            levels.len() - 1
                        }
                    };
                    class_of.push(class);
                }
                Self::from_class_of(class_of, levels)
            }
            Outcome::Numeric(values) => {
                let mut distinct: Vec<T> = rows.iter().map(|&r| values[r]).collect();
                distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
                distinct.dedup();
                let class_of = rows
                    .iter()
                    .map(|&r| {
                        distinct
                            .binary_search_by(|level| {
                                level.partial_cmp(&values[r]).unwrap_or(Equal)
                            })
                            .unwrap_or(0)
                    })
                    .collect();
                let levels = distinct
                    .iter()
                    .map(|v| format!("{}", v.to_f64().unwrap_or(f64::NAN)))
                    .collect();
                Self::from_class_of(class_of, levels)
            }
        }
    }

    /// Build the membership from per-row class indices.
    pub fn from_class_of(class_of: Vec<usize>, levels: Vec<String>) -> Self {
        let mut members = vec![Vec::new(); levels.len()];
        for (row, &c) in class_of.iter().enumerate() {
            members[c].push(row);
        }
        Self {
            class_of,
            members,
            levels,
        }
    }

    /// Number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.levels.len()
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.class_of.len()
    }

    /// Number of rows in class `c`.
    #[inline]
    pub fn class_size(&self, c: usize) -> usize {
        self.members[c].len()
    }

    /// Observed frequency of each class.
    pub fn counts(&self) -> Vec<usize> {
        self.members.iter().map(Vec::len).collect()
    }

    /// Drop every class whose `keep` flag is false.
    ///
    /// Returns the reduced membership and the surviving row positions (into
    /// the current row numbering), ascending.
    pub fn retain_classes(&self, keep: &[bool]) -> (Self, Vec<usize>) {
        let mut remap = vec![usize::MAX; self.n_classes()];
        let mut levels = Vec::new();
        for (c, level) in self.levels.iter().enumerate() {
            if keep[c] {
                remap[c] = levels.len();
                levels.push(level.clone());
            }
        }

        let mut kept_rows = Vec::new();
        let mut class_of = Vec::new();
        for (row, &c) in self.class_of.iter().enumerate() {
            if keep[c] {
                kept_rows.push(row);
                class_of.push(remap[c]);
            }
        }

        (Self::from_class_of(class_of, levels), kept_rows)
    }
}
