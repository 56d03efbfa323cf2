//! Result type of a ReliefF ranking run.
//!
//! ## Purpose
//!
//! This module defines [`RelieffResult`], which carries the ranking, the
//! per-attribute weights and the bookkeeping of the run (rows used, rows
//! dropped, draws, kernel width). It also offers column selection for a
//! downstream model and a printable summary.
//!
//! ## Invariants
//!
//! * `ranking` is a permutation of `0..weights.len()`.
//! * Rejected attributes trail `ranking` and have `NaN` weights.

use core::fmt;
use num_traits::Float;

use crate::algorithms::ranking::Ranked;
use crate::algorithms::regression::WeightStatus;
use crate::engine::preprocess::{PreparedData, PreparedTarget};
use crate::primitives::outcome::Mode;

// ============================================================================
// Result
// ============================================================================

/// Attribute ranking and run details.
#[derive(Debug, Clone, PartialEq)]
pub struct RelieffResult<T> {
    /// Attribute indices, most important first.
    pub ranking: Vec<usize>,

    /// Weight per original attribute (`NaN` for rejected attributes).
    pub weights: Vec<T>,

    /// Mode the run used.
    pub mode: Mode,

    /// Whether the weights are meaningful.
    pub status: WeightStatus,

    /// Attributes set aside as constant.
    pub rejected: Vec<usize>,

    /// Rows that took part in the run.
    pub observations_used: usize,

    /// Original index of each row that took part, ascending.
    pub kept_rows: Vec<usize>,

    /// Rows dropped for missing values.
    pub rows_dropped: usize,

    /// Rows removed with zero-probability classes.
    pub rows_purged: usize,

    /// Number of sampling updates performed.
    pub updates: usize,

    /// Neighbor count K, capped at the number of rows used.
    pub neighbors: usize,

    /// Rank-decay kernel width (`inf` means no decay).
    pub kernel_width: T,

    /// Class levels after purging (classification only).
    pub class_levels: Option<Vec<String>>,

    /// Class probabilities aligned with `class_levels`.
    pub class_probabilities: Option<Vec<T>>,
}

impl<T: Float> RelieffResult<T> {
    /// Assemble a result from the prepared data and the final ranking.
    pub(crate) fn from_parts(
        prepared: PreparedData<T>,
        ranked: Ranked<T>,
        status: WeightStatus,
        updates: usize,
    ) -> Self {
        let (class_levels, class_probabilities) = match prepared.target {
            PreparedTarget::Classes {
                membership,
                probabilities,
            } => (Some(membership.levels), Some(probabilities)),
            PreparedTarget::Numeric(_) => (None, None),
        };

        Self {
            ranking: ranked.ranking,
            weights: ranked.weights,
            mode: prepared.mode,
            status,
            rejected: prepared.rejected,
            observations_used: prepared.n_obs,
            kept_rows: prepared.kept_rows,
            rows_dropped: prepared.rows_dropped,
            rows_purged: prepared.rows_purged,
            updates,
            neighbors: prepared.neighbors,
            kernel_width: prepared.kernel.sigma(),
            class_levels,
            class_probabilities,
        }
    }

    /// Number of attributes ranked.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if attribute `i` was set aside as constant.
    pub fn is_rejected(&self, i: usize) -> bool {
        self.rejected.contains(&i)
    }

    /// Returns true if the regression weights are undefined.
    pub fn is_degenerate(&self) -> bool {
        !self.status.is_valid()
    }

    /// The `k` most important attributes (fewer if there are fewer).
    pub fn top(&self, k: usize) -> &[usize] {
        &self.ranking[..k.min(self.ranking.len())]
    }

    /// Row-major matrix holding only the `k` top-ranked columns of `x`,
    /// in ranking order.
    ///
    /// `x` must have the layout of the ranked input.
    pub fn select_columns(&self, x: &[T], k: usize) -> Vec<T> {
        let dims = self.n_attributes();
        if dims == 0 {
            return Vec::new();
        }
        let columns = self.top(k);
        let mut out = Vec::with_capacity(x.len() / dims * columns.len());
        for row in x.chunks_exact(dims) {
            out.extend(columns.iter().map(|&c| row[c]));
        }
        out
    }
}

impl<T: Float> fmt::Display for RelieffResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Mode: {}", self.mode)?;
        writeln!(f, "  Observations: {}", self.observations_used)?;
        if self.rows_dropped > 0 {
            writeln!(f, "  Dropped (missing): {}", self.rows_dropped)?;
        }
        if self.rows_purged > 0 {
            writeln!(f, "  Purged (zero prior): {}", self.rows_purged)?;
        }
        writeln!(f, "  Updates: {}", self.updates)?;
        writeln!(f, "  Neighbors: {}", self.neighbors)?;
        writeln!(
            f,
            "  Kernel width: {}",
            self.kernel_width.to_f64().unwrap_or(f64::NAN)
        )?;
        writeln!(f, "  Status: {}", self.status)?;

        if let (Some(levels), Some(probs)) = (&self.class_levels, &self.class_probabilities) {
            writeln!(f)?;
            writeln!(f, "Classes:")?;
            for (level, p) in levels.iter().zip(probs.iter()) {
                writeln!(f, "  {:<12} {:.4}", level, p.to_f64().unwrap_or(f64::NAN))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Ranking:")?;
        writeln!(f, "  {:>6} {:>10} {:>12}", "Rank", "Attribute", "Weight")?;
        writeln!(f, "  {}", "-".repeat(30))?;
        for (rank, &attr) in self.ranking.iter().enumerate() {
            let w = self.weights[attr].to_f64().unwrap_or(f64::NAN);
            write!(f, "  {:>6} {:>10} {:>12.6}", rank + 1, attr, w)?;
            if self.is_rejected(attr) {
                write!(f, " (constant)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
