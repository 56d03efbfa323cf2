//! Class probabilities for classification ReliefF.
//!
//! ## Purpose
//!
//! Miss contributions from each foreign class are weighted by that class's
//! probability. This module turns the user's prior choice into a normalized
//! probability per observed class.
//!
//! ## Key concepts
//!
//! * **Empirical**: Observed class frequencies (default).
//! * **Uniform**: Every class equally likely.
//! * **ByName**: Probability per class label; must cover exactly the
//!   observed labels.
//! * **Vector**: Probability per class in level order.
//!
//! ## Invariants
//!
//! * Returned probabilities are finite, non-negative and sum to 1.
//!
//! ## Non-goals
//!
//! * Purging zero-probability classes is done by the preprocessor.

use num_traits::Float;

use crate::engine::validator::Validator;
use crate::primitives::errors::RelieffError;
use crate::primitives::outcome::ClassMembership;

// ============================================================================
// Prior
// ============================================================================

/// Class prior used to weight miss contributions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Prior<T> {
    /// Observed class frequencies.
    #[default]
    Empirical,

    /// Equal probability for every class.
    Uniform,

    /// Probability per class label.
    ByName(Vec<(String, T)>),

    /// Probability per class, aligned with the class levels.
    Vector(Vec<T>),
}

impl<T: Float> Prior<T> {
    /// Normalized probability of each class in `membership`.
    pub fn class_probabilities(
        &self,
        membership: &ClassMembership,
    ) -> Result<Vec<T>, RelieffError> {
        let n_classes = membership.n_classes();

        let raw: Vec<T> = match self {
            Prior::Empirical => membership
                .counts()
                .into_iter()
                .map(|c| T::from(c).unwrap_or_else(T::zero))
                .collect(),
            Prior::Uniform => vec![T::one(); n_classes],
            Prior::ByName(pairs) => {
                let mut probs: Vec<Option<T>> = vec![None; n_classes];
                for (name, p) in pairs {
                    let class = membership
                        .levels
                        .iter()
                        .position(|l| l == name)
                        .ok_or_else(|| RelieffError::UnknownClass(name.clone()))?;
                    if probs[class].is_some() {
                        return Err(RelieffError::InvalidPrior(format!(
                            "class '{}' is listed more than once",
                            name
                        )));
                    }
                    probs[class] = Some(*p);
                }
                probs
                    .into_iter()
                    .enumerate()
                    .map(|(c, p)| {
                        p.ok_or_else(|| RelieffError::MissingClass(membership.levels[c].clone()))
                    })
                    .collect::<Result<Vec<T>, RelieffError>>()?
            }
            Prior::Vector(values) => {
                if values.len() != n_classes {
                    return Err(RelieffError::PriorLengthMismatch {
                        expected: n_classes,
                        got: values.len(),
                    });
                }
                values.clone()
            }
        };

        Validator::validate_prior_values(&raw)?;

        let total = raw.iter().fold(T::zero(), |acc, &p| acc + p);
        Ok(raw.into_iter().map(|p| p / total).collect())
    }
}
