//! Per-attribute distance conventions for ReliefF.
//!
//! ## Purpose
//!
//! This module provides the two distance conventions ReliefF uses: a
//! continuous convention (absolute difference of scaled values, city-block
//! aggregate) and a categorical convention (mismatch indicator, Hamming
//! aggregate). It also provides the range helpers used to detect constant
//! attributes.
//!
//! ## Design notes
//!
//! * **Whole-matrix flag**: One convention applies to every attribute.
//! * **Decoupling**: Per-attribute differences feed the weight updates; the
//!   aggregate distance only orders neighbors in the search index.
//!
//! ## Key concepts
//!
//! * **Continuous**: `|a - b|` per attribute. Attributes are pre-scaled by
//!   their range, so each difference lies in [0, 1].
//! * **Categorical**: `0` if equal, `1` otherwise. Magnitudes are ignored.
//! * **Spacing**: The gap between a value and the next representable one.
//!   An attribute whose range is below the spacing at its maximum is constant.
//!
//! ## Invariants
//!
//! * Distances are non-negative and zero for identical inputs.
//!
//! ## Non-goals
//!
//! * This module does not weight neighbors by rank (see `kernel`).

use num_traits::Float;

use crate::math::neighborhood::PointDistance;

// ============================================================================
// Attribute Distance
// ============================================================================

/// Distance convention applied to every attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeDistance {
    /// Absolute difference of centered and range-scaled values.
    #[default]
    Continuous,

    /// Mismatch indicator over raw category codes.
    Categorical,
}

impl AttributeDistance {
    /// Convention selected by the categorical-attribute flag.
    pub fn from_flag(categorical: bool) -> Self {
        if categorical {
            Self::Categorical
        } else {
            Self::Continuous
        }
    }

    /// Difference between two values of one attribute.
    #[inline]
    pub fn diff<T: Float>(&self, a: T, b: T) -> T {
        match self {
            Self::Continuous => (a - b).abs(),
            Self::Categorical => {
                if a == b {
                    T::zero()
                } else {
                    T::one()
                }
            }
        }
    }

    /// Aggregate distance between two rows under this convention.
    #[inline]
    pub fn aggregate<T: Float>(&self, a: &[T], b: &[T]) -> T {
        match self {
            Self::Continuous => Self::manhattan(a, b),
            Self::Categorical => Self::hamming(a, b),
        }
    }

    /// Compute Manhattan distance (L1 norm).
    #[inline]
    pub fn manhattan<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (ai - bi).abs())
            .fold(T::zero(), |acc, x| acc + x)
    }

    /// Compute the number of mismatching coordinates.
    #[inline]
    pub fn hamming<T: Float>(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .filter(|&(ai, bi)| ai != bi)
            .fold(T::zero(), |acc, _| acc + T::one())
    }

    // ========================================================================
    // Range Helpers
    // ========================================================================

    /// Compute min and max for each dimension across a set of nD points.
    pub fn compute_ranges<T: Float>(points: &[T], dimensions: usize) -> (Vec<T>, Vec<T>) {
        debug_assert_eq!(
            points.len() % dimensions,
            0,
            "Points array length must be divisible by dimensions"
        );

        let mut mins = vec![T::infinity(); dimensions];
        let mut maxs = vec![T::neg_infinity(); dimensions];

        for row in points.chunks_exact(dimensions) {
            for (d, &val) in row.iter().enumerate() {
                if val < mins[d] {
                    mins[d] = val;
                }
                if val > maxs[d] {
                    maxs[d] = val;
                }
            }
        }

        (mins, maxs)
    }

    /// Floating-point spacing at `x`.
    ///
    /// Floored at the smallest positive normal so that `spacing(0) > 0`.
    #[inline]
    pub fn spacing<T: Float>(x: T) -> T {
        let s = x.abs() * T::epsilon();
        if s > T::min_positive_value() {
            s
        } else {
            T::min_positive_value()
        }
    }

    /// Returns true if an attribute with this range does not vary.
    #[inline]
    pub fn is_constant<T: Float>(min: T, max: T) -> bool {
        max - min < Self::spacing(max)
    }
}

impl<T: Float> PointDistance<T> for AttributeDistance {
    #[inline]
    fn distance(&self, a: &[T], b: &[T]) -> T {
        self.aggregate(a, b)
    }

    #[inline]
    fn split_lower_bound(&self, split_val: T, query_val: T) -> T {
        self.diff(split_val, query_val)
    }
}
