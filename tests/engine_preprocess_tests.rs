#![cfg(feature = "dev")]
//! Tests for input preparation.
//!
//! ## Test Organization
//!
//! 1. **Validation** - Shape, value and parameter errors
//! 2. **Row Filtering** - Missing values and class purging
//! 3. **Attribute Screening** - Constant detection and scaling
//! 4. **Derived Settings** - Update count, neighbors and kernel defaults

use approx::assert_relative_eq;

use relieff_rs::internals::algorithms::priors::Prior;
use relieff_rs::internals::engine::executor::{RelieffConfig, SampleCount};
use relieff_rs::internals::engine::preprocess::{PreparedTarget, Preprocessor};
use relieff_rs::internals::math::distance::AttributeDistance;
use relieff_rs::internals::primitives::errors::{ErrorKind, RelieffError};
use relieff_rs::internals::primitives::outcome::{Mode, Outcome};

fn config(dims: usize) -> RelieffConfig<f64> {
    RelieffConfig {
        dimensions: dims,
        ..Default::default()
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_empty_input() {
    let y: Outcome<f64> = Outcome::numeric(vec![]);
    let err = Preprocessor::prepare(&[], &y, &config(1)).unwrap_err();
    assert_eq!(err, RelieffError::EmptyInput);
}

#[test]
fn test_mismatched_lengths() {
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0]);
    let err = Preprocessor::prepare(&[1.0, 2.0, 3.0, 4.0], &y, &config(2)).unwrap_err();
    assert_eq!(
        err,
        RelieffError::MismatchedInputs {
            x_len: 4,
            y_len: 3,
            dimensions: 2
        }
    );
}

#[test]
fn test_infinite_value_rejected() {
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0]);
    let err = Preprocessor::prepare(&[1.0, f64::INFINITY, 3.0], &y, &config(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let y = Outcome::numeric(vec![1.0, f64::NEG_INFINITY, 3.0]);
    let err = Preprocessor::prepare(&[1.0, 2.0, 3.0], &y, &config(1)).unwrap_err();
    assert!(matches!(err, RelieffError::InvalidNumericValue(_)));
}

#[test]
fn test_regression_on_categorical_outcome() {
    let y: Outcome<f64> = Outcome::categorical(["a", "b", "a"]);
    let cfg = RelieffConfig {
        mode: Some(Mode::Regression),
        ..config(1)
    };
    let err = Preprocessor::prepare(&[1.0, 2.0, 3.0], &y, &cfg).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidMode);
}

#[test]
fn test_prior_with_inferred_regression() {
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0]);
    let cfg = RelieffConfig {
        prior: Some(Prior::Uniform),
        ..config(1)
    };
    let err = Preprocessor::prepare(&[1.0, 2.0, 3.0], &y, &cfg).unwrap_err();
    assert_eq!(err, RelieffError::PriorWithRegression);
}

#[test]
fn test_invalid_parameters() {
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0]);
    let x = [1.0, 2.0, 3.0];

    let cfg = RelieffConfig {
        neighbors: 0.0,
        ..config(1)
    };
    assert_eq!(
        Preprocessor::prepare(&x, &y, &cfg).unwrap_err(),
        RelieffError::InvalidNeighbors(0.0)
    );

    let cfg = RelieffConfig {
        sample_count: SampleCount::Count(-2.0),
        ..config(1)
    };
    assert_eq!(
        Preprocessor::prepare(&x, &y, &cfg).unwrap_err(),
        RelieffError::InvalidSampleCount(-2.0)
    );

    let cfg = RelieffConfig {
        kernel_width: Some(0.0),
        ..config(1)
    };
    assert_eq!(
        Preprocessor::prepare(&x, &y, &cfg).unwrap_err(),
        RelieffError::InvalidKernelWidth(0.0)
    );
}

// ============================================================================
// Row Filtering Tests
// ============================================================================

#[test]
fn test_missing_rows_dropped() {
    let x = [1.0, 10.0, f64::NAN, 20.0, 3.0, 30.0, 4.0, 40.0];
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0, f64::NAN]);
    let prepared = Preprocessor::prepare(&x, &y, &config(2)).unwrap();

    assert_eq!(prepared.kept_rows, vec![0, 2]);
    assert_eq!(prepared.rows_dropped, 2);
    assert_eq!(prepared.n_obs, 2);
    assert_eq!(prepared.n_attributes, 2);
    assert_eq!(prepared.target, PreparedTarget::Numeric(vec![1.0, 3.0]));
}

#[test]
fn test_missing_categorical_label_dropped() {
    let x = [1.0, 2.0, 3.0];
    let y: Outcome<f64> = Outcome::categorical_with_missing([Some("a"), None, Some("b")]);
    let prepared = Preprocessor::prepare(&x, &y, &config(1)).unwrap();
    assert_eq!(prepared.kept_rows, vec![0, 2]);
    assert_eq!(prepared.rows_dropped, 1);
}

#[test]
fn test_too_few_complete_rows() {
    let x = [1.0, f64::NAN, f64::NAN];
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0]);
    let err = Preprocessor::prepare(&x, &y, &config(1)).unwrap_err();
    assert_eq!(err, RelieffError::TooFewObservations { got: 1, min: 2 });
}

#[test]
fn test_zero_prior_class_purged() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y: Outcome<f64> = Outcome::categorical(["a", "b", "c", "a", "c"]);
    let cfg = RelieffConfig {
        prior: Some(Prior::Vector(vec![1.0, 0.0, 3.0])),
        ..config(1)
    };
    let prepared = Preprocessor::prepare(&x, &y, &cfg).unwrap();

    assert_eq!(prepared.kept_rows, vec![0, 2, 3, 4]);
    assert_eq!(prepared.rows_purged, 1);
    match prepared.target {
        PreparedTarget::Classes {
            membership,
            probabilities,
        } => {
            assert_eq!(membership.levels, vec!["a", "c"]);
            assert_eq!(membership.class_of, vec![0, 1, 0, 1]);
            assert_relative_eq!(probabilities[0], 0.25);
            assert_relative_eq!(probabilities[1], 0.75);
        }
        PreparedTarget::Numeric(_) => panic!("expected classes"),
    }
}

#[test]
fn test_purge_leaving_one_row() {
    let x = [1.0, 2.0, 3.0];
    let y: Outcome<f64> = Outcome::categorical(["a", "b", "b"]);
    let cfg = RelieffConfig {
        prior: Some(Prior::Vector(vec![1.0, 0.0])),
        ..config(1)
    };
    let err = Preprocessor::prepare(&x, &y, &cfg).unwrap_err();
    assert_eq!(err, RelieffError::TooFewObservations { got: 1, min: 2 });
}

#[test]
fn test_all_zero_prior_is_invalid() {
    let x = [1.0, 2.0, 3.0];
    let y: Outcome<f64> = Outcome::categorical(["a", "b", "b"]);
    let cfg = RelieffConfig {
        prior: Some(Prior::Vector(vec![0.0, 0.0])),
        ..config(1)
    };
    let err = Preprocessor::prepare(&x, &y, &cfg).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPrior);
}

#[test]
fn test_prior_by_name() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y: Outcome<f64> = Outcome::categorical(["a", "b", "a", "b"]);

    let cfg = RelieffConfig {
        prior: Some(Prior::ByName(vec![
            ("b".to_string(), 3.0),
            ("a".to_string(), 1.0),
        ])),
        ..config(1)
    };
    let prepared = Preprocessor::prepare(&x, &y, &cfg).unwrap();
    match prepared.target {
        PreparedTarget::Classes { probabilities, .. } => {
            assert_relative_eq!(probabilities[0], 0.25);
            assert_relative_eq!(probabilities[1], 0.75);
        }
        PreparedTarget::Numeric(_) => panic!("expected classes"),
    }

    let cfg = RelieffConfig {
        prior: Some(Prior::ByName(vec![
            ("a".to_string(), 1.0),
            ("z".to_string(), 1.0),
        ])),
        ..config(1)
    };
    assert_eq!(
        Preprocessor::prepare(&x, &y, &cfg).unwrap_err(),
        RelieffError::UnknownClass("z".to_string())
    );
}

// ============================================================================
// Attribute Screening Tests
// ============================================================================

#[test]
fn test_constant_attribute_rejected_and_scaling() {
    // Attribute 1 is constant; attribute 0 spans [0, 4] with mean 2
    let x = [0.0, 5.0, 2.0, 5.0, 4.0, 5.0];
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0]);
    let prepared = Preprocessor::prepare(&x, &y, &config(2)).unwrap();

    assert_eq!(prepared.accepted, vec![0]);
    assert_eq!(prepared.rejected, vec![1]);
    assert_eq!(prepared.x.len(), 3);
    assert_relative_eq!(prepared.x[0], -0.5);
    assert_relative_eq!(prepared.x[1], 0.0);
    assert_relative_eq!(prepared.x[2], 0.5);
}

#[test]
fn test_categorical_attributes_keep_codes() {
    let x = [1.0, 7.0, 3.0, 7.0, 2.0, 9.0];
    let y: Outcome<f64> = Outcome::categorical(["a", "b", "a"]);
    let cfg = RelieffConfig {
        categorical_attributes: true,
        ..config(2)
    };
    let prepared = Preprocessor::prepare(&x, &y, &cfg).unwrap();

    assert_eq!(prepared.metric, AttributeDistance::Categorical);
    assert_eq!(prepared.accepted, vec![0, 1]);
    assert_eq!(prepared.x, x.to_vec());
}

#[test]
fn test_all_attributes_constant() {
    let x = [1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0]);
    let prepared = Preprocessor::prepare(&x, &y, &config(2)).unwrap();

    assert!(prepared.accepted.is_empty());
    assert_eq!(prepared.rejected, vec![0, 1]);
    assert!(prepared.x.is_empty());
}

#[test]
fn test_constancy_after_row_drop() {
    // Attribute 0 only varies in the row that is dropped
    let x = [1.0, 0.0, 1.0, 1.0, 9.0, f64::NAN, 1.0, 2.0];
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0, 4.0]);
    let prepared = Preprocessor::prepare(&x, &y, &config(2)).unwrap();

    assert_eq!(prepared.rejected, vec![0]);
    assert_eq!(prepared.accepted, vec![1]);
}

// ============================================================================
// Derived Settings Tests
// ============================================================================

#[test]
fn test_sample_count_capped_and_rounded() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0, 4.0]);

    let cfg = RelieffConfig {
        sample_count: SampleCount::Count(100.0),
        ..config(1)
    };
    assert_eq!(Preprocessor::prepare(&x, &y, &cfg).unwrap().num_updates, 4);

    let cfg = RelieffConfig {
        sample_count: SampleCount::Count(2.2),
        ..config(1)
    };
    assert_eq!(Preprocessor::prepare(&x, &y, &cfg).unwrap().num_updates, 3);

    assert_eq!(
        Preprocessor::prepare(&x, &y, &config(1)).unwrap().num_updates,
        4
    );
}

#[test]
fn test_neighbors_rounded_up() {
    let x = [1.0, 2.0, 3.0];
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0]);
    let cfg = RelieffConfig {
        neighbors: 2.1,
        ..config(1)
    };
    assert_eq!(Preprocessor::prepare(&x, &y, &cfg).unwrap().neighbors, 3);
}

#[test]
fn test_neighbors_capped_at_observations() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = Outcome::numeric(vec![1.0, 2.0, 3.0, 4.0]);
    for k in [1e12, 1e30, f64::MAX] {
        let cfg = RelieffConfig {
            neighbors: k,
            ..config(1)
        };
        assert_eq!(Preprocessor::prepare(&x, &y, &cfg).unwrap().neighbors, 4);
    }
}

#[test]
fn test_default_kernel_by_mode() {
    let x = [1.0, 2.0, 3.0];

    let y = Outcome::numeric(vec![1.0, 2.0, 3.0]);
    let prepared = Preprocessor::prepare(&x, &y, &config(1)).unwrap();
    assert_eq!(prepared.mode, Mode::Regression);
    assert_eq!(prepared.kernel.sigma(), 50.0);

    let y: Outcome<f64> = Outcome::boolean([true, false, true]);
    let prepared = Preprocessor::prepare(&x, &y, &config(1)).unwrap();
    assert_eq!(prepared.mode, Mode::Classification);
    assert!(prepared.kernel.sigma().is_infinite());

    let cfg = RelieffConfig {
        kernel_width: Some(4.0),
        ..config(1)
    };
    let prepared = Preprocessor::prepare(&x, &y, &cfg).unwrap();
    assert_eq!(prepared.kernel.sigma(), 4.0);
}

#[test]
fn test_numeric_outcome_as_classes() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = Outcome::numeric(vec![2.0, 1.0, 2.0, 1.0]);
    let cfg = RelieffConfig {
        mode: Some(Mode::Classification),
        ..config(1)
    };
    let prepared = Preprocessor::prepare(&x, &y, &cfg).unwrap();
    match prepared.target {
        PreparedTarget::Classes { membership, .. } => {
            assert_eq!(membership.levels, vec!["1", "2"]);
            assert_eq!(membership.class_of, vec![1, 0, 1, 0]);
        }
        PreparedTarget::Numeric(_) => panic!("expected classes"),
    }
}
