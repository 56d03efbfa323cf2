#![cfg(feature = "dev")]

use relieff_rs::internals::primitives::errors::{ErrorKind, RelieffError};
use relieff_rs::internals::primitives::outcome::Mode;

#[test]
fn test_relieff_error_display() {
    let err = RelieffError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    let err = RelieffError::MismatchedInputs {
        x_len: 10,
        y_len: 4,
        dimensions: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 values (2 attributes per row), y has 4 outcomes"
    );

    let err = RelieffError::TooFewObservations { got: 1, min: 2 };
    assert_eq!(
        format!("{}", err),
        "Too few observations: got 1, need at least 2"
    );

    let err = RelieffError::InvalidNeighbors(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid neighbors: -1 (must be > 0 and finite)"
    );

    let err = RelieffError::DuplicateParameter {
        parameter: "neighbors",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'neighbors' was set multiple times"
    );

    let err = RelieffError::ModeConflict {
        requested: Mode::Regression,
        outcome: "categorical",
    };
    assert_eq!(
        format!("{}", err),
        "Mode conflict: regression requested for a categorical outcome"
    );

    let err = RelieffError::PriorLengthMismatch {
        expected: 2,
        got: 3,
    };
    assert_eq!(
        format!("{}", err),
        "Prior length mismatch: expected 2 class probabilities, got 3"
    );

    let err = RelieffError::UnknownClass("z".to_string());
    assert_eq!(format!("{}", err), "Prior names unknown class 'z'");
}

#[test]
fn test_relieff_error_kind() {
    assert_eq!(RelieffError::EmptyInput.kind(), ErrorKind::InvalidInput);
    assert_eq!(
        RelieffError::InvalidDimensions(0).kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(
        RelieffError::InvalidNumericValue("x[0]=inf".to_string()).kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(
        RelieffError::InvalidSampleCount(0.0).kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(
        RelieffError::InvalidKernelWidth(0.0).kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(
        RelieffError::PriorWithRegression.kind(),
        ErrorKind::InvalidMode
    );
    assert_eq!(
        RelieffError::ModeConflict {
            requested: Mode::Regression,
            outcome: "categorical"
        }
        .kind(),
        ErrorKind::InvalidMode
    );
    assert_eq!(
        RelieffError::AllClassesPurged.kind(),
        ErrorKind::InsufficientData
    );
    assert_eq!(
        RelieffError::TooFewObservations { got: 0, min: 2 }.kind(),
        ErrorKind::InsufficientData
    );
    assert_eq!(
        RelieffError::MissingClass("a".to_string()).kind(),
        ErrorKind::InvalidPrior
    );
    assert_eq!(
        RelieffError::InvalidPrior("negative".to_string()).kind(),
        ErrorKind::InvalidPrior
    );
}

#[test]
fn test_relieff_error_is_cloneable() {
    let err = RelieffError::PriorLengthMismatch {
        expected: 2,
        got: 5,
    };
    assert_eq!(err.clone(), err);
}
