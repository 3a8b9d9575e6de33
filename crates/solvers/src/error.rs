use thiserror::Error;

use minima_core::{MIN_PRECISION, VectorError};

/// Errors that can occur when configuring or running a solver.
///
/// Errors are raised while validating inputs, before the objective is
/// evaluated. The one exception is a [`Error::DimensionMismatch`] found while
/// combining an iterate with a caller-supplied gradient.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("precision {precision} is finer than the supported minimum of {}", MIN_PRECISION)]
    InvalidPrecision { precision: f64 },

    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{method} is not implemented")]
    Unimplemented { method: &'static str },
}

impl From<VectorError> for Error {
    fn from(err: VectorError) -> Self {
        match err {
            VectorError::Empty => Self::InvalidParameter {
                name: "dims",
                value: 0.0,
                reason: "must be at least 1",
            },
            VectorError::DimensionMismatch { left, right } => Self::DimensionMismatch {
                expected: left,
                actual: right,
            },
        }
    }
}

/// Validates a requested precision and returns its absolute value.
///
/// Negative precisions are accepted as their magnitude.
pub(crate) fn validate_precision(precision: f64) -> Result<f64, Error> {
    let eps = precision.abs();
    if !eps.is_finite() || eps < MIN_PRECISION {
        return Err(Error::InvalidPrecision { precision });
    }
    Ok(eps)
}

/// Validates a shrink factor, which must lie strictly inside `(0, 1)`.
pub(crate) fn validate_lambda(lambda: f64) -> Result<f64, Error> {
    if lambda > 0.0 && lambda < 1.0 {
        Ok(lambda)
    } else {
        Err(Error::InvalidParameter {
            name: "lambda",
            value: lambda,
            reason: "must lie strictly between 0 and 1",
        })
    }
}
