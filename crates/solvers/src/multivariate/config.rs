use minima_core::DEFAULT_PRECISION;

use crate::{
    Error,
    error::{validate_lambda, validate_precision},
    line::INITIAL_STEP,
};

/// Default shrink factor for step division and coordinate descent.
const DEFAULT_LAMBDA: f64 = 0.5;

/// Descent methods that use a caller-supplied gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientMethod {
    /// Steepest descent with the step chosen by an exact line search.
    #[default]
    FastDescent,

    /// Steepest descent with a backtracking step that shrinks by `lambda`
    /// until the decrease is sufficient.
    StepDivision,
}

impl GradientMethod {
    /// Returns a short lowercase name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FastDescent => "fast-descent",
            Self::StepDivision => "step-division",
        }
    }
}

/// Derivative-free methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectMethod {
    /// Cyclic search along each coordinate axis.
    #[default]
    CoordinateDescent,
}

impl DirectMethod {
    /// Returns a short lowercase name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::CoordinateDescent => "coordinate-descent",
        }
    }
}

/// Configuration for [`super::minimize_with_gradient`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientConfig {
    /// Stopping tolerance on step length and gradient norm.
    /// Negative values are taken by magnitude.
    pub precision: f64,

    pub method: GradientMethod,

    /// Step shrink factor, strictly between 0 and 1.
    /// Only used by [`GradientMethod::StepDivision`].
    pub lambda: f64,

    /// Trial step at the start of each step-division iteration.
    pub initial_step: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            method: GradientMethod::default(),
            lambda: DEFAULT_LAMBDA,
            initial_step: INITIAL_STEP,
        }
    }
}

impl GradientConfig {
    /// Validates the config and returns the effective precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] if the precision is finer than the
    /// supported minimum. For [`GradientMethod::StepDivision`], returns
    /// [`Error::InvalidParameter`] if `lambda` is outside `(0, 1)` or
    /// `initial_step` is not positive and finite.
    pub fn validate(&self) -> Result<f64, Error> {
        let precision = validate_precision(self.precision)?;
        if self.method == GradientMethod::StepDivision {
            validate_lambda(self.lambda)?;
            validate_initial_step(self.initial_step)?;
        }
        Ok(precision)
    }
}

/// Configuration for [`super::minimize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectConfig {
    /// Stopping tolerance on sweep displacement.
    /// Negative values are taken by magnitude.
    pub precision: f64,

    pub method: DirectMethod,

    /// Per-axis step shrink factor, strictly between 0 and 1.
    pub lambda: f64,

    /// Starting step along every axis.
    pub initial_step: f64,
}

impl Default for DirectConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            method: DirectMethod::default(),
            lambda: DEFAULT_LAMBDA,
            initial_step: INITIAL_STEP,
        }
    }
}

impl DirectConfig {
    /// Validates the config and returns the effective precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] if the precision is finer than the
    /// supported minimum, or [`Error::InvalidParameter`] if `lambda` is
    /// outside `(0, 1)` or `initial_step` is not positive and finite.
    pub fn validate(&self) -> Result<f64, Error> {
        let precision = validate_precision(self.precision)?;
        validate_lambda(self.lambda)?;
        validate_initial_step(self.initial_step)?;
        Ok(precision)
    }
}

fn validate_initial_step(step: f64) -> Result<f64, Error> {
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(Error::InvalidParameter {
            name: "initial_step",
            value: step,
            reason: "must be positive and finite",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let gradient = GradientConfig::default();
        assert_eq!(gradient.method, GradientMethod::FastDescent);
        assert_eq!(gradient.validate(), Ok(DEFAULT_PRECISION));

        let direct = DirectConfig::default();
        assert_eq!(direct.method, DirectMethod::CoordinateDescent);
        assert_eq!(direct.validate(), Ok(DEFAULT_PRECISION));
    }

    #[test]
    fn fast_descent_ignores_lambda() {
        let config = GradientConfig {
            lambda: 2.0,
            ..GradientConfig::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_positive_initial_step_is_rejected() {
        let config = DirectConfig {
            initial_step: 0.0,
            ..DirectConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter {
                name: "initial_step",
                ..
            })
        ));
    }
}
