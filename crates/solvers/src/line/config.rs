use minima_core::DEFAULT_PRECISION;

use crate::{Error, error::validate_precision};

/// Bracket-shrinking algorithm used by [`super::minimize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Two probes straddling the midpoint, halving the bracket each step.
    #[default]
    Dichotomy,

    /// Probes at golden-ratio positions, one new evaluation per step.
    GoldenSection,

    /// Probes at Fibonacci ratios, with the step count fixed up front.
    Fibonacci,

    /// Successive parabolic interpolation. Not implemented.
    Parabolic,
}

impl Method {
    /// Returns a short lowercase name for logs and errors.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dichotomy => "dichotomy",
            Self::GoldenSection => "golden-section",
            Self::Fibonacci => "fibonacci",
            Self::Parabolic => "parabolic",
        }
    }
}

/// Configuration for the line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Target bracket width. Negative values are taken by magnitude.
    pub precision: f64,
    pub method: Method,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            method: Method::default(),
        }
    }
}

impl Config {
    /// Validates the config and returns the effective precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] if the precision is finer than the
    /// supported minimum, or [`Error::Unimplemented`] for [`Method::Parabolic`].
    pub fn validate(&self) -> Result<f64, Error> {
        let precision = validate_precision(self.precision)?;
        if self.method == Method::Parabolic {
            return Err(Error::Unimplemented {
                method: self.method.name(),
            });
        }
        Ok(precision)
    }
}
