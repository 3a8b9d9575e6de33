use minima_core::DEFAULT_PRECISION;

use crate::{Error, error::validate_precision};

/// Global search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Evenly spaced samples `2 * precision / lipschitz` apart.
    Uniform,

    /// Samples whose spacing grows with how far each value sits above the
    /// best value so far.
    Sequential,

    /// Refines a sawtooth lower envelope built from support points.
    #[default]
    PiecewiseLinear,
}

impl Method {
    /// Returns a short lowercase name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Sequential => "sequential",
            Self::PiecewiseLinear => "piecewise-linear",
        }
    }
}

/// Where [`Method::PiecewiseLinear`] places a new support point inside the
/// pair with the lowest envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Uniformly at random, drawn from the caller's generator.
    #[default]
    Random,

    /// At the pair midpoint.
    Midpoint,

    /// At the bottom of the envelope, where the two cones intersect.
    EnvelopeMinimum,
}

/// Configuration for the global search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Lipschitz constant of the objective over the interval.
    pub lipschitz: f64,

    /// Target gap between the best value found and the true minimum.
    /// Negative values are taken by magnitude.
    pub precision: f64,

    pub method: Method,
    pub placement: Placement,

    /// Cap on support points for [`Method::PiecewiseLinear`].
    pub max_support_points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lipschitz: 1.0,
            precision: DEFAULT_PRECISION,
            method: Method::default(),
            placement: Placement::default(),
            max_support_points: 10_000,
        }
    }
}

impl Config {
    /// Validates the config and returns the effective precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] if the precision is finer than the
    /// supported minimum, or [`Error::InvalidParameter`] if the Lipschitz
    /// constant is not positive and finite or the support cap is below 2.
    pub fn validate(&self) -> Result<f64, Error> {
        let precision = validate_precision(self.precision)?;

        if !self.lipschitz.is_finite() || self.lipschitz <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "lipschitz",
                value: self.lipschitz,
                reason: "must be positive and finite",
            });
        }

        if self.max_support_points < 2 {
            return Err(Error::InvalidParameter {
                name: "max_support_points",
                value: self.max_support_points as f64,
                reason: "must be at least 2",
            });
        }

        Ok(precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert_eq!(config.method, Method::PiecewiseLinear);
        assert_eq!(config.placement, Placement::Random);
        assert_eq!(config.validate(), Ok(DEFAULT_PRECISION));
    }

    #[test]
    fn rejects_bad_lipschitz() {
        for lipschitz in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                lipschitz,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidParameter {
                    name: "lipschitz",
                    ..
                })
            ));
        }
    }

    #[test]
    fn rejects_small_support_cap() {
        let config = Config {
            max_support_points: 1,
            ..Config::default()
        };

        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter {
                name: "max_support_points",
                ..
            })
        ));
    }
}
