//! Global minimization of Lipschitz-continuous functions on an interval.
//!
//! # Algorithm
//!
//! If `|f(x) - f(y)| <= L * |x - y|` on `[a, b]`, a sample at `x` rules out any
//! value below `f(x) - L * d` within distance `d`. Each [`Method`] uses that
//! bound to cover the interval:
//!
//! - [`Method::Uniform`] samples on a grid fine enough that every point is
//!   within `precision / L` of a sample.
//! - [`Method::Sequential`] walks the same way but lengthens each step by how
//!   far the current value sits above the best.
//! - [`Method::PiecewiseLinear`] keeps a sawtooth lower envelope over sorted
//!   support points and refines the pair whose envelope dips lowest, until
//!   the best value is within `precision` of the envelope.
//!
//! # Limitations
//!
//! - **Correct constant required**: an underestimated Lipschitz constant can
//!   skip the true minimum without any error being reported.
//! - **Sampling cost**: the sampling methods evaluate on the order of
//!   `L * (b - a) / precision` points.
//!
//! # Observer Events
//!
//! Observers receive an [`Event`] after every evaluation and can return
//! [`Action::StopEarly`] to halt with the best point found so far.

mod config;
mod event;
mod piecewise;
mod sampling;
mod solution;

#[cfg(test)]
mod tests;

pub use config::{Config, Method, Placement};
pub use event::{Action, Event};
pub use solution::{Solution, Status};

use minima_core::{Observer, Point};
use rand::Rng;
use tracing::debug;

use crate::{Error, eval::Counted};

/// Finds the global minimum of `f` on `interval`.
///
/// The endpoints are swapped if reversed. A zero-width interval evaluates
/// its single point. `rng` is only drawn from by [`Placement::Random`].
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if the configured precision is finer
/// than the supported minimum, or [`Error::InvalidParameter`] if the
/// Lipschitz constant, support cap, or interval is invalid.
pub fn minimize<F, R, Obs>(
    f: F,
    interval: [f64; 2],
    config: &Config,
    rng: &mut R,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
    R: Rng + ?Sized,
    Obs: Observer<Event, Action>,
{
    let precision = config.validate()?;
    let (a, b) = validate_interval(interval)?;
    let mut f = Counted::new(f);

    #[allow(clippy::float_cmp)]
    let solution = if a == b {
        let point = Point::new(a, f.call(a));
        Solution::new(Status::Converged, point, f.evals())
    } else {
        match config.method {
            Method::Uniform => {
                let step = sampling::sample_step(a, b, config.lipschitz, precision)?;
                sampling::uniform(&mut f, [a, b], step, &mut observer)
            }
            Method::Sequential => {
                let step = sampling::sample_step(a, b, config.lipschitz, precision)?;
                sampling::sequential(&mut f, [a, b], step, config.lipschitz, &mut observer)
            }
            Method::PiecewiseLinear => piecewise::search(
                &mut f,
                [a, b],
                config.lipschitz,
                precision,
                config.placement,
                config.max_support_points,
                rng,
                &mut observer,
            ),
        }
    };

    debug!(
        method = config.method.name(),
        status = ?solution.status,
        evals = solution.evals,
        x = solution.x,
        objective = solution.objective,
        "global search finished"
    );
    Ok(solution)
}

/// Finds the global minimum of `f` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`minimize`].
pub fn minimize_unobserved<F, R>(
    f: F,
    interval: [f64; 2],
    config: &Config,
    rng: &mut R,
) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
    R: Rng + ?Sized,
{
    minimize(f, interval, config, rng, ())
}

/// Validates interval endpoints and returns them in `left <= right` order.
fn validate_interval(interval: [f64; 2]) -> Result<(f64, f64), Error> {
    let [left, right] = interval;

    for value in [left, right] {
        if !value.is_finite() {
            return Err(Error::InvalidParameter {
                name: "interval",
                value,
                reason: "endpoints must be finite",
            });
        }
    }

    if left <= right {
        Ok((left, right))
    } else {
        Ok((right, left))
    }
}
