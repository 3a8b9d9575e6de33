//! Unconstrained minimization of functions of several variables.
//!
//! # Algorithm
//!
//! With a gradient, [`minimize_with_gradient`] runs steepest descent. The
//! step along `-g` is chosen either by an exact line search
//! ([`GradientMethod::FastDescent`]) or by backtracking from a large trial
//! step ([`GradientMethod::StepDivision`]). Both stop once a step moves the
//! point less than the precision or the new gradient norm falls below it.
//!
//! Without a gradient, [`minimize`] runs cyclic coordinate descent
//! ([`DirectMethod::CoordinateDescent`]).
//!
//! The individual methods are also exposed directly ([`fast_descent`],
//! [`step_division`], [`coordinate_descent`]) for callers that already hold a
//! starting point.
//!
//! # Limitations
//!
//! - **Local minima only**: every method converges to a stationary point near
//!   the start, not necessarily the global minimum.
//! - **No iteration cap**: a function unbounded below keeps the search going.
//!   Observers can return [`Action::StopEarly`] to bound the work.
//!
//! # Observer Events
//!
//! Observers receive an [`Event`] after every descent step or coordinate
//! sweep, with a borrow of the current iterate.

mod config;
mod coordinate;
mod event;
mod fast_descent;
mod solution;
mod step_division;

#[cfg(test)]
mod tests;

pub use config::{DirectConfig, DirectMethod, GradientConfig, GradientMethod};
pub use coordinate::coordinate_descent;
pub use event::{Action, Event};
pub use fast_descent::fast_descent;
pub use solution::{Solution, Status};
pub use step_division::step_division;

use minima_core::{Observer, Vector};
use tracing::debug;

use crate::{Error, eval::Counted};

/// Minimizes `f` over `dims` variables using its `gradient`.
///
/// The search starts from `start`, or from the origin when `start` is `None`.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if the configured precision is finer
/// than the supported minimum, [`Error::InvalidParameter`] if `dims` is zero
/// or a step-division parameter is invalid, or [`Error::DimensionMismatch`]
/// if `start` or a gradient value does not have `dims` components.
pub fn minimize_with_gradient<F, G, Obs>(
    f: F,
    mut gradient: G,
    dims: usize,
    start: Option<&Vector>,
    config: &GradientConfig,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(&Vector) -> f64,
    G: FnMut(&Vector) -> Vector,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let precision = config.validate()?;
    let x = initial_point(dims, start)?;
    let mut f = Counted::new(f);

    match config.method {
        GradientMethod::FastDescent => {
            fast_descent::search(&mut f, &mut gradient, x, precision, &mut observer)
        }
        GradientMethod::StepDivision => step_division::search(
            &mut f,
            &mut gradient,
            x,
            step_division::Params {
                precision,
                lambda: config.lambda,
                initial_step: config.initial_step,
            },
            &mut observer,
        ),
    }
}

/// Minimizes `f` over `dims` variables using its `gradient`, without observer
/// support.
///
/// # Errors
///
/// Returns the same errors as [`minimize_with_gradient`].
pub fn minimize_with_gradient_unobserved<F, G>(
    f: F,
    gradient: G,
    dims: usize,
    start: Option<&Vector>,
    config: &GradientConfig,
) -> Result<Solution, Error>
where
    F: FnMut(&Vector) -> f64,
    G: FnMut(&Vector) -> Vector,
{
    minimize_with_gradient(f, gradient, dims, start, config, ())
}

/// Minimizes `f` over `dims` variables without derivatives.
///
/// The search starts from `start`, or from the origin when `start` is `None`.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if the configured precision is finer
/// than the supported minimum, [`Error::InvalidParameter`] if `dims` is zero
/// or `lambda` or `initial_step` is invalid, or [`Error::DimensionMismatch`]
/// if `start` does not have `dims` components.
pub fn minimize<F, Obs>(
    f: F,
    dims: usize,
    start: Option<&Vector>,
    config: &DirectConfig,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(&Vector) -> f64,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let precision = config.validate()?;
    let x = initial_point(dims, start)?;
    let mut f = Counted::new(f);

    match config.method {
        DirectMethod::CoordinateDescent => Ok(coordinate::search(
            &mut f,
            x,
            precision,
            config.lambda,
            config.initial_step,
            &mut observer,
        )),
    }
}

/// Minimizes `f` over `dims` variables without derivatives or observer support.
///
/// # Errors
///
/// Returns the same errors as [`minimize`].
pub fn minimize_unobserved<F>(
    f: F,
    dims: usize,
    start: Option<&Vector>,
    config: &DirectConfig,
) -> Result<Solution, Error>
where
    F: FnMut(&Vector) -> f64,
{
    minimize(f, dims, start, config, ())
}

/// Returns a copy of `start`, or the origin, after checking it has `dims` components.
fn initial_point(dims: usize, start: Option<&Vector>) -> Result<Vector, Error> {
    let origin = Vector::zeros(dims)?;
    match start {
        None => Ok(origin),
        Some(start) if start.dim() == dims => Ok(start.clone()),
        Some(start) => Err(Error::DimensionMismatch {
            expected: dims,
            actual: start.dim(),
        }),
    }
}

/// Evaluates `gradient` at `x` and checks the result has the same dimension.
fn checked_gradient<G>(gradient: &mut G, x: &Vector) -> Result<Vector, Error>
where
    G: FnMut(&Vector) -> Vector,
{
    let g = gradient(x);
    if g.dim() == x.dim() {
        Ok(g)
    } else {
        Err(Error::DimensionMismatch {
            expected: x.dim(),
            actual: g.dim(),
        })
    }
}

/// Logs the outcome and builds the solution.
fn finish(
    method: &'static str,
    x: Vector,
    objective: f64,
    iters: usize,
    evals: usize,
    status: Status,
) -> Solution {
    debug!(
        method,
        ?status,
        iters,
        evals,
        objective,
        "multivariate search finished"
    );
    Solution {
        status,
        x,
        objective,
        iters,
        evals,
    }
}
