use minima_core::{Observer, Vector};

use crate::{
    Error,
    error::{validate_lambda, validate_precision},
    eval::Counted,
    line::INITIAL_STEP,
};

use super::{Action, Event, GradientMethod, Solution, Status, checked_gradient, finish};

/// Minimizes `f` from `start` by steepest descent with step division.
///
/// Each iteration tries a step of [`INITIAL_STEP`] along `-g` and multiplies
/// it by `lambda` until `f(x - h·g) - f(x) <= -lambda·h·‖g‖²` or the step
/// drops to `precision / 2`. If the trial at that floor still increases `f`,
/// the search stops at the current point with [`Status::Stalled`].
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if `precision` is finer than the
/// supported minimum, [`Error::InvalidParameter`] if `lambda` is outside
/// `(0, 1)`, or [`Error::DimensionMismatch`] if `gradient` returns a vector
/// whose dimension differs from the iterate's.
pub fn step_division<F, G, Obs>(
    f: F,
    mut gradient: G,
    start: &Vector,
    precision: f64,
    lambda: f64,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(&Vector) -> f64,
    G: FnMut(&Vector) -> Vector,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let precision = validate_precision(precision)?;
    let lambda = validate_lambda(lambda)?;
    let mut f = Counted::new(f);
    search(
        &mut f,
        &mut gradient,
        start.clone(),
        Params {
            precision,
            lambda,
            initial_step: INITIAL_STEP,
        },
        &mut observer,
    )
}

/// Validated step-division parameters.
#[derive(Debug, Clone, Copy)]
pub(super) struct Params {
    pub(super) precision: f64,
    pub(super) lambda: f64,
    pub(super) initial_step: f64,
}

pub(super) fn search<F, G, Obs>(
    f: &mut Counted<F>,
    gradient: &mut G,
    mut x: Vector,
    params: Params,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: FnMut(&Vector) -> f64,
    G: FnMut(&Vector) -> Vector,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let Params {
        precision,
        lambda,
        initial_step,
    } = params;
    let method = GradientMethod::StepDivision.name();

    let mut fx = f.call(&x);
    let mut g = checked_gradient(gradient, &x)?;
    let mut iters = 0;

    if g.norm() <= precision {
        return Ok(finish(method, x, fx, iters, f.evals(), Status::Converged));
    }

    loop {
        iters += 1;

        let g_norm_squared = g.norm_squared();
        let mut h = initial_step;
        let (trial, f_trial) = loop {
            let trial = x.try_sub(&g.scale(h))?;
            let f_trial = f.call(&trial);
            if f_trial - fx <= -lambda * h * g_norm_squared || h <= 0.5 * precision {
                break (trial, f_trial);
            }
            h *= lambda;
        };

        if f_trial > fx {
            return Ok(finish(method, x, fx, iters, f.evals(), Status::Stalled));
        }
        let displacement = trial.try_sub(&x)?.norm();
        x = trial;
        fx = f_trial;
        g = checked_gradient(gradient, &x)?;
        let gradient_norm = g.norm();

        let event = Event {
            iter: iters,
            x: &x,
            displacement,
            gradient_norm: Some(gradient_norm),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(
                method,
                x,
                fx,
                iters,
                f.evals(),
                Status::StoppedByObserver,
            ));
        }

        if displacement < precision || gradient_norm < precision {
            return Ok(finish(method, x, fx, iters, f.evals(), Status::Converged));
        }
    }
}
