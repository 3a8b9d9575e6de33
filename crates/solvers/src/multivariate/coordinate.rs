use minima_core::{Observer, Vector};

use crate::{
    Error,
    error::{validate_lambda, validate_precision},
    eval::Counted,
    line::INITIAL_STEP,
};

use super::{Action, DirectMethod, Event, Solution, Status, finish};

/// Probe offset, in units of precision, used to pick a direction along an axis.
const PROBE_OFFSET: f64 = 3.0;

/// Minimizes `f` from `start` by cyclic coordinate descent.
///
/// Each sweep visits every axis in turn. Probes at `±3·precision` pick the
/// downhill direction, then the coordinate steps by that axis's step size,
/// which shrinks by `lambda` after every step that fails to improve `f`.
/// Sweeps continue until one moves the point less than `precision / 2`.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if `precision` is finer than the
/// supported minimum, or [`Error::InvalidParameter`] if `lambda` is outside
/// `(0, 1)`.
pub fn coordinate_descent<F, Obs>(
    f: F,
    start: &Vector,
    precision: f64,
    lambda: f64,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(&Vector) -> f64,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let precision = validate_precision(precision)?;
    let lambda = validate_lambda(lambda)?;
    let mut f = Counted::new(f);
    Ok(search(
        &mut f,
        start.clone(),
        precision,
        lambda,
        INITIAL_STEP,
        &mut observer,
    ))
}

pub(super) fn search<F, Obs>(
    f: &mut Counted<F>,
    mut x: Vector,
    precision: f64,
    lambda: f64,
    initial_step: f64,
    observer: &mut Obs,
) -> Solution
where
    F: FnMut(&Vector) -> f64,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let method = DirectMethod::CoordinateDescent.name();
    let probe = PROBE_OFFSET * precision;

    let mut steps = vec![initial_step; x.dim()];
    let mut fx = f.call(&x);
    let mut sweeps = 0;

    loop {
        sweeps += 1;
        let sweep_start = x.clone();

        for (i, step) in steps.iter_mut().enumerate() {
            let base = x[i];
            let forward = f.call(&x.with_component(i, base + probe));
            let backward = f.call(&x.with_component(i, base - probe));
            let direction = direction(backward - forward);

            loop {
                x[i] = base + *step * direction;
                let f_trial = f.call(&x);
                if f_trial < fx {
                    fx = f_trial;
                    break;
                }
                *step *= lambda;
                if *step < 0.5 * precision {
                    x[i] = base;
                    break;
                }
            }
        }

        let displacement = (&x - &sweep_start).norm();

        let event = Event {
            iter: sweeps,
            x: &x,
            displacement,
            gradient_norm: None,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(
                method,
                x,
                fx,
                sweeps,
                f.evals(),
                Status::StoppedByObserver,
            );
        }

        if displacement < 0.5 * precision {
            return finish(method, x, fx, sweeps, f.evals(), Status::Converged);
        }
    }
}

/// Returns the sign of the downhill slope estimate, or zero if flat.
fn direction(backward_minus_forward: f64) -> f64 {
    if backward_minus_forward > 0.0 {
        1.0
    } else if backward_minus_forward < 0.0 {
        -1.0
    } else {
        0.0
    }
}
