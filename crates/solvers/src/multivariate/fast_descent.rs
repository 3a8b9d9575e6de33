use minima_core::{Observer, Vector};

use crate::{
    Error,
    error::validate_precision,
    eval::Counted,
    line::{self, Method as LineMethod},
};

use super::{Action, Event, GradientMethod, Solution, Status, checked_gradient, finish};

/// Minimizes `f` from `start` by steepest descent with exact line search.
///
/// Each iteration moves along `-g` by the step that minimizes
/// `s ↦ f(x - s·g)`, found by a dichotomy line search at `precision`.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if `precision` is finer than the
/// supported minimum, or [`Error::DimensionMismatch`] if `gradient` returns a
/// vector whose dimension differs from the iterate's.
pub fn fast_descent<F, G, Obs>(
    f: F,
    mut gradient: G,
    start: &Vector,
    precision: f64,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(&Vector) -> f64,
    G: FnMut(&Vector) -> Vector,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let precision = validate_precision(precision)?;
    let mut f = Counted::new(f);
    search(
        &mut f,
        &mut gradient,
        start.clone(),
        precision,
        &mut observer,
    )
}

pub(super) fn search<F, G, Obs>(
    f: &mut Counted<F>,
    gradient: &mut G,
    mut x: Vector,
    precision: f64,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: FnMut(&Vector) -> f64,
    G: FnMut(&Vector) -> Vector,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let line_config = line::Config {
        precision,
        method: LineMethod::Dichotomy,
    };

    let mut g = checked_gradient(gradient, &x)?;
    let mut iters = 0;

    if g.norm() <= precision {
        return Ok(conclude(f, x, iters, Status::Converged));
    }

    loop {
        iters += 1;

        let step = line::minimize_unobserved(|s| f.call(&(&x - &(s * &g))), &line_config)?;
        let next = x.try_sub(&g.scale(step.x))?;
        let displacement = next.try_sub(&x)?.norm();
        x = next;
        g = checked_gradient(gradient, &x)?;
        let gradient_norm = g.norm();

        let event = Event {
            iter: iters,
            x: &x,
            displacement,
            gradient_norm: Some(gradient_norm),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(conclude(f, x, iters, Status::StoppedByObserver));
        }

        if displacement < precision || gradient_norm < precision {
            return Ok(conclude(f, x, iters, Status::Converged));
        }
    }
}

fn conclude<F>(f: &mut Counted<F>, x: Vector, iters: usize, status: Status) -> Solution
where
    F: FnMut(&Vector) -> f64,
{
    let objective = f.call(&x);
    finish(
        GradientMethod::FastDescent.name(),
        x,
        objective,
        iters,
        f.evals(),
        status,
    )
}
