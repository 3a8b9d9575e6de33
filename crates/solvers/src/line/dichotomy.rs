use minima_core::{Observer, Point};
use tracing::trace;

use crate::{Error, error::validate_precision, eval::Counted};

use super::{
    Action, Bracket, Event, Method, Solution, Status,
    solution::finish,
};

/// Minimizes `f` on `bracket` by dichotomy.
///
/// Each step evaluates two probes a third of `precision` apart around the
/// midpoint and keeps the half holding the smaller value. Ties keep the left
/// half. The search stops once the bracket is narrower than `precision`, or
/// than [`Bracket::resolution`] when the endpoints are too large in magnitude
/// for `precision` to be resolved. Near such endpoints the probes are spread
/// to a quarter of that resolution so they stay distinct.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if `precision` is finer than the
/// supported minimum.
pub fn dichotomy<F, Obs>(
    f: F,
    bracket: [f64; 2],
    precision: f64,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let precision = validate_precision(precision)?;
    let mut f = Counted::new(f);
    Ok(search(
        &mut f,
        Bracket::new(bracket),
        precision,
        &mut observer,
    ))
}

pub(super) fn search<F, Obs>(
    f: &mut Counted<F>,
    mut bracket: Bracket,
    precision: f64,
    observer: &mut Obs,
) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let tolerance = bracket.tolerance(precision);
    let delta = (precision / 3.0).max(0.25 * bracket.resolution());
    let mut iters = 0;

    while bracket.width() >= tolerance {
        let width = bracket.width();
        let sum = bracket.left() + bracket.right();
        let x1 = 0.5 * (sum - delta);
        let x2 = 0.5 * (sum + delta);
        let f1 = f.call(x1);
        let f2 = f.call(x2);

        if f1 <= f2 {
            bracket.shrink_right(x2);
        } else {
            bracket.shrink_left(x1);
        }
        iters += 1;

        let event = Event {
            iter: iters,
            bracket: bracket.as_array(),
            probes: [Point::new(x1, f1), Point::new(x2, f2)],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(
                Method::Dichotomy,
                f,
                bracket,
                iters,
                Status::StoppedByObserver,
            );
        }

        if bracket.width() >= width {
            trace!(x1, x2, width, "dichotomy probes no longer shrink the bracket");
            break;
        }
    }

    finish(Method::Dichotomy, f, bracket, iters, Status::Converged)
}
