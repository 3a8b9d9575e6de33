use minima_core::{Observer, Point};

use crate::{Error, eval::Counted};

use super::{Action, Event, Solution, Status};

/// Returns the base spacing `2 * precision / lipschitz` between samples.
///
/// A sample within half this spacing of the true minimizer is within
/// `precision` of the minimum value.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the spacing is too small to move
/// away from either endpoint in floating point, which would stall the march.
pub(super) fn sample_step(a: f64, b: f64, lipschitz: f64, precision: f64) -> Result<f64, Error> {
    let step = 2.0 * precision / lipschitz;
    if a + step == a || b - step == b {
        return Err(Error::InvalidParameter {
            name: "lipschitz",
            value: lipschitz,
            reason: "sample spacing vanishes at the magnitude of the interval",
        });
    }
    Ok(step)
}

/// Samples `[a, b]` every `step`, starting half a step in from `a`.
pub(super) fn uniform<F, Obs>(
    f: &mut Counted<F>,
    [a, b]: [f64; 2],
    step: f64,
    observer: &mut Obs,
) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    march(f, [a, b], step, observer, |_, _| step)
}

/// Samples `[a, b]` with spacing widened by how far each value sits above the
/// best so far: `step + (f(x) - f_best) / lipschitz`.
///
/// The Lipschitz bound rules out any value below `f_best` within the extra
/// distance, so no minimum is skipped.
pub(super) fn sequential<F, Obs>(
    f: &mut Counted<F>,
    [a, b]: [f64; 2],
    step: f64,
    lipschitz: f64,
    observer: &mut Obs,
) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    march(f, [a, b], step, observer, |current, best| {
        step + (current.objective - best.objective) / lipschitz
    })
}

/// Walks from `a + step / 2` to `b`, clamping the final sample to `b`.
///
/// `advance` maps the current sample and the best so far to the distance to
/// the next sample.
fn march<F, Obs, A>(
    f: &mut Counted<F>,
    [a, b]: [f64; 2],
    step: f64,
    observer: &mut Obs,
    mut advance: A,
) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
    A: FnMut(Point, Point) -> f64,
{
    let mut x = (a + 0.5 * step).min(b);
    let mut current = Point::new(x, f.call(x));
    let mut best = current;

    loop {
        let event = Event {
            evals: f.evals(),
            best,
            lower_bound: None,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution::new(Status::StoppedByObserver, best, f.evals());
        }

        if x >= b {
            return Solution::new(Status::Converged, best, f.evals());
        }

        x = (x + advance(current, best)).min(b);
        current = Point::new(x, f.call(x));
        if current.objective < best.objective {
            best = current;
        }
    }
}
