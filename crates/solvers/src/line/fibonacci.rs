use minima_core::{Observer, Point};
use tracing::trace;

use crate::{Error, error::validate_precision, eval::Counted};

use super::{
    Action, Bracket, Event, Method, Solution, Status,
    solution::finish,
};

/// Minimizes `f` on `bracket` by Fibonacci search.
///
/// The number of shrinks is fixed up front from the smallest Fibonacci number
/// reaching `2 * width / precision`, and probes sit at ratios of consecutive
/// Fibonacci numbers so each shrink reuses one of them. The final bracket is
/// no wider than `precision`, or than [`Bracket::resolution`] when that is
/// coarser.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if `precision` is finer than the
/// supported minimum.
pub fn fibonacci<F, Obs>(
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
    let precision = bracket.tolerance(precision);
    let width = bracket.width();
    let fib = sequence_reaching(2.0 * width / precision);
    let n = fib.len() - 1;
    if width < precision || n < 3 {
        return finish(Method::Fibonacci, f, bracket, 0, Status::Converged);
    }

    let probe = |bracket: &Bracket, num: usize, den: usize| {
        bracket.left() + fib[num] / fib[den] * bracket.width()
    };

    let mut x1 = bracket.left() + fib[n - 2] / fib[n] * width;
    let mut x2 = bracket.left() + fib[n - 1] / fib[n] * width;
    let mut f1 = f.call(x1);
    let mut f2 = f.call(x2);
    let mut iters = 0;

    for k in (3..=n).rev() {
        let probes = [Point::new(x1, f1), Point::new(x2, f2)];

        if f1 <= f2 {
            bracket.shrink_right(x2);
            x2 = x1;
            f2 = f1;
            x1 = probe(&bracket, k - 3, k - 1);
            f1 = f.call(x1);
        } else {
            bracket.shrink_left(x1);
            x1 = x2;
            f1 = f2;
            x2 = probe(&bracket, k - 2, k - 1);
            f2 = f.call(x2);
        }

        if x1 > x2 {
            trace!(x1, x2, "fibonacci probes crossed, resetting");
            x1 = probe(&bracket, k - 3, k - 1);
            x2 = probe(&bracket, k - 2, k - 1);
            f1 = f.call(x1);
            f2 = f.call(x2);
        }
        iters += 1;

        let event = Event {
            iter: iters,
            bracket: bracket.as_array(),
            probes,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(
                Method::Fibonacci,
                f,
                bracket,
                iters,
                Status::StoppedByObserver,
            );
        }
    }

    finish(Method::Fibonacci, f, bracket, iters, Status::Converged)
}

/// Returns `[F0, F1, …, Fn]` with `F0 = F1 = 1` and `Fn` the first term `>= target`.
fn sequence_reaching(target: f64) -> Vec<f64> {
    let mut fib = vec![1.0, 1.0];
    let mut last = 1.0;
    while last < target {
        last = fib[fib.len() - 1] + fib[fib.len() - 2];
        fib.push(last);
    }
    fib
}
