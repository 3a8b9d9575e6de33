use minima_core::{Observer, Point};
use tracing::trace;

use crate::{Error, error::validate_precision, eval::Counted};

use super::{
    Action, Bracket, Event, Method, Solution, Status,
    solution::finish,
};

/// Fraction of the width between each outer bound and its nearer probe.
///
/// Equal to `(3 - √5) / 2`, or `1 - φ⁻¹` for the golden ratio φ.
const RATIO: f64 = 0.381_966_011_250_105_1;

/// Minimizes `f` on `bracket` by golden-section search.
///
/// Two interior probes sit at golden-ratio positions, so each shrink reuses
/// one of them and costs a single new evaluation. Ties move the right bound
/// in. The search stops once the bracket is narrower than `precision`, or
/// than [`Bracket::resolution`] for endpoints too large in magnitude to
/// resolve `precision`.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if `precision` is finer than the
/// supported minimum.
pub fn golden_section<F, Obs>(
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
    bracket: Bracket,
    precision: f64,
    observer: &mut Obs,
) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let tolerance = bracket.tolerance(precision);
    if bracket.width() < tolerance {
        return finish(Method::GoldenSection, f, bracket, 0, Status::Converged);
    }

    let mut golden = GoldenBracket::new(bracket);
    let mut left = Point::new(golden.inner_left, f.call(golden.inner_left));
    let mut right = Point::new(golden.inner_right, f.call(golden.inner_right));
    let mut iters = 0;

    loop {
        let probes = [left, right];
        let width = golden.outer.width();

        if left.objective <= right.objective {
            golden.shrink_right();
            right = left;
            left = Point::new(golden.inner_left, f.call(golden.inner_left));
        } else {
            golden.shrink_left();
            left = right;
            right = Point::new(golden.inner_right, f.call(golden.inner_right));
        }

        if golden.is_crossed() {
            trace!(
                left = golden.inner_left,
                right = golden.inner_right,
                "golden-section probes crossed, resetting"
            );
            golden.reset();
            left = Point::new(golden.inner_left, f.call(golden.inner_left));
            right = Point::new(golden.inner_right, f.call(golden.inner_right));
        }
        iters += 1;

        let event = Event {
            iter: iters,
            bracket: golden.outer.as_array(),
            probes,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(
                Method::GoldenSection,
                f,
                golden.outer,
                iters,
                Status::StoppedByObserver,
            );
        }

        let stalled = golden.outer.width() >= width;
        if stalled {
            trace!(width, "golden-section bracket stopped shrinking");
        }
        if stalled || golden.outer.width() < tolerance {
            return finish(
                Method::GoldenSection,
                f,
                golden.outer,
                iters,
                Status::Converged,
            );
        }
    }
}

/// Golden-section bracket.
///
/// Maintains the outer interval and two interior probes placed symmetrically,
/// each [`RATIO`] of the width in from its nearer bound.
#[derive(Debug, Clone, Copy)]
struct GoldenBracket {
    outer: Bracket,
    inner_left: f64,
    inner_right: f64,
}

impl GoldenBracket {
    fn new(outer: Bracket) -> Self {
        let mut golden = Self {
            outer,
            inner_left: 0.0,
            inner_right: 0.0,
        };
        golden.reset();
        golden
    }

    /// Recomputes both probes from the outer bounds.
    fn reset(&mut self) {
        self.inner_left = self.outer.left() + RATIO * self.outer.width();
        self.inner_right = self.mirror(self.inner_left);
    }

    /// Returns the reflection of `x` about the midpoint of the outer bounds.
    fn mirror(&self, x: f64) -> f64 {
        self.outer.left() + self.outer.right() - x
    }

    /// Shrinks to `[left, inner_right]`; the old `inner_left` becomes `inner_right`.
    fn shrink_right(&mut self) {
        self.outer.shrink_right(self.inner_right);
        self.inner_right = self.inner_left;
        self.inner_left = self.mirror(self.inner_right);
    }

    /// Shrinks to `[inner_left, right]`; the old `inner_right` becomes `inner_left`.
    fn shrink_left(&mut self) {
        self.outer.shrink_left(self.inner_left);
        self.inner_left = self.inner_right;
        self.inner_right = self.mirror(self.inner_left);
    }

    /// Returns true once rounding has pushed the probes out of order.
    fn is_crossed(&self) -> bool {
        self.inner_left > self.inner_right
    }
}
