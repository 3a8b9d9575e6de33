use minima_core::{Observer, Point};
use rand::Rng;
use tracing::warn;

use crate::eval::Counted;

use super::{Action, Event, Placement, Solution, Status};

/// Sorted support points with the lower envelope of each adjacent pair.
///
/// Between supports `p` and `q` the Lipschitz condition bounds `f` below by
/// two cones of slope `lipschitz`, one from each support. The lowest point of
/// that sawtooth is the pair's envelope minimum.
#[derive(Debug)]
struct Envelope {
    lipschitz: f64,
    supports: Vec<Point>,

    /// `lows[i]` is the envelope minimum between `supports[i]` and `supports[i + 1]`.
    lows: Vec<f64>,
}

impl Envelope {
    fn new(left: Point, right: Point, lipschitz: f64) -> Self {
        let mut envelope = Self {
            lipschitz,
            supports: vec![left, right],
            lows: Vec::new(),
        };
        envelope.lows.push(envelope.pair_low(0));
        envelope
    }

    fn len(&self) -> usize {
        self.supports.len()
    }

    fn pair_low(&self, i: usize) -> f64 {
        let (p, q) = (self.supports[i], self.supports[i + 1]);
        0.5 * (p.objective + q.objective) - 0.5 * self.lipschitz * (q.x - p.x)
    }

    /// Returns the index and value of the pair with the lowest envelope.
    fn lowest(&self) -> (usize, f64) {
        self.lows
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::INFINITY), |(j, low), (i, value)| {
                if value < low { (i, value) } else { (j, low) }
            })
    }

    /// Returns where the two cones of pair `i` intersect, clamped into the pair.
    fn cone_intersection(&self, i: usize) -> f64 {
        let (p, q) = (self.supports[i], self.supports[i + 1]);
        let x = 0.5 * (p.x + q.x) + (p.objective - q.objective) / (2.0 * self.lipschitz);
        x.clamp(p.x, q.x)
    }

    /// Inserts `point` inside pair `i` and refreshes the two new pair envelopes.
    fn split(&mut self, i: usize, point: Point) {
        self.supports.insert(i + 1, point);
        self.lows[i] = self.pair_low(i);
        self.lows.insert(i + 1, self.pair_low(i + 1));
    }
}

/// Runs the piecewise-linear search on `[a, b]`.
#[allow(clippy::too_many_arguments)]
pub(super) fn search<F, R, Obs>(
    f: &mut Counted<F>,
    [a, b]: [f64; 2],
    lipschitz: f64,
    precision: f64,
    placement: Placement,
    max_support_points: usize,
    rng: &mut R,
    observer: &mut Obs,
) -> Solution
where
    F: FnMut(f64) -> f64,
    R: Rng + ?Sized,
    Obs: Observer<Event, Action>,
{
    let left = Point::new(a, f.call(a));
    let event = Event {
        evals: f.evals(),
        best: left,
        lower_bound: None,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Solution::new(Status::StoppedByObserver, left, f.evals());
    }

    let right = Point::new(b, f.call(b));
    let mut best = if right.objective < left.objective {
        right
    } else {
        left
    };
    let mut envelope = Envelope::new(left, right, lipschitz);

    loop {
        let (i, low) = envelope.lowest();

        let event = Event {
            evals: f.evals(),
            best,
            lower_bound: Some(low),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution::new(Status::StoppedByObserver, best, f.evals());
        }

        if best.objective - low < precision {
            return Solution::new(Status::Converged, best, f.evals());
        }

        if envelope.len() >= max_support_points {
            warn!(
                supports = envelope.len(),
                gap = best.objective - low,
                "support point cap reached before the envelope gap closed"
            );
            return Solution::new(Status::SupportLimit, best, f.evals());
        }

        let (p, q) = (envelope.supports[i].x, envelope.supports[i + 1].x);
        let x = match placement {
            Placement::Random => p + rng.r#gen::<f64>() * (q - p),
            Placement::Midpoint => 0.5 * (p + q),
            Placement::EnvelopeMinimum => envelope.cone_intersection(i),
        };

        let point = Point::new(x, f.call(x));
        if point.objective < best.objective {
            best = point;
        }
        envelope.split(i, point);
    }
}
