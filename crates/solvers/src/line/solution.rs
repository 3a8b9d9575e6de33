use minima_core::Point;
use tracing::debug;

use crate::eval::Counted;

use super::{Bracket, Method};

/// Indicates why the line search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket shrank below the requested precision.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of bracket shrinks.
    pub iters: usize,

    /// Number of objective evaluations, including localization.
    pub evals: usize,
}

impl Solution {
    /// Returns the reported minimum as a [`Point`].
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.objective)
    }
}

/// Evaluates the midpoint of the final bracket and builds the solution.
pub(super) fn finish<F>(
    method: Method,
    f: &mut Counted<F>,
    bracket: Bracket,
    iters: usize,
    status: Status,
) -> Solution
where
    F: FnMut(f64) -> f64,
{
    let x = bracket.midpoint();
    let objective = f.call(x);
    let evals = f.evals();
    debug!(
        method = method.name(),
        ?status,
        iters,
        evals,
        x,
        objective,
        "line search finished"
    );
    Solution {
        status,
        x,
        objective,
        iters,
        evals,
    }
}

impl From<Solution> for Point {
    fn from(solution: Solution) -> Self {
        solution.point()
    }
}
