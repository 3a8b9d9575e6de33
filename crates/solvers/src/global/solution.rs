use minima_core::Point;

/// Indicates why the global search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The interval was covered, or the envelope gap fell below the precision.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// The piecewise-linear search reached its support point cap.
    SupportLimit,
}

/// The result of a global search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best sample found.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of objective evaluations.
    pub evals: usize,
}

impl Solution {
    pub(super) fn new(status: Status, best: Point, evals: usize) -> Self {
        Self {
            status,
            x: best.x,
            objective: best.objective,
            evals,
        }
    }

    /// Returns the reported minimum as a [`Point`].
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.objective)
    }
}

impl From<Solution> for Point {
    fn from(solution: Solution) -> Self {
        solution.point()
    }
}
