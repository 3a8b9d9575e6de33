use minima_core::Vector;

/// Indicates why a multivariate search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The step length or gradient norm fell below the precision.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// Step division shrank its trial step to `precision / 2` without finding
    /// a point that does not increase the objective. The gradient norm may
    /// still be large.
    Stalled,
}

/// The result of a multivariate search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Final iterate.
    pub x: Vector,

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of descent steps or coordinate sweeps.
    pub iters: usize,

    /// Number of objective evaluations, including those made by inner line
    /// searches.
    pub evals: usize,
}
