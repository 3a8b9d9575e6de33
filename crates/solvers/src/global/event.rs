use minima_core::Point;

/// Actions an observer can take during a global search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the best point found so far.
    StopEarly,
}

/// Emitted after each objective evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Evaluations so far.
    pub evals: usize,

    /// Best point found so far.
    pub best: Point,

    /// Lowest point of the current lower envelope, when one is maintained.
    ///
    /// Always `None` for the sampling methods.
    pub lower_bound: Option<f64>,
}
