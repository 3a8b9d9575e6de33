use minima_core::Vector;

/// Actions an observer can take during a multivariate search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the current iterate.
    StopEarly,
}

/// Emitted after each descent step or coordinate sweep.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration or sweep count, starting at 1.
    pub iter: usize,

    /// The iterate after this step.
    pub x: &'a Vector,

    /// Distance moved in this step.
    pub displacement: f64,

    /// Gradient norm at `x`, for the gradient methods.
    pub gradient_norm: Option<f64>,
}
