use minima_core::Point;

/// Actions an observer can take during a line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the midpoint of the current bracket.
    StopEarly,
}

/// Emitted after each bracket shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Shrink count, starting at 1.
    pub iter: usize,

    /// Bracket after the shrink.
    pub bracket: [f64; 2],

    /// The two interior probes compared in this step, left then right.
    pub probes: [Point; 2],
}
