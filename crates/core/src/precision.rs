/// The finest tolerance any solver accepts.
///
/// Below this, bracket widths and step sizes approach the spacing of `f64`
/// values near typical arguments and the stopping criteria stop being
/// reachable.
pub const MIN_PRECISION: f64 = 1e-10;

/// The tolerance solvers use when the caller does not pick one.
pub const DEFAULT_PRECISION: f64 = 1e-7;
