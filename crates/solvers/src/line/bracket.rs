use tracing::trace;

use crate::{Error, error::validate_precision};

/// Initial step magnitude used when localizing a bracket from `x = 0`.
pub const INITIAL_STEP: f64 = 1e6;

/// Narrowest bracket width, in units of `f64::EPSILON` times the larger
/// endpoint magnitude, that the bracketed searches still try to split.
const RESOLUTION: f64 = 16.0;

/// An interval `[left, right]` believed to contain a minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    /// Creates a bracket from two endpoints.
    ///
    /// If the endpoints are reversed, they are swapped.
    #[must_use]
    pub fn new(bracket: [f64; 2]) -> Self {
        let [a, b] = bracket;
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        Self { left, right }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns true if both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right
    }

    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the narrowest width this bracket can be split to in `f64`.
    ///
    /// Near large abscissas adjacent floats are further apart than any fine
    /// precision, so probes closer than this would round onto each other.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        RESOLUTION * f64::EPSILON * self.left.abs().max(self.right.abs())
    }

    /// Returns the width at which a search on this bracket stops: `precision`,
    /// or the bracket's [`resolution`](Self::resolution) if that is coarser.
    pub(super) fn tolerance(&self, precision: f64) -> f64 {
        precision.max(self.resolution())
    }

    /// Moves the right endpoint inward to `x`.
    pub(super) fn shrink_right(&mut self, x: f64) {
        self.right = x;
    }

    /// Moves the left endpoint inward to `x`.
    pub(super) fn shrink_left(&mut self, x: f64) {
        self.left = x;
    }
}

/// Localizes a bracket around a minimum of `f` by probing outward from `x = 0`.
///
/// Probing starts with a step of [`INITIAL_STEP`] and halves it each round,
/// trying both directions, until `f` decreases along one of them or the step
/// falls below `eps`. The search then walks with that fixed step while `f`
/// keeps decreasing and returns the two points around the turn.
///
/// If no descent direction is found, the degenerate bracket `[0, 0]` is
/// returned: `x = 0` is then a minimum to within `eps`.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if `eps` is finer than the supported
/// minimum.
pub fn localize<F>(mut f: F, eps: f64) -> Result<Bracket, Error>
where
    F: FnMut(f64) -> f64,
{
    let eps = validate_precision(eps)?;

    let mut x1 = 0.0;
    let mut f1 = f(x1);
    let mut h = INITIAL_STEP;
    let mut x2;
    let mut f2;

    loop {
        h *= 0.5;
        x2 = x1 + h;
        f2 = f(x2);
        if f1 <= f2 {
            h = -h;
            x2 = x1 + h;
            f2 = f(x2);
        }
        if f1 > f2 || h.abs() < eps {
            break;
        }
    }

    if h.abs() <= eps {
        trace!(step = h, "no descent direction from origin");
        return Ok(Bracket::new([x1, x1]));
    }

    loop {
        x1 = x2;
        f1 = f2;
        x2 = x1 + h;
        f2 = f(x2);
        if f2 > f1 {
            break;
        }
    }

    Ok(Bracket::new([x1 - h, x2]))
}
