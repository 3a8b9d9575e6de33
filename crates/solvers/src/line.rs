//! Line search for unimodal functions of one variable.
//!
//! # Algorithm
//!
//! [`minimize`] first localizes a bracket around the minimum by probing from
//! `x = 0` (see [`localize`]), then shrinks that bracket with the configured
//! [`Method`] until its width drops below the requested precision. The result
//! is the midpoint of the final bracket.
//!
//! The bracketed searches are also exposed directly ([`dichotomy`],
//! [`golden_section`], [`fibonacci`], and the dispatcher [`minimize_in`]) for
//! callers that already know an interval containing the minimum.
//!
//! # Limitations
//!
//! - **Unimodal assumption**: if the function has several local minima on the
//!   bracket, any one of them may be returned.
//! - **Unbounded localization**: bracketing walks with a fixed step until the
//!   function turns upward, so a function without a minimum keeps it walking.
//! - **Float spacing**: far from the origin adjacent `f64` values are further
//!   apart than a fine precision. The searches then stop at
//!   [`Bracket::resolution`], a few float spacings, instead of `precision`.
//! - **Dichotomy probe spacing**: dichotomy probes stay `precision / 3` apart
//!   however wide the bracket is. If `f` carries a large constant offset, the
//!   rounding of its values can misorder probes that close at fine precision.
//!   Golden-section and Fibonacci probes scale with the bracket instead.
//!
//! # Observer Events
//!
//! The bracketed searches emit one [`Event`] per shrink. Observers can return
//! [`Action::StopEarly`] to halt and take the midpoint of the current bracket.
//! Bracket localization is not observed.

mod bracket;
mod config;
mod dichotomy;
mod event;
mod fibonacci;
mod golden_section;
mod solution;


pub use bracket::{Bracket, INITIAL_STEP, localize};
pub use config::{Config, Method};
pub use dichotomy::dichotomy;
pub use event::{Action, Event};
pub use fibonacci::fibonacci;
pub use golden_section::golden_section;
pub use solution::{Solution, Status};

use minima_core::{MIN_PRECISION, Observer};
use tracing::trace;

use crate::{Error, eval::Counted};

/// Finds the minimum of `f` by localizing a bracket and shrinking it.
///
/// The bracket is localized at the finest supported tolerance
/// ([`MIN_PRECISION`]) regardless of the configured precision.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if the configured precision is finer
/// than [`MIN_PRECISION`], or [`Error::Unimplemented`] if the configured
/// method has no algorithm.
pub fn minimize<F, Obs>(f: F, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let precision = config.validate()?;
    let mut f = Counted::new(f);

    let bracket = localize(|x| f.call(x), MIN_PRECISION)?;
    if bracket.is_degenerate() {
        let x = bracket.left();
        trace!(x, "degenerate bracket, minimum at probe origin");
        let objective = f.call(x);
        return Ok(Solution {
            status: Status::Converged,
            x,
            objective,
            iters: 0,
            evals: f.evals(),
        });
    }

    search(config.method, &mut f, bracket, precision, &mut observer)
}

/// Finds the minimum of `f` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`minimize`].
pub fn minimize_unobserved<F>(f: F, config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
{
    minimize(f, config, ())
}

/// Finds the minimum of `f` on a known bracket with the configured method.
///
/// If the bracket endpoints are reversed, they are swapped.
///
/// # Errors
///
/// Returns [`Error::InvalidPrecision`] if the configured precision is finer
/// than [`MIN_PRECISION`], or [`Error::Unimplemented`] if the configured
/// method has no algorithm.
pub fn minimize_in<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let precision = config.validate()?;
    let mut f = Counted::new(f);
    search(
        config.method,
        &mut f,
        Bracket::new(bracket),
        precision,
        &mut observer,
    )
}

/// Dispatches to the bracketed search for `method`.
fn search<F, Obs>(
    method: Method,
    f: &mut Counted<F>,
    bracket: Bracket,
    precision: f64,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    match method {
        Method::Dichotomy => Ok(dichotomy::search(f, bracket, precision, observer)),
        Method::GoldenSection => Ok(golden_section::search(f, bracket, precision, observer)),
        Method::Fibonacci => Ok(fibonacci::search(f, bracket, precision, observer)),
        Method::Parabolic => Err(Error::Unimplemented {
            method: method.name(),
        }),
    }
}
