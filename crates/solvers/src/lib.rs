//! Solvers for unconstrained minimization.
//!
//! Every solver takes a caller-supplied objective, a `Config` holding its
//! tolerances and method selector, and an [`Observer`] that sees each
//! iteration. Configs are validated before any evaluation, so a bad precision
//! or parameter never costs an objective call.
//!
//! # Modules
//!
//! - [`line`]: bracket localization plus dichotomy, golden-section, and
//!   Fibonacci search for unimodal functions of one variable
//! - [`global`]: Lipschitz-bound global search over a finite interval
//! - [`multivariate`]: steepest descent, step division, and coordinate descent
//!   over [`Vector`] arguments
//!
//! [`Observer`]: minima_core::Observer
//! [`Vector`]: minima_core::Vector

mod error;
mod eval;

pub use error::Error;

pub mod global;
pub mod line;
pub mod multivariate;
