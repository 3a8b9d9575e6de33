//! Core types for the minima optimization toolkit.
//!
//! This crate defines the values that solvers consume and return:
//!
//! - [`Vector`]: a dense real vector with a fixed, non-zero dimension
//! - [`Point`]: an `(x, objective)` pair returned by one-dimensional solvers
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! It also fixes the precision limits every solver validates against.

mod observer;
mod point;
mod precision;
mod vector;

pub use observer::Observer;
pub use point::Point;
pub use precision::{DEFAULT_PRECISION, MIN_PRECISION};
pub use vector::{Vector, VectorError};
