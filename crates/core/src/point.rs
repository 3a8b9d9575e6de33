use std::{
    fmt,
    ops::{Add, Sub},
};

/// A one-dimensional argument paired with the objective value there.
///
/// Equality compares both fields within [`f64::EPSILON`], so points computed
/// along slightly different floating-point paths still compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    /// The argument.
    pub x: f64,

    /// The objective value at `x`.
    pub objective: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }

    /// Returns the Euclidean norm of `(x, objective)`.
    ///
    /// Combined with subtraction this gives the distance between two points,
    /// which is how results are usually compared against an expected optimum.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.objective)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() <= f64::EPSILON
            && (self.objective - other.objective).abs() <= f64::EPSILON
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.objective + rhs.objective)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.objective - rhs.objective)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.objective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn equality_tolerates_rounding() {
        let a = Point::new(0.1 + 0.2, 1.0);
        let b = Point::new(0.3, 1.0);

        assert_eq!(a, b);
        assert_ne!(a, Point::new(0.3, 1.0 + 1e-9));
    }

    #[test]
    fn difference_norm_measures_distance() {
        let actual = Point::new(4.0, 7.0);
        let expected = Point::new(1.0, 3.0);

        assert_relative_eq!((actual - expected).norm(), 5.0);
        assert_eq!(actual, expected + Point::new(3.0, 4.0));
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
