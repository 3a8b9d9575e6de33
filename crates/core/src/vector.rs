use std::{
    fmt,
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

use thiserror::Error;

/// Errors that can occur when constructing or combining vectors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A vector must have at least one component.
    #[error("vector must have at least one component")]
    Empty,

    /// Binary arithmetic on vectors of different dimensions.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// A dense real vector with a fixed, non-zero dimension.
///
/// `Vector` is a plain value: cloning copies the components, so mutating a
/// clone never affects the original. Arithmetic between vectors requires equal
/// dimensions. The fallible [`try_add`](Self::try_add) and
/// [`try_sub`](Self::try_sub) report a mismatch as an error; the operator
/// impls panic on one instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Creates a vector of `dim` zeros.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Empty`] if `dim` is zero.
    pub fn zeros(dim: usize) -> Result<Self, VectorError> {
        Self::filled(dim, 0.0)
    }

    /// Creates a vector of `dim` components all equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Empty`] if `dim` is zero.
    pub fn filled(dim: usize, value: f64) -> Result<Self, VectorError> {
        Self::try_from(vec![value; dim])
    }

    /// Returns the number of components.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Returns an iterator over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.components.iter()
    }

    /// Consumes the vector and returns its components.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.components
    }

    /// Returns the squared Euclidean norm.
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum()
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns a copy with component `index` replaced by `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn with_component(&self, index: usize, value: f64) -> Self {
        let mut next = self.clone();
        next[index] = value;
        next
    }

    /// Adds two vectors component-wise.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn try_add(&self, rhs: &Vector) -> Result<Vector, VectorError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Subtracts `rhs` from `self` component-wise.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn try_sub(&self, rhs: &Vector) -> Result<Vector, VectorError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Returns the vector scaled by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Vector {
        self.map(|c| c * factor)
    }

    fn map(&self, op: impl Fn(f64) -> f64) -> Vector {
        Vector {
            components: self.components.iter().map(|&c| op(c)).collect(),
        }
    }

    fn zip_with(&self, rhs: &Vector, op: impl Fn(f64, f64) -> f64) -> Result<Vector, VectorError> {
        if self.dim() != rhs.dim() {
            return Err(VectorError::DimensionMismatch {
                left: self.dim(),
                right: rhs.dim(),
            });
        }

        Ok(Vector {
            components: self
                .components
                .iter()
                .zip(&rhs.components)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        if components.is_empty() {
            return Err(VectorError::Empty);
        }
        Ok(Self { components })
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Self::try_from(components.to_vec())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.components[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn add(self, rhs: &Vector) -> Vector {
        self.try_add(rhs).unwrap_or_else(|error| panic!("{error}"))
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn sub(self, rhs: &Vector) -> Vector {
        self.try_sub(rhs).unwrap_or_else(|error| panic!("{error}"))
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|c| -c)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        self.scale(factor)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        self.scale(factor)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Vector {
        vector.scale(self)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector.scale(self)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}
