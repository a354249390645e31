//! Arithmetic on [`Matrix`].
//!
//! Every operation returns a new matrix. Matrix-matrix operators and scalar
//! division produce `Result<Matrix>` so shape mismatches and division by zero
//! surface to the caller; the remaining scalar operators cannot fail and
//! return `Matrix` directly.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{MatrixError, Result};
use crate::math::Matrix;

impl Matrix {
    /// Elementwise sum; both operands must have the same shape.
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference; both operands must have the same shape.
    pub fn checked_sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Matrix product, `self.cols` must equal `other.rows`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols() != other.nrows() {
            return Err(MatrixError::Dimension {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (n, m) = (self.nrows(), other.ncols());
        let mut product = Matrix::new(n, m);
        if product.is_empty() {
            return Ok(product);
        }
        for (i, out) in product.as_mut_slice().chunks_mut(m).enumerate() {
            for (p, &a) in self.row_slice(i).iter().enumerate() {
                for (o, &b) in out.iter_mut().zip(other.row_slice(p)) {
                    *o += a * b;
                }
            }
        }
        Ok(product)
    }

    pub fn add_scalar(&self, scalar: f64) -> Matrix {
        self.mapv(|v| v + scalar)
    }

    pub fn sub_scalar(&self, scalar: f64) -> Matrix {
        self.mapv(|v| v - scalar)
    }

    pub fn mul_scalar(&self, scalar: f64) -> Matrix {
        self.mapv(|v| v * scalar)
    }

    /// Divide every element by `scalar`; fails on `0.0`.
    pub fn div_scalar(&self, scalar: f64) -> Result<Matrix> {
        if scalar == 0.0 {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.mapv(|v| v / scalar))
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.mapv(|v| -v)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        self.matmul(rhs)
    }
}

/// `A / B` is `A * inverse(B)`.
impl<'a, 'b> Div<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn div(self, rhs: &'b Matrix) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl Add<f64> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: f64) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl Sub<f64> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: f64) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl Div<f64> for &Matrix {
    type Output = Result<Matrix>;

    fn div(self, rhs: f64) -> Self::Output {
        self.div_scalar(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_shape_mismatch_is_an_error() {
        let a = Matrix::zeros(2, 2);
        let b = Matrix::zeros(3, 3);
        match &a + &b {
            Err(MatrixError::Dimension { op, left, right }) => {
                assert_eq!(op, "add");
                assert_eq!(left, (2, 2));
                assert_eq!(right, (3, 3));
            }
            other => panic!("expected dimension error, got {:?}", other),
        }
    }

    #[test]
    fn matmul_rectangular() {
        let a = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = (&a * &b).unwrap();
        assert_eq!(c, Matrix::from([[58.0, 64.0], [139.0, 154.0]]));
    }

    #[test]
    fn matmul_mismatch_is_an_error() {
        let a = Matrix::zeros(2, 3);
        assert!(matches!(
            a.matmul(&a),
            Err(MatrixError::Dimension { op: "multiply", .. })
        ));
    }

    #[test]
    fn scalar_division_by_zero() {
        let a = Matrix::from_elem(2, 2, 3.0);
        assert_eq!(&a / 0.0, Err(MatrixError::DivisionByZero));
        assert_eq!((&a / 3.0).unwrap(), Matrix::from_elem(2, 2, 1.0));
    }

    #[test]
    fn negate_and_scalars() {
        let a = Matrix::from([[1.0, -2.0]]);
        assert_eq!(-&a, Matrix::from([[-1.0, 2.0]]));
        assert_eq!(&a + 1.0, Matrix::from([[2.0, -1.0]]));
        assert_eq!(&a - 1.0, Matrix::from([[0.0, -3.0]]));
        assert_eq!(&a * 2.0, Matrix::from([[2.0, -4.0]]));
    }
}
