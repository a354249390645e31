//! Determinant and inverse by cofactor expansion.
//!
//! The determinant recurses along the first column:
//!
//! ```text
//! det(A) = sum_i (-1)^i * a[i][0] * det(minor(i, 0))
//! ```
//!
//! This costs O(n!) and is meant for small matrices; orders above
//! [`COFACTOR_WARN_ORDER`] log a warning before the expansion starts.
//!
//! The inverse is the adjugate scaled by `1 / det`: build the cofactor
//! matrix, divide every entry by the determinant, then transpose.
//!
//! ```
//! use cofactor_matrix::Matrix;
//!
//! let a = Matrix::from([[4.0, 7.0], [2.0, 6.0]]);
//! assert_eq!(a.determinant().unwrap(), 10.0);
//! let inv = a.inverse().unwrap();
//! assert!((&a * &inv).unwrap().approx_eq(&Matrix::identity(2, 2), 1e-12));
//! ```

use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Orders above this log a warning about factorial cost.
pub const COFACTOR_WARN_ORDER: usize = 10;

impl Matrix {
    fn require_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }

    /// Determinant by recursive cofactor expansion. `0x0` yields `0.0`.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square()?;
        log::trace!("determinant of {}x{} matrix", self.nrows(), self.ncols());
        if warns_factorial_cost(self.nrows()) {
            log::warn!(
                "cofactor expansion on a {}x{} matrix runs in factorial time",
                self.nrows(),
                self.ncols()
            );
        }
        Ok(expand(self))
    }

    /// Signed minors: entry `(i, j)` is `(-1)^(i+j) * det(minor(i, j))`.
    pub fn cofactor_matrix(&self) -> Result<Matrix> {
        self.require_square()?;
        Ok(cofactors(self))
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Inverse via the adjugate. Fails with `SingularMatrix` when the
    /// determinant is exactly `0.0`.
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::SingularMatrix);
        }
        log::trace!("inverting {}x{} matrix, det = {}", self.nrows(), self.ncols(), det);
        // `0.0 / -det` is `-0.0`; adding `0.0` folds it back to `0.0`.
        let scaled = cofactors(self).div_scalar(det)?.mapv(|v| v + 0.0);
        Ok(scaled.transpose())
    }

    /// `self * inverse(divisor)`.
    pub fn checked_div(&self, divisor: &Matrix) -> Result<Matrix> {
        let inv = divisor.inverse()?;
        self.matmul(&inv)
    }
}

fn warns_factorial_cost(order: usize) -> bool {
    order > COFACTOR_WARN_ORDER
}

fn expand(m: &Matrix) -> f64 {
    let n = m.nrows();
    let a = m.as_slice();
    match n {
        0 => 0.0,
        1 => a[0],
        2 => a[0] * a[3] - a[2] * a[1],
        _ => {
            let mut det = 0.0;
            let mut sign = 1.0;
            for i in 0..n {
                det += sign * a[m.offset(i, 0)] * expand(&m.minor_at(i, 0));
                sign = -sign;
            }
            det
        }
    }
}

fn cofactors(m: &Matrix) -> Matrix {
    let n = m.nrows();
    // The empty minor of a 1x1 matrix contributes 1.
    if n == 1 {
        return Matrix::identity(1, 1);
    }
    let mut out = Matrix::new(n, n);
    for i in 0..n {
        for j in 0..n {
            let minor = expand(&m.minor_at(i, j));
            // `0.0 - x` rather than `-x` keeps zero cofactors at `+0.0`
            out[(i + 1, j + 1)] = if (i + j) % 2 == 1 { 0.0 - minor } else { minor };
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinant_3x3() {
        let m = Matrix::from([[2.0, 6.0, 7.0], [1.0, 0.0, 8.0], [4.0, 3.0, 6.0]]);
        assert_eq!(m.determinant().unwrap(), 129.0);
    }

    #[test]
    fn determinant_small_cases() {
        assert_eq!(Matrix::empty().determinant().unwrap(), 0.0);
        assert_eq!(Matrix::from([[5.0]]).determinant().unwrap(), 5.0);
        assert_eq!(
            Matrix::from([[1.0, 2.0], [3.0, 4.0]]).determinant().unwrap(),
            -2.0
        );
    }

    #[test]
    fn factorial_cost_warning_threshold() {
        assert!(!warns_factorial_cost(0));
        assert!(!warns_factorial_cost(COFACTOR_WARN_ORDER));
        assert!(warns_factorial_cost(COFACTOR_WARN_ORDER + 1));
    }

    #[test]
    fn non_square_is_rejected() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(
            m.determinant(),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
        assert!(matches!(m.inverse(), Err(MatrixError::NotSquare { .. })));
    }

    #[test]
    fn inverse_1x1() {
        let inv = Matrix::from([[4.0]]).inverse().unwrap();
        assert_eq!(inv, Matrix::from([[0.25]]));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Matrix::from([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(m.inverse(), Err(MatrixError::SingularMatrix));
        assert_eq!(Matrix::empty().inverse(), Err(MatrixError::SingularMatrix));
    }

    #[test]
    fn zero_entries_are_never_negative_zero() {
        let no_negative_zero =
            |m: &Matrix| m.as_slice().iter().all(|v| *v != 0.0 || v.is_sign_positive());

        let id = Matrix::identity(3, 3);
        assert!(no_negative_zero(&id.cofactor_matrix().unwrap()));
        assert!(no_negative_zero(&id.inverse().unwrap()));

        let swap = Matrix::from([[0.0, 1.0], [1.0, 0.0]]);
        let inv = swap.inverse().unwrap();
        assert_eq!(inv, swap);
        assert!(no_negative_zero(&inv));
        assert_eq!(inv.to_string(), "[[0, 1], [1, 0]]");
    }

    #[test]
    fn adjugate_2x2() {
        let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(
            m.adjugate().unwrap(),
            Matrix::from([[4.0, -2.0], [-3.0, 1.0]])
        );
    }
}
