use thiserror::Error;

/// All errors returned by `cofactor-matrix`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes do not agree for the requested operation.
    #[error("dimension mismatch in {op}: left is {left:?}, right is {right:?}")]
    Dimension {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Determinant or inverse requested for a non-square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The determinant is zero, so no inverse exists.
    #[error("singular matrix")]
    SingularMatrix,

    /// Scalar division by `0.0`.
    #[error("division by zero")]
    DivisionByZero,

    /// Text could not be read as a matrix literal.
    #[error("parse error: {reason}")]
    Parse { reason: String },

    /// A 1-based index fell outside `[1, rows]` x `[1, cols]`.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl MatrixError {
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        MatrixError::Parse {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout `cofactor-matrix`.
pub type Result<T> = std::result::Result<T, MatrixError>;
