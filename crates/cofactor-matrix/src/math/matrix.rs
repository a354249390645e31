use std::ops::{Index, IndexMut};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MatrixError, Result};

/// Dense row-major matrix of `f64`.
///
/// The matrix owns its buffer; `clone()` is always a deep copy. A matrix with
/// zero rows or zero columns is normalized to the empty `0x0` matrix, which
/// holds no storage at all.
///
/// Element addressing on the public API is 1-based: `(1, 1)` is the top-left
/// element and `(rows, cols)` the bottom-right one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a `rows x cols` matrix with every element set to `0.0`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, 0.0)
    }

    /// Create a `rows x cols` matrix with every element set to `value`.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if `rows * cols` overflows `usize`,
    /// the same way `Vec` does.
    pub fn from_elem(rows: usize, cols: usize, value: f64) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        let len = match rows.checked_mul(cols) {
            Some(len) => len,
            None => panic!("capacity overflow: {}x{} matrix", rows, cols),
        };
        Matrix {
            data: vec![value; len],
            rows,
            cols,
        }
    }

    /// The empty `0x0` matrix.
    pub fn empty() -> Self {
        Matrix {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::Dimension {
                op: "from_shape_vec",
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        if rows == 0 || cols == 0 {
            return Ok(Self::empty());
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Build a matrix from nested rows.
    ///
    /// Rows may differ in length: the column count is the longest row and
    /// shorter rows are padded with `0.0`.
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[f64]>,
    {
        let cols = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut matrix = Self::new(rows.len(), cols);
        if matrix.is_empty() {
            return matrix;
        }
        for (i, row) in rows.iter().enumerate() {
            let start = matrix.offset(i, 0);
            let row = row.as_ref();
            matrix.data[start..start + row.len()].copy_from_slice(row);
        }
        matrix
    }

    /// All elements `0.0`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols)
    }

    /// `1.0` on the main diagonal up to `min(rows, cols)`, `0.0` elsewhere.
    pub fn identity(rows: usize, cols: usize) -> Self {
        let mut identity = Self::new(rows, cols);
        for i in 0..rows.min(cols) {
            let idx = identity.offset(i, i);
            identity.data[idx] = 1.0;
        }
        identity
    }

    /// Elements drawn uniformly from `[0.0, 1.0)` using the thread-local generator.
    pub fn random(rows: usize, cols: usize) -> Self {
        Self::random_with(rows, cols, &mut rand::thread_rng())
    }

    /// Reproducible variant of [`Matrix::random`].
    pub fn random_seeded(rows: usize, cols: usize, seed: u64) -> Self {
        Self::random_with(rows, cols, &mut StdRng::seed_from_u64(seed))
    }

    /// Elements drawn uniformly from `[0.0, 1.0)` using the supplied generator.
    pub fn random_with<R>(rows: usize, cols: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut matrix = Self::new(rows, cols);
        for v in matrix.data.iter_mut() {
            *v = rng.gen::<f64>();
        }
        matrix
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize> {
        if row == 0 || col == 0 || row > self.rows || col > self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.offset(row - 1, col - 1))
    }

    /// Element at 1-based `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.checked_offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Writable element at 1-based `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        let idx = self.checked_offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Contiguous slice of the 1-based `row`.
    pub fn row(&self, row: usize) -> Result<&[f64]> {
        let start = self.checked_offset(row, 1)?;
        Ok(&self.data[start..start + self.cols])
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Copy out as nested rows.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }

    /// Total of all elements; `0.0` for the empty matrix.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn transpose(&self) -> Matrix {
        let mut transposed = Matrix::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let idx = transposed.offset(j, i);
                transposed.data[idx] = self.data[self.offset(i, j)];
            }
        }
        transposed
    }

    /// The matrix with 1-based `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        self.checked_offset(row, col)?;
        Ok(self.minor_at(row - 1, col - 1))
    }

    /// 0-based minor used by the determinant recursion.
    pub(crate) fn minor_at(&self, row: usize, col: usize) -> Matrix {
        if self.rows <= 1 || self.cols <= 1 {
            return Matrix::empty();
        }
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != row) {
            let src = self.row_slice(i);
            data.extend_from_slice(&src[..col]);
            data.extend_from_slice(&src[col + 1..]);
        }
        Matrix {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Same shape and every pair of elements within `tol` of each other.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    pub fn mapv<F>(&self, f: F) -> Matrix
    where
        F: FnMut(&f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Combine two equally shaped matrices element by element.
    pub(crate) fn zip_with<F>(&self, other: &Matrix, op: &'static str, mut f: F) -> Result<Matrix>
    where
        F: FnMut(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::Dimension {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Matrix::from_rows(&rows)
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    fn from(rows: [[f64; C]; R]) -> Self {
        Matrix::from_rows(&rows)
    }
}

/// 1-based indexing; panics when out of range, like slice indexing.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.checked_offset(index.0, index.1) {
            Ok(idx) => &self.data[idx],
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.checked_offset(index.0, index.1) {
            Ok(idx) => &mut self.data[idx],
            Err(e) => panic!("{}", e),
        }
    }
}
