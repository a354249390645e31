//! Random-access cursors over one row or one column of a [`Matrix`].
//!
//! Both cursor kinds share one contract, parameterized by an [`Axis`]:
//!
//! - a row cursor keeps its row fixed and moves across columns (stride 1);
//! - a column cursor keeps its column fixed and moves down rows (stride `cols`).
//!
//! Stepping forward or back always moves along the cursor's own axis.
//! Positions are 1-based; `len + 1` is the past-the-end position, where
//! dereferencing yields `None`. Moves clamp to `1..=len + 1`.
//!
//! ```
//! use cofactor_matrix::Matrix;
//!
//! let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
//! let start = m.row_cursor(1).unwrap();
//! let end = start + 3;
//! let mut it = start;
//! let mut seen = Vec::new();
//! while it != end {
//!     seen.push(*it.get().unwrap());
//!     it.step_forward();
//! }
//! assert_eq!(seen, vec![1.0, 2.0, 3.0]);
//! ```

use std::fmt;
use std::iter::{FusedIterator, StepBy};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::slice::{Iter, IterMut};

use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Direction a cursor travels in.
pub trait Axis {
    /// Number of positions along the axis.
    fn len(rows: usize, cols: usize) -> usize;

    /// Number of lines a cursor can be fixed to.
    fn lines(rows: usize, cols: usize) -> usize;

    /// 0-based `(row, col)` of 0-based `(line, pos)`.
    fn coords(line: usize, pos: usize) -> (usize, usize);
}

/// Fixed row, moving across columns.
#[derive(Debug, Clone, Copy)]
pub enum RowAxis {}

/// Fixed column, moving down rows.
#[derive(Debug, Clone, Copy)]
pub enum ColAxis {}

impl Axis for RowAxis {
    fn len(_rows: usize, cols: usize) -> usize {
        cols
    }

    fn lines(rows: usize, _cols: usize) -> usize {
        rows
    }

    fn coords(line: usize, pos: usize) -> (usize, usize) {
        (line, pos)
    }
}

impl Axis for ColAxis {
    fn len(rows: usize, _cols: usize) -> usize {
        rows
    }

    fn lines(_rows: usize, cols: usize) -> usize {
        cols
    }

    fn coords(line: usize, pos: usize) -> (usize, usize) {
        (pos, line)
    }
}

pub type RowCursor<'a> = Cursor<'a, RowAxis>;
pub type ColCursor<'a> = Cursor<'a, ColAxis>;
pub type RowCursorMut<'a> = CursorMut<'a, RowAxis>;
pub type ColCursorMut<'a> = CursorMut<'a, ColAxis>;

fn clamp_move(pos: usize, by: isize, len: usize) -> usize {
    if by < 0 {
        pos.saturating_sub(by.unsigned_abs())
    } else {
        pos.saturating_add(by as usize).min(len)
    }
}

/// Read-only cursor. Cheap to copy; `cursor + k` yields a new cursor and
/// leaves the original where it was. Use [`Cursor::iter`] to walk the
/// remaining elements.
pub struct Cursor<'a, A: Axis> {
    matrix: &'a Matrix,
    line: usize,
    pos: usize,
    _axis: PhantomData<A>,
}

impl<'a, A: Axis> Clone for Cursor<'a, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A: Axis> Copy for Cursor<'a, A> {}

impl<'a, A: Axis> Cursor<'a, A> {
    fn new(matrix: &'a Matrix, line: usize, pos: usize) -> Self {
        Cursor {
            matrix,
            line,
            pos,
            _axis: PhantomData,
        }
    }

    /// 1-based row (row cursor) or column (column cursor) this cursor is fixed to.
    pub fn line(&self) -> usize {
        self.line + 1
    }

    /// 1-based position along the axis; `len() + 1` at the end.
    pub fn position(&self) -> usize {
        self.pos + 1
    }

    pub fn len(&self) -> usize {
        A::len(self.matrix.nrows(), self.matrix.ncols())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.len()
    }

    /// Element under the cursor, `None` at the end.
    pub fn get(&self) -> Option<&'a f64> {
        if self.is_end() {
            return None;
        }
        let (r, c) = A::coords(self.line, self.pos);
        let matrix: &'a Matrix = self.matrix;
        matrix.as_slice().get(matrix.offset(r, c))
    }

    pub fn step_forward(&mut self) -> &mut Self {
        self.advance(1)
    }

    pub fn step_back(&mut self) -> &mut Self {
        self.advance(-1)
    }

    /// Move by `by` positions in place.
    pub fn advance(&mut self, by: isize) -> &mut Self {
        self.pos = clamp_move(self.pos, by, self.len());
        self
    }

    /// A copy moved by `by` positions.
    pub fn offset(self, by: isize) -> Self {
        let mut moved = self;
        moved.advance(by);
        moved
    }

    /// Iterate from here to the end of the line. The cursor itself stays put.
    pub fn iter(&self) -> CursorIter<'a, A> {
        CursorIter { cursor: *self }
    }
}

impl<'a, A: Axis> PartialEq for Cursor<'a, A> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.matrix, other.matrix) && self.line == other.line && self.pos == other.pos
    }
}

impl<'a, A: Axis> Eq for Cursor<'a, A> {}

impl<'a, A: Axis> fmt::Debug for Cursor<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("line", &self.line())
            .field("position", &self.position())
            .field("len", &self.len())
            .finish()
    }
}

impl<'a, A: Axis> Add<usize> for Cursor<'a, A> {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        let mut moved = self;
        moved += rhs;
        moved
    }
}

impl<'a, A: Axis> Sub<usize> for Cursor<'a, A> {
    type Output = Self;

    fn sub(self, rhs: usize) -> Self::Output {
        let mut moved = self;
        moved -= rhs;
        moved
    }
}

impl<'a, A: Axis> AddAssign<usize> for Cursor<'a, A> {
    fn add_assign(&mut self, rhs: usize) {
        self.pos = self.pos.saturating_add(rhs).min(self.len());
    }
}

impl<'a, A: Axis> SubAssign<usize> for Cursor<'a, A> {
    fn sub_assign(&mut self, rhs: usize) {
        self.pos = self.pos.saturating_sub(rhs);
    }
}

/// Elements from a cursor's position to the end of its line.
///
/// Returned by [`Cursor::iter`]. Unlike the cursor it is not `Copy`, so a
/// `for` loop consumes this value and nothing else.
pub struct CursorIter<'a, A: Axis> {
    cursor: Cursor<'a, A>,
}

impl<'a, A: Axis> Clone for CursorIter<'a, A> {
    fn clone(&self) -> Self {
        CursorIter {
            cursor: self.cursor,
        }
    }
}

impl<'a, A: Axis> fmt::Debug for CursorIter<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorIter").field(&self.cursor).finish()
    }
}

impl<'a, A: Axis> Iterator for CursorIter<'a, A> {
    type Item = &'a f64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor.get()?;
        self.cursor.step_forward();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.len() - self.cursor.pos;
        (remaining, Some(remaining))
    }
}

impl<'a, A: Axis> ExactSizeIterator for CursorIter<'a, A> {}

impl<'a, A: Axis> FusedIterator for CursorIter<'a, A> {}

/// Cursor with write access to the underlying storage.
pub struct CursorMut<'a, A: Axis> {
    matrix: &'a mut Matrix,
    line: usize,
    pos: usize,
    _axis: PhantomData<A>,
}

impl<'a, A: Axis> CursorMut<'a, A> {
    fn new(matrix: &'a mut Matrix, line: usize, pos: usize) -> Self {
        CursorMut {
            matrix,
            line,
            pos,
            _axis: PhantomData,
        }
    }

    pub fn line(&self) -> usize {
        self.line + 1
    }

    pub fn position(&self) -> usize {
        self.pos + 1
    }

    pub fn len(&self) -> usize {
        A::len(self.matrix.nrows(), self.matrix.ncols())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.len()
    }

    fn flat(&self) -> Option<usize> {
        if self.is_end() {
            return None;
        }
        let (r, c) = A::coords(self.line, self.pos);
        Some(self.matrix.offset(r, c))
    }

    pub fn get(&self) -> Option<f64> {
        self.flat().map(|idx| self.matrix.as_slice()[idx])
    }

    pub fn get_mut(&mut self) -> Option<&mut f64> {
        let idx = self.flat()?;
        self.matrix.as_mut_slice().get_mut(idx)
    }

    /// Overwrite the element under the cursor.
    pub fn set(&mut self, value: f64) -> Result<()> {
        let (rows, cols) = self.matrix.shape();
        let (r, c) = A::coords(self.line, self.pos);
        match self.get_mut() {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MatrixError::IndexOutOfRange {
                row: r + 1,
                col: c + 1,
                rows,
                cols,
            }),
        }
    }

    pub fn step_forward(&mut self) -> &mut Self {
        self.advance(1)
    }

    pub fn step_back(&mut self) -> &mut Self {
        self.advance(-1)
    }

    pub fn advance(&mut self, by: isize) -> &mut Self {
        self.pos = clamp_move(self.pos, by, self.len());
        self
    }

    /// Read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, A> {
        Cursor::new(&*self.matrix, self.line, self.pos)
    }
}

impl<'a, A: Axis> PartialEq for CursorMut<'a, A> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(&*self.matrix, &*other.matrix)
            && self.line == other.line
            && self.pos == other.pos
    }
}

impl<'a, A: Axis> fmt::Debug for CursorMut<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("line", &self.line())
            .field("position", &self.position())
            .field("len", &self.len())
            .finish()
    }
}

impl<'a, A: Axis> AddAssign<usize> for CursorMut<'a, A> {
    fn add_assign(&mut self, rhs: usize) {
        self.pos = self.pos.saturating_add(rhs).min(self.len());
    }
}

impl<'a, A: Axis> SubAssign<usize> for CursorMut<'a, A> {
    fn sub_assign(&mut self, rhs: usize) {
        self.pos = self.pos.saturating_sub(rhs);
    }
}

impl Matrix {
    /// Validate a 1-based line and a 1-based start position (`len + 1` allowed).
    fn cursor_origin<A: Axis>(&self, line: usize, start: usize) -> Result<(usize, usize)> {
        let (rows, cols) = self.shape();
        let lines = A::lines(rows, cols);
        let len = A::len(rows, cols);
        if line == 0 || line > lines || start == 0 || start > len + 1 {
            let (r, c) = A::coords(line, start);
            return Err(MatrixError::IndexOutOfRange {
                row: r,
                col: c,
                rows,
                cols,
            });
        }
        Ok((line - 1, start - 1))
    }

    /// Cursor over the 1-based `row`, starting at column 1.
    pub fn row_cursor(&self, row: usize) -> Result<RowCursor<'_>> {
        self.row_cursor_at(row, 1)
    }

    /// Cursor over the 1-based `row`, starting at column `col` (`cols + 1` is the end).
    pub fn row_cursor_at(&self, row: usize, col: usize) -> Result<RowCursor<'_>> {
        let (line, pos) = self.cursor_origin::<RowAxis>(row, col)?;
        Ok(Cursor::new(self, line, pos))
    }

    /// Past-the-end cursor of the 1-based `row`.
    pub fn row_end(&self, row: usize) -> Result<RowCursor<'_>> {
        self.row_cursor_at(row, self.ncols() + 1)
    }

    /// Cursor over the 1-based `col`, starting at row 1.
    pub fn col_cursor(&self, col: usize) -> Result<ColCursor<'_>> {
        self.col_cursor_at(col, 1)
    }

    /// Cursor over the 1-based `col`, starting at row `row` (`rows + 1` is the end).
    pub fn col_cursor_at(&self, col: usize, row: usize) -> Result<ColCursor<'_>> {
        let (line, pos) = self.cursor_origin::<ColAxis>(col, row)?;
        Ok(Cursor::new(self, line, pos))
    }

    pub fn col_end(&self, col: usize) -> Result<ColCursor<'_>> {
        self.col_cursor_at(col, self.nrows() + 1)
    }

    pub fn row_cursor_mut(&mut self, row: usize) -> Result<RowCursorMut<'_>> {
        let (line, pos) = self.cursor_origin::<RowAxis>(row, 1)?;
        Ok(CursorMut::new(self, line, pos))
    }

    pub fn col_cursor_mut(&mut self, col: usize) -> Result<ColCursorMut<'_>> {
        let (line, pos) = self.cursor_origin::<ColAxis>(col, 1)?;
        Ok(CursorMut::new(self, line, pos))
    }

    /// Elements of the 1-based `row`, walking contiguous memory.
    pub fn row_values(&self, row: usize) -> Result<Iter<'_, f64>> {
        Ok(self.row(row)?.iter())
    }

    /// Elements of the 1-based `col`, walking memory with stride `cols`.
    pub fn col_values(&self, col: usize) -> Result<StepBy<Iter<'_, f64>>> {
        let (line, _) = self.cursor_origin::<ColAxis>(col, 1)?;
        let cols = self.ncols();
        Ok(self.as_slice()[line..].iter().step_by(cols))
    }

    pub fn row_values_mut(&mut self, row: usize) -> Result<IterMut<'_, f64>> {
        let (line, _) = self.cursor_origin::<RowAxis>(row, 1)?;
        let cols = self.ncols();
        Ok(self.as_mut_slice()[line * cols..(line + 1) * cols].iter_mut())
    }

    pub fn col_values_mut(&mut self, col: usize) -> Result<StepBy<IterMut<'_, f64>>> {
        let (line, _) = self.cursor_origin::<ColAxis>(col, 1)?;
        let cols = self.ncols();
        Ok(self.as_mut_slice()[line..].iter_mut().step_by(cols))
    }
}
