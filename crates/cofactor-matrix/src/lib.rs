//! cofactor-matrix: dense `f64` matrices for small linear-algebra workloads.
//!
//! This crate provides an owned row-major [`Matrix`] with checked arithmetic,
//! a recursive cofactor-expansion determinant, an adjugate-based inverse,
//! a bracketed text literal (`[[1, 2], [3, 4]]`) parser/formatter, and
//! row/column cursors that read and write through to the storage.
//!
//! Public element addressing is 1-based everywhere: `(1, 1)` is the top-left
//! element. Every fallible operation returns [`Result`] instead of silently
//! substituting a value.
pub mod config;
pub mod error;
pub mod io;
pub mod math;

pub use config::{ParseMode, ParseOptions, RaggedRows};
pub use error::{MatrixError, Result};
pub use io::literal::{format, parse, parse_with};
pub use math::cursor::{
    Axis, ColAxis, ColCursor, ColCursorMut, Cursor, CursorIter, CursorMut, RowAxis, RowCursor,
    RowCursorMut,
};
pub use math::Matrix;
