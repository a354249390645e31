//! The dense [`Matrix`] type and everything computed from it.
//!
//! Storage and construction live in `matrix`, arithmetic in `ops`,
//! determinant/inverse in `determinant`, and row/column traversal in `cursor`.
pub mod cursor;
pub mod determinant;
pub mod matrix;
pub mod ops;

pub use determinant::COFACTOR_WARN_ORDER;
pub use matrix::Matrix;
