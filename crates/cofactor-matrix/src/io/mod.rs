//! Text boundary: the bracketed matrix literal.
pub mod literal;

pub use literal::{format, parse, parse_with};
