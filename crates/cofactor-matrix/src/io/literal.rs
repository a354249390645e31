//! Bracketed matrix literals: `[[1, 2, 3], [4, 5, 6]]`.
//!
//! A row is the text following a `[` up to the next `]`. Values inside a row
//! are separated by commas; whitespace around them is ignored. Anything
//! before the first `[` and between rows is ignored, and an outer `[...]`
//! wrapper is optional.
//!
//! A value is a plain decimal number: an optional sign, digits and an optional
//! fractional part (`-1.5`, `+2`, `.25`). Exponents, `inf` and `NaN` are not
//! numbers here.
//!
//! The default [`ParseOptions`] are lenient: unparsable tokens are skipped
//! and short rows are zero-padded to the widest row.
use std::fmt;
use std::str::FromStr;

use crate::config::{ParseMode, ParseOptions, RaggedRows};
use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Parse with the default (lenient, padding) options.
pub fn parse(text: &str) -> Result<Matrix> {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Matrix> {
    let strict = options.mode == ParseMode::Strict;
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for segment in text.split('[').skip(1) {
        let (body, closed) = match segment.find(']') {
            Some(end) => (&segment[..end], true),
            None => (segment, false),
        };
        if !closed && body.trim().is_empty() {
            // `[` opening straight onto another `[`
            continue;
        }
        if !closed && strict {
            return Err(MatrixError::parse(format!(
                "unterminated row {}",
                rows.len() + 1
            )));
        }
        if body.trim().is_empty() {
            if strict {
                return Err(MatrixError::parse(format!("empty row {}", rows.len() + 1)));
            }
            log::debug!("skipping empty row");
            continue;
        }

        let mut row = Vec::new();
        for token in body.split(',').map(str::trim) {
            match parse_decimal(token) {
                Some(v) => row.push(v),
                None if strict => {
                    return Err(MatrixError::parse(format!(
                        "invalid number {:?} in row {}",
                        token,
                        rows.len() + 1
                    )));
                }
                None => log::debug!("skipping unparsable token {:?}", token),
            }
        }
        if row.is_empty() {
            log::debug!("skipping row without numbers: {:?}", body);
            continue;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(MatrixError::parse("no rows found"));
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if let Some((idx, short)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        match options.ragged {
            RaggedRows::Reject => {
                return Err(MatrixError::parse(format!(
                    "row {} has length {}, expected {}",
                    idx + 1,
                    short.len(),
                    width
                )));
            }
            RaggedRows::Pad => log::debug!("padding ragged rows to width {}", width),
        }
    }

    Ok(Matrix::from_rows(&rows))
}

/// `[+-]?(digits[.digits?] | .digits)`, parsed as `f64`.
fn parse_decimal(token: &str) -> Option<f64> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (unsigned, ""),
    };
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (int.is_empty() && frac.is_empty()) || !digits(int) || !digits(frac) {
        return None;
    }
    token.parse().ok()
}

/// Render as `[[a, b], [c, d]]`; the empty matrix renders as `[]`.
pub fn format(matrix: &Matrix) -> String {
    matrix.to_string()
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.nrows() {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, value) in self.row_slice(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
