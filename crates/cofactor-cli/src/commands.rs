//! Subcommand bodies. Each returns the text to print on stdout.
use std::io::BufRead;

use anyhow::{Context, Result};

use cofactor_matrix::{Matrix, ParseOptions};

use crate::config::CliConfig;

/// Traversal order for `iter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Rows,
    Cols,
}

/// Read a matrix from a literal argument, or from one line of `stdin` when the
/// argument is `-`.
pub fn read_matrix(source: &str, options: &ParseOptions) -> Result<Matrix> {
    if source == "-" {
        let stdin = std::io::stdin();
        return read_matrix_from(stdin.lock(), options);
    }
    cofactor_matrix::parse_with(source, options)
        .with_context(|| format!("Failed to parse matrix literal: {}", source))
}

pub fn read_matrix_from<R: BufRead>(mut reader: R, options: &ParseOptions) -> Result<Matrix> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read matrix from stdin")?;
    cofactor_matrix::parse_with(&line, options)
        .with_context(|| format!("Failed to parse matrix literal: {}", line.trim_end()))
}

/// `((A * B) - (B / A^T) * sum(A)) + (B^T * A / sum(B))`
pub fn evaluate(a: &Matrix, b: &Matrix) -> cofactor_matrix::Result<Matrix> {
    let ab = (a * b)?;
    let b_over_at = (b / &a.transpose())?;
    let left = (&ab - &b_over_at.mul_scalar(a.sum()))?;
    let bt_a = (&b.transpose() * a)?;
    let right = (&bt_a / b.sum())?;
    &left + &right
}

pub fn eval(a: &Matrix, other: Option<Matrix>, config: &CliConfig) -> Result<String> {
    let (rows, cols) = a.shape();
    let b = match (other, config.seed) {
        (Some(b), _) => b,
        (None, Some(seed)) => Matrix::random_seeded(rows, cols, seed),
        (None, None) => Matrix::random(rows, cols),
    };
    log::debug!("evaluating with B = {}", b);
    let result = evaluate(a, &b).context("Failed to evaluate expression")?;

    let mut out = Vec::new();
    out.push(format!("((A * B) - (B / A^T) * sum(A)) + (B^T * A / sum(B)) = {}", result));
    if let Ok(v) = a.get(1, 2) {
        out.push(format!("A(1, 2) = {}", v));
    }
    out.push(format!("sum(A) = {}", a.sum()));
    out.push(format!("A = {}", a));
    out.push(format!("B = {}", b));
    out.push(format!("A == B: {}", a == &b));
    out.push(format!("A != B: {}", a != &b));
    out.push(format!("A^T = {}", a.transpose()));
    Ok(out.join("\n"))
}

pub fn determinant(a: &Matrix) -> Result<String> {
    let det = a.determinant().context("Failed to compute determinant")?;
    Ok(det.to_string())
}

pub fn inverse(a: &Matrix, config: &CliConfig) -> Result<String> {
    let inv = a.inverse().context("Failed to invert matrix")?;
    let check = (a * &inv)?;
    if !check.approx_eq(&Matrix::identity(a.nrows(), a.ncols()), config.tolerance) {
        log::warn!(
            "A * inverse(A) deviates from the identity by more than {}",
            config.tolerance
        );
    }
    Ok(inv.to_string())
}

pub fn transpose(a: &Matrix) -> String {
    a.transpose().to_string()
}

/// One line per row (or column), values separated by spaces.
pub fn traverse(a: &Matrix, order: Traversal) -> Result<String> {
    let mut lines = Vec::new();
    match order {
        Traversal::Rows => {
            for i in 1..=a.nrows() {
                let values: Vec<String> =
                    a.row_cursor(i)?.iter().map(|v| v.to_string()).collect();
                lines.push(values.join(" "));
            }
        }
        Traversal::Cols => {
            for j in 1..=a.ncols() {
                let values: Vec<String> =
                    a.col_cursor(j)?.iter().map(|v| v.to_string()).collect();
                lines.push(values.join(" "));
            }
        }
    }
    Ok(lines.join("\n"))
}

pub fn info(a: &Matrix) -> String {
    let (rows, cols) = a.shape();
    let mut out = vec![
        format!("shape: {}x{}", rows, cols),
        format!("sum: {}", a.sum()),
    ];
    if let Ok(v) = a.get(1, 2) {
        out.push(format!("A(1, 2): {}", v));
    }
    if let Ok(det) = a.determinant() {
        out.push(format!("determinant: {}", det));
    }
    out.join("\n")
}
