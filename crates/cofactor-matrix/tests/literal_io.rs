//! Integration tests for the bracketed text literal (parse / format).

use cofactor_matrix::{
    format, parse, parse_with, Matrix, MatrixError, ParseMode, ParseOptions, RaggedRows,
};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_square_literal() {
    let m = parse("[[2, 6, 7], [1, 0, 8], [4, 3, 6]]").unwrap();
    assert_eq!(
        m,
        Matrix::from([[2.0, 6.0, 7.0], [1.0, 0.0, 8.0], [4.0, 3.0, 6.0]])
    );
}

#[test]
fn parse_signs_fractions_and_whitespace() {
    let m = parse("  [[ -1.5 ,+2, 3.25 ],\n [0.5,  -0 , 7 ]]  ").unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.row(1).unwrap(), &[-1.5, 2.0, 3.25]);
    assert_eq!(m[(2, 1)], 0.5);
}

#[test]
fn parse_through_from_str() {
    let m: Matrix = "[[1, 2], [3, 4]]".parse().unwrap();
    assert_eq!(m.determinant().unwrap(), -2.0);
}

#[test]
fn text_between_rows_is_ignored() {
    let m = parse("A = [1, 2] and [3, 4];").unwrap();
    assert_eq!(m, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
}

#[test]
fn lenient_skips_tokens_and_empty_rows() {
    let m = parse("[[1, two, 3], [], [4, 5, 6,]]").unwrap();
    assert_eq!(m, Matrix::from([[1.0, 3.0, 0.0], [4.0, 5.0, 6.0]]));
}

#[test]
fn lenient_pads_ragged_rows() {
    let m = parse("[[1, 2, 3], [4]]").unwrap();
    assert_eq!(m, Matrix::from([[1.0, 2.0, 3.0], [4.0, 0.0, 0.0]]));
}

#[test]
fn reject_ragged_rows() {
    let options = ParseOptions {
        mode: ParseMode::Lenient,
        ragged: RaggedRows::Reject,
    };
    let err = parse_with("[[1, 2, 3], [4]]", &options).unwrap_err();
    assert_eq!(
        err,
        MatrixError::Parse {
            reason: "row 2 has length 1, expected 3".to_string()
        }
    );
}

#[test]
fn strict_mode_failures() {
    let strict = ParseOptions::strict();
    assert!(parse_with("[[1, 2], [3, x]]", &strict).is_err());
    assert!(parse_with("[[1, 2], []]", &strict).is_err());
    assert!(parse_with("[[1, 2], [3, 4", &strict).is_err());
    assert!(parse_with("[[1, 2,], [3, 4]]", &strict).is_err());
    assert!(parse_with("[[inf, NaN], [infinity, 1e3]]", &strict).is_err());
    assert!(parse_with("[[1, -inf]]", &strict).is_err());
    assert!(parse_with("[[1, 2], [3, 4]]", &strict).is_ok());
}

#[test]
fn lenient_skips_non_decimal_numbers() {
    let m = parse("[[inf, 1, NaN], [2, 1e3, -infinity]]").unwrap();
    assert_eq!(m, Matrix::from([[1.0], [2.0]]));
    assert!(m.as_slice().iter().all(|v| v.is_finite()));
}

#[test]
fn no_rows_is_a_parse_error() {
    for text in ["", "hello", "[]", "[[]]", "[[a, b]]"] {
        assert!(
            matches!(parse(text), Err(MatrixError::Parse { .. })),
            "{text:?} should not parse"
        );
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn format_layout() {
    let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_eq!(format(&m), "[[1, 2, 3], [4, 5, 6]]");
    assert_eq!(m.to_string(), format(&m));
}

#[test]
fn format_single_element() {
    assert_eq!(format(&Matrix::from([[0.1]])), "[[0.1]]");
}

#[test]
fn round_trip_literal() {
    let text = "[[2, 6, 7], [1, 0, 8], [4, 3, 6]]";
    assert_eq!(format(&parse(text).unwrap()), text);
}

#[test]
fn round_trip_random_values_exactly() {
    for seed in 0..10 {
        let m = Matrix::random_seeded(3, 4, seed).mul_scalar(1e3).sub_scalar(500.0);
        assert_eq!(parse(&format(&m)).unwrap(), m);
    }
}
