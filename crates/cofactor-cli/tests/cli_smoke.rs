//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `cofactor` binary to verify that
//! argument parsing, output and error reporting work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("cofactor").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("det"))
        .stdout(predicate::str::contains("inverse"))
        .stdout(predicate::str::contains("eval"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cofactor"));
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

#[test]
fn det_of_literal() {
    cmd()
        .args(["det", "[[2, 6, 7], [1, 0, 8], [4, 3, 6]]"])
        .assert()
        .success()
        .stdout(predicate::str::diff("129\n"));
}

#[test]
fn inverse_of_identity_prints_plain_zeros() {
    cmd()
        .args(["inverse", "[[1, 0], [0, 1]]"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[[1, 0], [0, 1]]\n"));
}

#[test]
fn det_reads_stdin() {
    cmd()
        .args(["det", "-"])
        .write_stdin("[[1, 2], [3, 4]]\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("-2\n"));
}

#[test]
fn det_of_non_square_fails() {
    cmd()
        .args(["det", "[[1, 2, 3], [4, 5, 6]]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not square"));
}

#[test]
fn inverse_of_singular_fails() {
    cmd()
        .args(["inverse", "[[1, 2], [2, 4]]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("singular"));
}

#[test]
fn inverse_prints_literal() {
    cmd()
        .args(["inverse", "[[4, 7], [2, 6]]"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[[0.6, -0.7], [-0.2, 0.4]]\n"));
}

#[test]
fn transpose_prints_literal() {
    cmd()
        .args(["transpose", "[[1, 2, 3]]"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[[1], [2], [3]]\n"));
}

#[test]
fn iter_by_columns() {
    cmd()
        .args(["iter", "[[1, 2, 3], [4, 5, 6], [7, 8, 9]]", "--by", "cols"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1 4 7\n2 5 8\n3 6 9\n"));
}

#[test]
fn eval_with_explicit_operand() {
    cmd()
        .args(["eval", "[[2, 0], [0, 2]]", "--other", "[[1, 0], [0, 1]]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A(1, 2) = 0"))
        .stdout(predicate::str::contains("A == B: false"))
        .stdout(predicate::str::contains("A^T = [[2, 0], [0, 2]]"));
}

#[test]
fn eval_with_seed_is_reproducible() {
    let run = || {
        cmd()
            .args(["eval", "[[2, 6, 7], [1, 0, 8], [4, 3, 6]]", "--seed", "42"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn strict_flag_rejects_bad_tokens() {
    cmd()
        .args(["det", "[[1, x], [3, 4]]"])
        .assert()
        .success();
    cmd()
        .args(["--strict", "det", "[[1, x], [3, 4]]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number"));
}

#[test]
fn info_summarizes() {
    cmd()
        .args(["info", "[[1, 2], [3, 4]]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shape: 2x2"))
        .stdout(predicate::str::contains("sum: 10"))
        .stdout(predicate::str::contains("determinant: -2"));
}
