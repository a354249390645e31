//! cofactor-cli: command-line glue around `cofactor-matrix`.
//!
//! Configuration loading lives in `config`; the subcommand bodies live in
//! `commands` so they can be exercised without spawning the binary.
pub mod commands;
pub mod config;
