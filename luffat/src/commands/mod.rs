//! Command modules for the luffat CLI.
//!
//! Each subcommand lives in its own file with an `*Args` struct and a
//! `run_*` entry point.

pub mod common;

pub mod names;
pub mod tokens;

pub use names::{run_names, NamesArgs};
pub use tokens::{run_tokens, OutputFormat, TokensArgs};
