//! CLI module for muestral.
//!
//! This module contains all CLI logic extracted from main.rs to enable
//! full test coverage. The entry point `run_cli` can be called from main.rs
//! with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::run_cli;
pub use output::{print_help, print_means_summary, print_sample_summary, print_version};
