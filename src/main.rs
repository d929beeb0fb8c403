//! muestral CLI - Sample-Mean Simulator
//!
//! Command-line interface for running dice scenarios and histogramming data.

use std::process::ExitCode;

use muestral::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
