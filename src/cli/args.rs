//! CLI argument parsing.
//!
//! This module provides the argument parser for the muestral CLI.
//! Extracted to enable comprehensive testing of argument parsing logic.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a dice scenario file
    Run {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Optional seed override.
        seed_override: Option<u64>,
        /// Enable verbose output.
        verbose: bool,
        /// Render to the terminal instead of an SVG file.
        text: bool,
    },
    /// Histogram a column of a race-results file
    Hist {
        /// Path to the results file.
        data_path: PathBuf,
        /// Column to histogram ("age" or "time").
        field: String,
        /// Optional bin-count override.
        bins: Option<usize>,
        /// SVG output path; terminal output when absent.
        output: Option<PathBuf>,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "hist" => Self::parse_hist_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'run' command requires scenario path");
            return Command::Help;
        }

        let mut seed_override = None;
        let mut verbose = false;
        let mut text = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    if i + 1 < args.len() {
                        if let Ok(seed) = args[i + 1].parse() {
                            seed_override = Some(seed);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                "--text" => {
                    text = true;
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::Run {
            scenario_path: PathBuf::from(&args[2]),
            seed_override,
            verbose,
            text,
        }
    }

    /// Parse the 'hist' command arguments.
    fn parse_hist_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'hist' command requires data path");
            return Command::Help;
        }

        let mut field = "age".to_string();
        let mut bins = None;
        let mut output = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--field" => {
                    if i + 1 < args.len() {
                        field = args[i + 1].clone();
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--bins" => {
                    if i + 1 < args.len() {
                        if let Ok(n) = args[i + 1].parse() {
                            bins = Some(n);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--output" => {
                    if i + 1 < args.len() {
                        output = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        Command::Hist {
            data_path: PathBuf::from(&args[2]),
            field,
            bins,
            output,
        }
    }
}
