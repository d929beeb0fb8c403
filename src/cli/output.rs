//! CLI output formatting.
//!
//! This module contains all output formatting functions for the CLI.
//! Extracted to enable testing of output generation.

use crate::loader::DataField;
use crate::simulator::{MeansSummary, TrialSpec};
use crate::stats::SampleSummary;

/// Print version information.
pub fn print_version() {
    println!("muestral {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"muestral - Sample-Mean Simulator and Histogram Tool

USAGE:
    muestral <COMMAND> [OPTIONS]

COMMANDS:
    run <scenario.yaml>         Run the dice scenarios and render the overlay
        --seed <N>              Override the configured seed
        -v, --verbose           Print per-trial detail
        --text                  Render to the terminal instead of an SVG file

    hist <results.txt>          Histogram a column of a race-results file
        --field <age|time>      Column to histogram (default: age)
        --bins <N>              Number of bins (default: 10)
        --output <file.svg>     Write an SVG figure; terminal output otherwise

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    muestral run scenarios/dice.yaml
    muestral run scenarios/dice.yaml --seed 12345 --text
    muestral hist data/bm_results.txt --field time --output times.svg
"
    );
}

/// Print a simulation summary for one scenario.
///
/// # Arguments
///
/// * `spec` - The trial specification that was run
/// * `summary` - The simulation result
/// * `verbose` - Whether to print every trial mean
pub fn print_means_summary(spec: &TrialSpec, summary: &MeansSummary, verbose: bool) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Scenario: {}", spec.label);
    println!(
        "  Trials:         {} ({} draws each)",
        summary.trials, spec.samples_per_trial
    );
    if summary.discarded_draws > 0 {
        println!("  Discarded:      {} draws", summary.discarded_draws);
    }
    println!("  Mean of means:  {:.4}", summary.mean_of_means);
    println!("  Variance:       {:.4}", summary.variance_of_means);
    println!("  Std deviation:  {:.4}", summary.std_dev_of_means());

    if verbose {
        println!("  Trial means:");
        for (i, m) in summary.trial_means.iter().enumerate() {
            println!("    {:>4}: {m:.4}", i + 1);
        }
    }
    println!();
}

/// Print a descriptive summary of one data column.
pub fn print_sample_summary(field: DataField, summary: &SampleSummary) {
    let name = match field {
        DataField::Age => "age",
        DataField::Time => "time",
    };
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Column: {name}");
    println!("  Observations:   {}", summary.n);
    println!("  Mean:           {:.4}", summary.mean);
    println!("  Variance:       {:.4}", summary.variance);
    println!("  Std deviation:  {:.4}", summary.std_dev);
    println!();
}
