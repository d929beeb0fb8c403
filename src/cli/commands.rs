//! CLI command handlers.
//!
//! This module contains the execution logic for each CLI command.
//! Extracted to enable comprehensive testing of command behavior.

use std::path::Path;
use std::process::ExitCode;

use crate::config::ScenarioConfig;
use crate::loader::{DataField, RaceDataset};
use crate::render::{
    HistogramFigure, HistogramOptions, HistogramRenderer, HistogramSeries, SvgHistogramRenderer,
    TextHistogramRenderer,
};
use crate::rng::TrialRng;
use crate::simulator::simulate_means;
use crate::stats::{SampleSummary, VarianceMode};

use super::output::{print_help, print_means_summary, print_sample_summary, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            scenario_path,
            seed_override,
            verbose,
            text,
        } => run_scenario(&scenario_path, seed_override, verbose, text),
        Command::Hist {
            data_path,
            field,
            bins,
            output,
        } => run_hist(&data_path, &field, bins, output.as_deref()),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run the dice scenarios from a YAML file and render the overlay figure.
///
/// # Arguments
///
/// * `path` - Path to the scenario YAML file
/// * `seed_override` - Optional seed to override the configured seed
/// * `verbose` - Whether to print per-trial detail
/// * `text` - Whether to render to the terminal instead of an SVG file
#[must_use]
pub fn run_scenario(path: &Path, seed_override: Option<u64>, verbose: bool, text: bool) -> ExitCode {
    let config = match ScenarioConfig::load(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let seed = seed_override.unwrap_or(config.reproducibility.seed);
    let mut rng = TrialRng::new(seed);

    println!("Running scenario: {}", path.display());
    println!("Seed: {seed}\n");

    let mut figure = HistogramFigure::new(HistogramOptions {
        bins: config.histogram.bins,
        title: config.histogram.title.clone(),
        x_label: config.histogram.x_label.clone(),
        y_label: config.histogram.y_label.clone(),
        annotation: None,
    });

    for scenario in &config.dice {
        let spec = scenario.to_trial_spec();
        let summary = match simulate_means(&spec, &mut rng) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(1);
            }
        };

        print_means_summary(&spec, &summary, verbose);
        figure.push_series(summary.to_series(&spec));
    }

    let render_result = if text {
        TextHistogramRenderer::new().render(&figure)
    } else {
        let renderer = SvgHistogramRenderer::new(&config.histogram.output);
        let result = renderer.render(&figure);
        if result.is_ok() {
            println!("Wrote {}", config.histogram.output);
        }
        result
    };

    match render_result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Histogram one numeric column of a race-results file.
///
/// # Arguments
///
/// * `path` - Path to the results file
/// * `field` - Column name ("age" or "time")
/// * `bins` - Optional bin-count override
/// * `output` - SVG output path; terminal output when absent
#[must_use]
pub fn run_hist(path: &Path, field: &str, bins: Option<usize>, output: Option<&Path>) -> ExitCode {
    let field: DataField = match field.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let dataset = match RaceDataset::load(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let values = dataset.column(field);
    let summary = match SampleSummary::describe(&values, VarianceMode::Population) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    print_sample_summary(field, &summary);

    let (title, x_label) = match field {
        DataField::Age => ("Ages of runners", "Age"),
        DataField::Time => ("Finish times of runners", "Time"),
    };
    let mut figure = HistogramFigure::new(HistogramOptions {
        bins: bins.unwrap_or(10),
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: "Frequency".to_string(),
        annotation: Some(summary.annotation()),
    });
    figure.push_series(HistogramSeries::new(values, x_label));

    let render_result = match output {
        Some(out) => {
            let result = SvgHistogramRenderer::new(out).render(&figure);
            if result.is_ok() {
                println!("Wrote {}", out.display());
            }
            result
        }
        None => TextHistogramRenderer::new().render(&figure),
    };

    match render_result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
