//! # muestral
//!
//! Sampling-distribution simulator illustrating the Central Limit Theorem.
//!
//! The crate computes descriptive statistics (mean, variance, standard
//! deviation) over numeric samples, simulates distributions of sample means
//! from repeated "dice" trials, and renders annotated histograms of raw data
//! or trial means to a figure file.
//!
//! ## Example
//!
//! ```rust
//! use muestral::prelude::*;
//!
//! let spec = TrialSpec::new(50, 1000, "50 dice");
//! let mut rng = TrialRng::new(42);
//! let summary = simulate_means(&spec, &mut rng).unwrap();
//! assert_eq!(summary.trial_means.len(), 20);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suspicious_operation_groupings, // False positive for SS = Σx² - (Σx)²/N
    clippy::suboptimal_flops,               // The computational formula is intentional
    clippy::imprecise_flops,                // Numerical code choices are intentional
    clippy::missing_const_for_fn
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod rng;
pub mod simulator;
pub mod stats;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{DiceScenario, ScenarioConfig, ScenarioConfigBuilder};
    pub use crate::error::{StatError, StatResult};
    pub use crate::loader::{DataField, RaceDataset};
    pub use crate::render::{HistogramFigure, HistogramOptions, HistogramRenderer, HistogramSeries};
    pub use crate::rng::TrialRng;
    pub use crate::simulator::{simulate_means, MeansSummary, TrialSpec};
    pub use crate::stats::{mean, std_dev, variance, SampleSummary, VarianceMode};
}

/// Re-export for public API
pub use error::{StatError, StatResult};
