//! Scenario configuration with YAML schema and validation.
//!
//! Mistake-proofed in layers:
//! - Type-safe configuration structs
//! - Schema validation via serde (unknown fields rejected)
//! - Runtime semantic validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{StatError, StatResult};
use crate::simulator::{TrialSpec, DEFAULT_DIE_SCALE};

/// Top-level scenario configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Reproducibility settings.
    #[validate(nested)]
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Dice scenarios to simulate and overlay, in draw order.
    #[validate(length(min = 1), nested)]
    pub dice: Vec<DiceScenario>,

    /// Histogram figure settings.
    #[validate(nested)]
    #[serde(default)]
    pub histogram: HistogramConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl ScenarioConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> StatResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> StatResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> ScenarioConfigBuilder {
        ScenarioConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> StatResult<()> {
        for scenario in &self.dice {
            if scenario.total_throws < scenario.dice_per_trial {
                return Err(StatError::config(format!(
                    "scenario '{}': total_throws {} is smaller than dice_per_trial {}",
                    scenario.label, scenario.total_throws, scenario.dice_per_trial
                )));
            }
            if scenario.scale <= 0.0 {
                return Err(StatError::config(format!(
                    "scenario '{}': scale must be positive, got {}",
                    scenario.label, scenario.scale
                )));
            }
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reproducibility: ReproducibilityConfig::default(),
            dice: vec![
                DiceScenario::new(1, 1000, "1 die", "w", Some("*")),
                DiceScenario::new(50, 1000, "50 dice", "w", Some("//")),
            ],
            histogram: HistogramConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct ScenarioConfigBuilder {
    seed: Option<u64>,
    dice: Vec<DiceScenario>,
    bins: Option<usize>,
    output: Option<String>,
}

impl ScenarioConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a dice scenario; replaces the defaults once called.
    #[must_use]
    pub fn scenario(mut self, scenario: DiceScenario) -> Self {
        self.dice.push(scenario);
        self
    }

    /// Set the histogram bin count.
    #[must_use]
    pub const fn bins(mut self, bins: usize) -> Self {
        self.bins = Some(bins);
        self
    }

    /// Set the figure output path.
    #[must_use]
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ScenarioConfig {
        let mut config = ScenarioConfig::default();

        if let Some(seed) = self.seed {
            config.reproducibility.seed = seed;
        }
        if !self.dice.is_empty() {
            config.dice = self.dice;
        }
        if let Some(bins) = self.bins {
            config.histogram.bins = bins;
        }
        if let Some(output) = self.output {
            config.histogram.output = output;
        }

        config
    }
}

/// Reproducibility settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReproducibilityConfig {
    /// Master seed for all RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_seed() -> u64 {
    42
}

impl Default for ReproducibilityConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// One dice scenario: batch size, throw budget, and series styling.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiceScenario {
    /// Number of dice averaged into one trial mean.
    #[validate(range(min = 1))]
    pub dice_per_trial: usize,

    /// Total dice throws across all trials.
    #[validate(range(min = 1))]
    pub total_throws: usize,

    /// Upper bound of a single throw, exclusive.
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Legend label.
    #[validate(length(min = 1))]
    pub label: String,

    /// Series color.
    #[serde(default = "default_color")]
    pub color: String,

    /// Optional hatch pattern.
    #[serde(default)]
    pub hatch: Option<String>,
}

const fn default_scale() -> f64 {
    DEFAULT_DIE_SCALE
}

fn default_color() -> String {
    "b".to_string()
}

impl DiceScenario {
    /// Construct a scenario with the default die scale.
    #[must_use]
    pub fn new(
        dice_per_trial: usize,
        total_throws: usize,
        label: impl Into<String>,
        color: impl Into<String>,
        hatch: Option<&str>,
    ) -> Self {
        Self {
            dice_per_trial,
            total_throws,
            scale: default_scale(),
            label: label.into(),
            color: color.into(),
            hatch: hatch.map(ToString::to_string),
        }
    }

    /// Convert to the simulator's trial specification.
    #[must_use]
    pub fn to_trial_spec(&self) -> TrialSpec {
        TrialSpec::new(self.dice_per_trial, self.total_throws, &self.label)
            .with_scale(self.scale)
            .with_style(&self.color, self.hatch.clone())
    }
}

/// Histogram figure settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HistogramConfig {
    /// Number of equal-width bins.
    #[validate(range(min = 1))]
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Figure title.
    #[serde(default = "default_title")]
    pub title: String,

    /// X-axis label.
    #[serde(default = "default_x_label")]
    pub x_label: String,

    /// Y-axis label.
    #[serde(default = "default_y_label")]
    pub y_label: String,

    /// Output path of the rendered SVG.
    #[serde(default = "default_output")]
    pub output: String,
}

const fn default_bins() -> usize {
    11
}

fn default_title() -> String {
    "Dice Rolls".to_string()
}

fn default_x_label() -> String {
    "Mean of throws".to_string()
}

fn default_y_label() -> String {
    "Probability".to_string()
}

fn default_output() -> String {
    "dice_rolls.svg".to_string()
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            output: default_output(),
        }
    }
}
