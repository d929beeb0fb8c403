//! Sample-mean simulator.
//!
//! Repeatedly draws batches of scaled uniform values ("dice"), averages each
//! batch into a trial mean, and summarizes the resulting distribution. By the
//! Central Limit Theorem the variance of the trial means shrinks by a factor
//! of `samples_per_trial` relative to a single draw, and their distribution
//! approaches a normal regardless of the underlying uniform shape.

use serde::{Deserialize, Serialize};

use crate::error::{StatError, StatResult};
use crate::render::HistogramSeries;
use crate::rng::TrialRng;
use crate::stats::{self, VarianceMode};

/// Scale of a single "die" draw: uniform on `[0, DEFAULT_DIE_SCALE)`.
pub const DEFAULT_DIE_SCALE: f64 = 5.0;

/// One simulation scenario: how many draws per trial, how many in total,
/// and how the resulting series should be labelled and styled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialSpec {
    /// Number of synthetic draws averaged into one trial mean.
    pub samples_per_trial: usize,
    /// Total synthetic draws across all trials.
    pub total_draws: usize,
    /// Upper bound of the scaled uniform draw, exclusive.
    pub scale: f64,
    /// Legend label for the rendered series.
    pub label: String,
    /// Series color (single-letter or named, renderer-interpreted).
    pub color: String,
    /// Optional hatch pattern for the rendered bars.
    pub hatch: Option<String>,
}

impl TrialSpec {
    /// Create a spec with the default die scale and plain styling.
    #[must_use]
    pub fn new(samples_per_trial: usize, total_draws: usize, label: impl Into<String>) -> Self {
        Self {
            samples_per_trial,
            total_draws,
            scale: DEFAULT_DIE_SCALE,
            label: label.into(),
            color: "b".to_string(),
            hatch: None,
        }
    }

    /// Set the draw scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the series style.
    #[must_use]
    pub fn with_style(mut self, color: impl Into<String>, hatch: Option<String>) -> Self {
        self.color = color.into();
        self.hatch = hatch;
        self
    }

    /// Number of trials this spec produces.
    ///
    /// Integer division: draws left over when `samples_per_trial` does not
    /// evenly divide `total_draws` are silently discarded. Preserved policy
    /// from the observed tool; callers wanting exact trial counts should
    /// choose evenly-divisible parameters. A zero batch size yields zero
    /// trials; [`simulate_means`] rejects it as a configuration error.
    #[must_use]
    pub const fn trial_count(&self) -> usize {
        if self.samples_per_trial == 0 {
            return 0;
        }
        self.total_draws / self.samples_per_trial
    }
}

/// Result of a sample-mean simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeansSummary {
    /// The per-trial means, in trial order.
    pub trial_means: Vec<f64>,
    /// Mean of the trial means.
    pub mean_of_means: f64,
    /// Variance of the trial means (population formula).
    pub variance_of_means: f64,
    /// Number of trials actually run.
    pub trials: usize,
    /// Draws discarded by integer-division truncation.
    pub discarded_draws: usize,
}

impl MeansSummary {
    /// Standard deviation of the trial means.
    #[must_use]
    pub fn std_dev_of_means(&self) -> f64 {
        self.variance_of_means.max(0.0).sqrt()
    }

    /// Build a histogram series of the trial means with per-element weights
    /// `1/trials`, so bar heights sum to 1 (relative frequency).
    #[must_use]
    pub fn to_series(&self, spec: &TrialSpec) -> HistogramSeries {
        let n = self.trial_means.len();
        let weight = 1.0 / n as f64;
        HistogramSeries::new(self.trial_means.clone(), &spec.label)
            .with_weights(vec![weight; n])
            .with_style(&spec.color, spec.hatch.clone())
    }
}

/// Run the sample-mean simulation described by `spec`.
///
/// Each trial draws `samples_per_trial` independent uniform values in
/// `[0, scale)`, sums them, and divides by `samples_per_trial`.
///
/// # Errors
///
/// Returns a configuration error when `samples_per_trial` is zero or larger
/// than `total_draws`, and propagates arithmetic errors from the statistics
/// core (unreachable once at least one trial runs).
pub fn simulate_means(spec: &TrialSpec, rng: &mut TrialRng) -> StatResult<MeansSummary> {
    if spec.samples_per_trial == 0 {
        return Err(StatError::config("samples_per_trial must be at least 1"));
    }
    if spec.scale <= 0.0 {
        return Err(StatError::config(format!(
            "draw scale must be positive, got {}",
            spec.scale
        )));
    }

    let trials = spec.trial_count();
    if trials == 0 {
        return Err(StatError::config(format!(
            "total_draws {} is smaller than samples_per_trial {}",
            spec.total_draws, spec.samples_per_trial
        )));
    }
    let discarded_draws = spec.total_draws % spec.samples_per_trial;

    let mut trial_means = Vec::with_capacity(trials);
    for _ in 0..trials {
        let mut sum = 0.0;
        for _ in 0..spec.samples_per_trial {
            sum += rng.gen_range_f64(0.0, spec.scale);
        }
        trial_means.push(sum / spec.samples_per_trial as f64);
    }

    let mean_of_means = stats::mean(&trial_means)?;
    let variance_of_means = stats::variance(&trial_means, VarianceMode::Population)?;

    Ok(MeansSummary {
        trial_means,
        mean_of_means,
        variance_of_means,
        trials,
        discarded_draws,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Variance of a uniform distribution on [0, 5): 25/12 ≈ 2.083.
    const UNIFORM_VARIANCE: f64 = 25.0 / 12.0;

    #[test]
    fn test_single_die_trial_count_and_moments() {
        let spec = TrialSpec::new(1, 1000, "1 die");
        let mut rng = TrialRng::new(42);
        let summary = simulate_means(&spec, &mut rng).unwrap();

        assert_eq!(summary.trials, 1000);
        assert_eq!(summary.trial_means.len(), 1000);
        assert_eq!(summary.discarded_draws, 0);
        for m in &summary.trial_means {
            assert!((0.0..5.0).contains(m), "trial mean {m} out of [0, 5)");
        }

        // E[U] = 2.5, Var[U] = 25/12; SE of the mean over 1000 draws ≈ 0.046.
        assert!(
            (summary.mean_of_means - 2.5).abs() < 0.25,
            "mean of means {} too far from 2.5",
            summary.mean_of_means
        );
        assert!(
            (summary.variance_of_means - UNIFORM_VARIANCE).abs() < 0.3,
            "variance of means {} too far from {UNIFORM_VARIANCE}",
            summary.variance_of_means
        );
    }

    #[test]
    fn test_fifty_dice_variance_reduction() {
        let mut rng = TrialRng::new(42);
        let one_die = simulate_means(&TrialSpec::new(1, 1000, "1 die"), &mut rng).unwrap();
        let fifty_dice = simulate_means(&TrialSpec::new(50, 1000, "50 dice"), &mut rng).unwrap();

        assert_eq!(fifty_dice.trials, 20);
        assert_eq!(fifty_dice.trial_means.len(), 20);

        // CLT: variance of means shrinks by a factor approaching 50.
        let ratio = one_die.variance_of_means / fifty_dice.variance_of_means;
        assert!(
            ratio > 15.0 && ratio < 200.0,
            "variance-reduction ratio {ratio} not near 50"
        );
    }

    #[test]
    fn test_integer_division_truncation() {
        let spec = TrialSpec::new(7, 10, "7 dice");
        let mut rng = TrialRng::new(42);
        let summary = simulate_means(&spec, &mut rng).unwrap();

        assert_eq!(summary.trials, 1, "10 div 7 must produce exactly 1 trial");
        assert_eq!(summary.discarded_draws, 3);
    }

    #[test]
    fn test_trial_count_zero_batch_is_zero() {
        // A zero batch size must not divide by zero; it reads as zero trials
        // and simulate_means rejects it before any draws happen.
        let spec = TrialSpec::new(0, 100, "broken");
        assert_eq!(spec.trial_count(), 0);
    }

    #[test]
    fn test_zero_samples_per_trial_is_config_error() {
        let spec = TrialSpec::new(0, 100, "broken");
        let mut rng = TrialRng::new(42);
        let err = simulate_means(&spec, &mut rng).unwrap_err();
        assert!(matches!(err, StatError::Config { .. }));
    }

    #[test]
    fn test_total_draws_below_batch_is_config_error() {
        let spec = TrialSpec::new(100, 10, "broken");
        let mut rng = TrialRng::new(42);
        let err = simulate_means(&spec, &mut rng).unwrap_err();
        assert!(matches!(err, StatError::Config { .. }));
    }

    #[test]
    fn test_non_positive_scale_is_config_error() {
        let spec = TrialSpec::new(1, 10, "broken").with_scale(0.0);
        let mut rng = TrialRng::new(42);
        let err = simulate_means(&spec, &mut rng).unwrap_err();
        assert!(matches!(err, StatError::Config { .. }));
    }

    #[test]
    fn test_reproducibility_same_seed() {
        let spec = TrialSpec::new(5, 500, "5 dice");
        let mut rng1 = TrialRng::new(1234);
        let mut rng2 = TrialRng::new(1234);

        let s1 = simulate_means(&spec, &mut rng1).unwrap();
        let s2 = simulate_means(&spec, &mut rng2).unwrap();

        assert_eq!(s1.trial_means, s2.trial_means);
        assert!((s1.mean_of_means - s2.mean_of_means).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_series_relative_frequency_weights() {
        let spec = TrialSpec::new(50, 1000, "50 dice").with_style("w", Some("//".to_string()));
        let mut rng = TrialRng::new(42);
        let summary = simulate_means(&spec, &mut rng).unwrap();
        let series = summary.to_series(&spec);

        assert_eq!(series.values.len(), 20);
        let weights = series.weights.as_ref().unwrap();
        assert_eq!(weights.len(), 20);
        let total: f64 = weights.iter().sum();
        assert!(
            (total - 1.0).abs() < 1e-9,
            "weights must sum to 1, got {total}"
        );
        assert_eq!(series.label, "50 dice");
        assert_eq!(series.color, "w");
        assert_eq!(series.hatch.as_deref(), Some("//"));
    }

    #[test]
    fn test_trial_spec_builders() {
        let spec = TrialSpec::new(2, 10, "2 dice")
            .with_scale(6.0)
            .with_style("r", None);
        assert_eq!(spec.trial_count(), 5);
        assert!((spec.scale - 6.0).abs() < f64::EPSILON);
        assert_eq!(spec.color, "r");
        assert!(spec.hatch.is_none());
    }

    #[test]
    fn test_means_summary_std_dev() {
        let summary = MeansSummary {
            trial_means: vec![1.0, 3.0],
            mean_of_means: 2.0,
            variance_of_means: 4.0,
            trials: 2,
            discarded_draws: 0,
        };
        assert!((summary.std_dev_of_means() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_means_summary_serde() {
        let spec = TrialSpec::new(2, 10, "2 dice");
        let mut rng = TrialRng::new(42);
        let summary = simulate_means(&spec, &mut rng).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        let back: MeansSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.trials, summary.trials);
        assert_eq!(back.trial_means.len(), summary.trial_means.len());
        // Decimal formatting may shift the last ulp; compare within tolerance.
        for (a, b) in back.trial_means.iter().zip(&summary.trial_means) {
            assert!((a - b).abs() < 1e-12, "round-trip drifted: {a} vs {b}");
        }
        assert!((back.mean_of_means - summary.mean_of_means).abs() < 1e-12);
    }
}
