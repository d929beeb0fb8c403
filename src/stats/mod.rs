//! Descriptive statistics over numeric samples.
//!
//! Implements the computational (single-pass) sum-of-squares formula:
//!
//! ```text
//! SS = Σx² − (Σx)²/N
//! ```
//!
//! # Numerical caveat
//!
//! The computational formula trades numerical stability for a single pass:
//! it suffers catastrophic cancellation for large values or large N. This is
//! acceptable for the small pedagogical datasets this crate targets and is a
//! deliberate fidelity choice, not an oversight. [`std_dev`] clamps rounding
//! noise before taking the square root and reports anything worse as
//! [`StatError::NegativeVariance`] rather than returning NaN.

use serde::{Deserialize, Serialize};

use crate::error::{StatError, StatResult};

/// Divisor choice for variance and standard deviation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VarianceMode {
    /// Divide the sum of squared deviations by `N` (the sample is the whole
    /// population).
    #[default]
    Population,
    /// Divide by `N − 1` (Bessel's correction, for samples drawn from a
    /// larger population). Undefined for a single observation.
    Sample,
}

/// Absolute floor for the cancellation-noise bound, so that data near zero
/// still gets a clamp window.
const CANCELLATION_TOLERANCE: f64 = 1e-9;

/// Bound on how far below zero the computational formula can drift through
/// rounding alone. The cancellation error scales with the magnitude of the
/// squared terms, so the bound is a few ULPs of the mean square times the
/// sample count, floored at [`CANCELLATION_TOLERANCE`] for small values.
fn cancellation_bound(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    let mean_square = samples.iter().map(|x| x * x).sum::<f64>() / n;
    (mean_square * f64::EPSILON * n).max(CANCELLATION_TOLERANCE)
}

fn non_empty(samples: &[f64], operation: &'static str) -> StatResult<()> {
    if samples.is_empty() {
        return Err(StatError::EmptySample { operation });
    }
    Ok(())
}

/// Compute the mean of the given samples.
///
/// # Errors
///
/// Returns [`StatError::EmptySample`] when `samples` is empty.
pub fn mean(samples: &[f64]) -> StatResult<f64> {
    non_empty(samples, "mean")?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Compute the sum of squared deviations from the mean using the
/// computational formula `Σx² − (Σx)²/N`.
///
/// # Errors
///
/// Returns [`StatError::EmptySample`] when `samples` is empty.
pub fn sum_squared_deviations(samples: &[f64]) -> StatResult<f64> {
    non_empty(samples, "sum of squared deviations")?;

    let mut sum_x = 0.0;
    let mut sum_x_squared = 0.0;
    for &x in samples {
        sum_x += x;
        sum_x_squared += x * x;
    }

    Ok(sum_x_squared - sum_x * sum_x / samples.len() as f64)
}

/// Compute the variance of the given samples.
///
/// # Errors
///
/// Returns [`StatError::EmptySample`] when `samples` is empty, and
/// [`StatError::SingleObservation`] for [`VarianceMode::Sample`] with a
/// single-element sample.
pub fn variance(samples: &[f64], mode: VarianceMode) -> StatResult<f64> {
    non_empty(samples, "variance")?;

    let ss = sum_squared_deviations(samples)?;
    let n = samples.len();
    match mode {
        VarianceMode::Population => Ok(ss / n as f64),
        VarianceMode::Sample => {
            if n == 1 {
                return Err(StatError::SingleObservation);
            }
            Ok(ss / (n - 1) as f64)
        }
    }
}

/// Compute the standard deviation of the given samples.
///
/// A variance that the computational formula cancelled below zero by no more
/// than the rounding-noise bound for the data's magnitude is clamped to
/// zero; a variance more negative than that bound is an error.
///
/// # Errors
///
/// Propagates the failure conditions of [`variance`], plus
/// [`StatError::NegativeVariance`] on severe cancellation.
pub fn std_dev(samples: &[f64], mode: VarianceMode) -> StatResult<f64> {
    let var = variance(samples, mode)?;
    if var < 0.0 {
        if var > -cancellation_bound(samples) {
            return Ok(0.0);
        }
        return Err(StatError::NegativeVariance { value: var });
    }
    Ok(var.sqrt())
}

/// Descriptive summary of one sample, used for histogram annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of observations.
    pub n: usize,
    /// Sample mean.
    pub mean: f64,
    /// Variance under the requested mode.
    pub variance: f64,
    /// Standard deviation under the requested mode.
    pub std_dev: f64,
}

impl SampleSummary {
    /// Summarize the given samples.
    ///
    /// # Errors
    ///
    /// Propagates the failure conditions of [`mean`], [`variance`], and
    /// [`std_dev`].
    pub fn describe(samples: &[f64], mode: VarianceMode) -> StatResult<Self> {
        Ok(Self {
            n: samples.len(),
            mean: mean(samples)?,
            variance: variance(samples, mode)?,
            std_dev: std_dev(samples, mode)?,
        })
    }

    /// Render the mean/SD annotation text placed on histograms.
    #[must_use]
    pub fn annotation(&self) -> String {
        format!("Mean = {:.2}\nSD = {:.2}", self.mean, self.std_dev)
    }
}
