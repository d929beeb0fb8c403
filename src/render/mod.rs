//! Histogram rendering.
//!
//! The statistics core depends only on the [`HistogramRenderer`] capability
//! trait and the plain-data figure types here; concrete backends live in
//! submodules. The core supplies pre-computed annotation text (mean/SD);
//! renderers never recompute statistics.

use serde::{Deserialize, Serialize};

use crate::error::{StatError, StatResult};

pub mod svg;
pub mod text;

pub use svg::SvgHistogramRenderer;
pub use text::TextHistogramRenderer;

/// One data series to draw: values plus optional weights and styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramSeries {
    /// The raw values to bin.
    pub values: Vec<f64>,
    /// Optional per-element weights (same length as `values`); defaults to
    /// a weight of 1 per element when absent.
    pub weights: Option<Vec<f64>>,
    /// Legend label.
    pub label: String,
    /// Series color (single-letter matplotlib-style or named).
    pub color: String,
    /// Optional hatch pattern; backends that cannot hatch render the series
    /// with an outline-only fill instead.
    pub hatch: Option<String>,
}

impl HistogramSeries {
    /// Create an unweighted, plainly-styled series.
    #[must_use]
    pub fn new(values: Vec<f64>, label: impl Into<String>) -> Self {
        Self {
            values,
            weights: None,
            label: label.into(),
            color: "b".to_string(),
            hatch: None,
        }
    }

    /// Attach per-element weights.
    #[must_use]
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Set color and hatch style.
    #[must_use]
    pub fn with_style(mut self, color: impl Into<String>, hatch: Option<String>) -> Self {
        self.color = color.into();
        self.hatch = hatch;
        self
    }

    /// Validate internal consistency (non-empty values, matching weights).
    ///
    /// # Errors
    ///
    /// Returns an error for an empty series or a weight-length mismatch.
    pub fn validate(&self) -> StatResult<()> {
        if self.values.is_empty() {
            return Err(StatError::EmptySample {
                operation: "histogram",
            });
        }
        if let Some(weights) = &self.weights {
            if weights.len() != self.values.len() {
                return Err(StatError::render(format!(
                    "series '{}': {} weights for {} values",
                    self.label,
                    weights.len(),
                    self.values.len()
                )));
            }
        }
        Ok(())
    }

    /// Minimum and maximum value of the series.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

/// Figure-level options: bin count, titles, and annotation text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramOptions {
    /// Number of equal-width bins.
    pub bins: usize,
    /// Figure title.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Pre-computed annotation text (e.g. "Mean = 5.00\nSD = 2.00").
    pub annotation: Option<String>,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bins: 10,
            title: String::new(),
            x_label: String::new(),
            y_label: "Frequency".to_string(),
            annotation: None,
        }
    }
}

/// A complete figure: one or more overlaid series plus options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramFigure {
    /// Overlaid series, drawn in insertion order.
    pub series: Vec<HistogramSeries>,
    /// Figure options.
    pub options: HistogramOptions,
}

impl HistogramFigure {
    /// Create an empty figure with the given options.
    #[must_use]
    pub fn new(options: HistogramOptions) -> Self {
        Self {
            series: Vec::new(),
            options,
        }
    }

    /// Add a series to the figure.
    pub fn push_series(&mut self, series: HistogramSeries) {
        self.series.push(series);
    }

    /// Combined value range across all series.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for s in &self.series {
            if let Some((lo, hi)) = s.value_range() {
                range = Some(match range {
                    Some((a, b)) => (a.min(lo), b.max(hi)),
                    None => (lo, hi),
                });
            }
        }
        range
    }

    /// Validate the figure before rendering.
    ///
    /// # Errors
    ///
    /// Returns an error when the figure has no series, a zero bin count, or
    /// an invalid series.
    pub fn validate(&self) -> StatResult<()> {
        if self.series.is_empty() {
            return Err(StatError::render("figure has no series"));
        }
        if self.options.bins == 0 {
            return Err(StatError::config("bin count must be at least 1"));
        }
        for s in &self.series {
            s.validate()?;
        }
        Ok(())
    }
}

/// A binned series: `edges` has `bins + 1` entries, `heights` has `bins`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedSeries {
    /// Bin edges, ascending.
    pub edges: Vec<f64>,
    /// Per-bin total weight.
    pub heights: Vec<f64>,
}

impl BinnedSeries {
    /// Tallest bin height.
    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.heights.iter().copied().fold(0.0, f64::max)
    }
}

/// Bin a series into `bins` equal-width bins over `range`.
///
/// Values outside the range are clamped into the first/last bin; a value on
/// the upper edge lands in the last bin. A degenerate range (all values
/// equal) is widened by half a unit on each side.
///
/// # Errors
///
/// Returns an error for an empty series, zero bins, or a weight mismatch.
pub fn bin_series(
    series: &HistogramSeries,
    bins: usize,
    range: (f64, f64),
) -> StatResult<BinnedSeries> {
    series.validate()?;
    if bins == 0 {
        return Err(StatError::config("bin count must be at least 1"));
    }

    let (mut lo, mut hi) = range;
    if hi <= lo {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();
    let mut heights = vec![0.0; bins];

    for (i, &x) in series.values.iter().enumerate() {
        let idx = (((x - lo) / width) as usize).min(bins - 1);
        let weight = series.weights.as_ref().map_or(1.0, |w| w[i]);
        heights[idx] += weight;
    }

    Ok(BinnedSeries { edges, heights })
}

/// Rendering capability consumed by the simulation core.
pub trait HistogramRenderer {
    /// Render the figure.
    ///
    /// # Errors
    ///
    /// Returns an error if the figure is invalid or the backend fails.
    fn render(&self, figure: &HistogramFigure) -> StatResult<()>;
}
