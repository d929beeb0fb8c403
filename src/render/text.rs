//! Plain-text histogram backend for terminal output.

use std::io::Write;

use crate::error::StatResult;

use super::{bin_series, HistogramFigure, HistogramRenderer};

/// Maximum bar width in characters.
const DEFAULT_BAR_WIDTH: usize = 50;

/// Renders a histogram figure as text bars, one series after another.
#[derive(Debug, Clone)]
pub struct TextHistogramRenderer {
    bar_width: usize,
}

impl Default for TextHistogramRenderer {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl TextHistogramRenderer {
    /// Create a renderer with the default bar width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the maximum bar width in characters.
    #[must_use]
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    /// Write the figure to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the figure is invalid or the writer fails.
    pub fn write_figure<W: Write>(&self, figure: &HistogramFigure, out: &mut W) -> StatResult<()> {
        figure.validate()?;

        let range = figure.value_range().unwrap_or((0.0, 1.0));

        if !figure.options.title.is_empty() {
            writeln!(out, "{}", figure.options.title)?;
            writeln!(out, "{}", "=".repeat(figure.options.title.len()))?;
        }

        for series in &figure.series {
            let binned = bin_series(series, figure.options.bins, range)?;
            let max = binned.max_height().max(f64::MIN_POSITIVE);

            writeln!(out, "\n{}", series.label)?;
            for (i, &h) in binned.heights.iter().enumerate() {
                let filled = ((h / max) * self.bar_width as f64).round() as usize;
                writeln!(
                    out,
                    "  [{:>8.3}, {:>8.3}) {:<width$} {:.4}",
                    binned.edges[i],
                    binned.edges[i + 1],
                    "#".repeat(filled),
                    h,
                    width = self.bar_width
                )?;
            }
        }

        if let Some(annotation) = &figure.options.annotation {
            writeln!(out)?;
            for line in annotation.lines() {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }
}

impl HistogramRenderer for TextHistogramRenderer {
    fn render(&self, figure: &HistogramFigure) -> StatResult<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.write_figure(figure, &mut lock)
    }
}
