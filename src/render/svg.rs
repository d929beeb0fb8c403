//! SVG histogram backend built on `plotters`.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::error::{StatError, StatResult};

use super::{bin_series, HistogramFigure, HistogramRenderer};

/// Default figure width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default figure height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Renders a histogram figure to an SVG file.
#[derive(Debug, Clone)]
pub struct SvgHistogramRenderer {
    output: PathBuf,
    width: u32,
    height: u32,
}

impl SvgHistogramRenderer {
    /// Create a renderer writing to `output` at the default figure size.
    #[must_use]
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Override the figure size in pixels.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Path the SVG is written to.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Map a single-letter or named color spec to an RGB color.
///
/// Unknown specs fall back to blue rather than erroring; a color is styling,
/// not semantics.
#[must_use]
pub fn parse_color(spec: &str) -> RGBColor {
    match spec {
        "b" | "blue" => BLUE,
        "g" | "green" => GREEN,
        "r" | "red" => RED,
        "k" | "black" => BLACK,
        "w" | "white" => WHITE,
        "y" | "yellow" => YELLOW,
        "c" | "cyan" => CYAN,
        "m" | "magenta" => MAGENTA,
        _ => BLUE,
    }
}

fn draw_err(e: impl std::fmt::Display) -> StatError {
    StatError::render(e.to_string())
}

impl HistogramRenderer for SvgHistogramRenderer {
    fn render(&self, figure: &HistogramFigure) -> StatResult<()> {
        figure.validate()?;

        let range = figure
            .value_range()
            .ok_or_else(|| StatError::render("figure has no values"))?;

        let mut binned = Vec::with_capacity(figure.series.len());
        for series in &figure.series {
            binned.push(bin_series(series, figure.options.bins, range)?);
        }

        let mut y_max = binned
            .iter()
            .map(super::BinnedSeries::max_height)
            .fold(0.0f64, f64::max);
        if y_max <= 0.0 {
            y_max = 1.0;
        }
        let y_top = y_max * 1.1;

        let (x_lo, x_hi) = (binned[0].edges[0], binned[0].edges[figure.options.bins]);

        let root = SVGBackend::new(&self.output, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&figure.options.title, ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_lo..x_hi, 0.0f64..y_top)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc(&figure.options.x_label)
            .y_desc(&figure.options.y_label)
            .draw()
            .map_err(draw_err)?;

        for (series, bins) in figure.series.iter().zip(&binned) {
            let color = parse_color(&series.color);
            // Hatched bars render as outline-only so an overlaid series stays
            // readable; solid bars get a translucent fill under a solid border.
            let hatched = series.hatch.is_some();
            let fill: ShapeStyle = if hatched {
                color.mix(0.0).filled()
            } else {
                color.mix(0.35).filled()
            };
            let border: ShapeStyle = color.stroke_width(1);

            let bars = bins.heights.iter().enumerate().filter_map(|(i, &h)| {
                if h <= 0.0 {
                    return None;
                }
                Some(Rectangle::new([(bins.edges[i], 0.0), (bins.edges[i + 1], h)], fill))
            });
            chart.draw_series(bars).map_err(draw_err)?;

            let outlines = bins.heights.iter().enumerate().filter_map(|(i, &h)| {
                if h <= 0.0 {
                    return None;
                }
                Some(Rectangle::new([(bins.edges[i], 0.0), (bins.edges[i + 1], h)], border))
            });
            chart
                .draw_series(outlines)
                .map_err(draw_err)?
                .label(&series.label)
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.stroke_width(1))
                });
        }

        if let Some(annotation) = &figure.options.annotation {
            // plotters text elements do not honor embedded newlines.
            let x = x_lo + (x_hi - x_lo) * 0.04;
            for (i, line) in annotation.lines().enumerate() {
                let y = y_top * (0.92 - 0.07 * i as f64);
                chart
                    .draw_series(std::iter::once(Text::new(
                        line.to_string(),
                        (x, y),
                        ("sans-serif", 16),
                    )))
                    .map_err(draw_err)?;
            }
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::{HistogramOptions, HistogramSeries};

    fn two_series_figure() -> HistogramFigure {
        let mut figure = HistogramFigure::new(HistogramOptions {
            bins: 11,
            title: "Dice Rolls".to_string(),
            x_label: "Value".to_string(),
            y_label: "Probability".to_string(),
            annotation: Some("Mean = 2.50\nSD = 1.44".to_string()),
        });
        figure.push_series(
            HistogramSeries::new(vec![0.5, 1.5, 2.5, 3.5, 4.5], "1 die")
                .with_weights(vec![0.2; 5])
                .with_style("w", Some("*".to_string())),
        );
        figure.push_series(
            HistogramSeries::new(vec![2.3, 2.4, 2.5, 2.6, 2.7], "50 dice")
                .with_weights(vec![0.2; 5])
                .with_style("w", Some("//".to_string())),
        );
        figure
    }

    #[test]
    fn test_parse_color_letters() {
        assert_eq!(parse_color("r"), RED);
        assert_eq!(parse_color("w"), WHITE);
        assert_eq!(parse_color("k"), BLACK);
        assert_eq!(parse_color("blue"), BLUE);
        assert_eq!(parse_color("???"), BLUE, "unknown specs fall back to blue");
    }

    #[test]
    fn test_render_writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dice_rolls.svg");
        let renderer = SvgHistogramRenderer::new(&path);

        renderer.render(&two_series_figure()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        assert!(contents.contains("</svg>"));
        assert!(contents.contains("Dice Rolls"));
    }

    #[test]
    fn test_render_empty_figure_errors() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = SvgHistogramRenderer::new(dir.path().join("empty.svg"));
        let figure = HistogramFigure::new(HistogramOptions::default());
        assert!(renderer.render(&figure).is_err());
    }

    #[test]
    fn test_render_unwritable_path_errors() {
        let renderer = SvgHistogramRenderer::new("/nonexistent/dir/out.svg");
        let err = renderer.render(&two_series_figure()).unwrap_err();
        assert!(matches!(err, crate::error::StatError::Render(_)));
    }

    #[test]
    fn test_with_size_and_output() {
        let renderer = SvgHistogramRenderer::new("out.svg").with_size(400, 300);
        assert_eq!(renderer.output(), Path::new("out.svg"));
        assert_eq!(renderer.width, 400);
        assert_eq!(renderer.height, 300);
    }
}
