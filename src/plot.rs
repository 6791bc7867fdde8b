//! # Plot Renderer
//!
//! Terminal line charts via `textplots`: one chart per [`Metric`], x = message
//! size, one coloured line per cipher. Non-finite values (the `+inf` ratio
//! sentinel) are left out. Nothing is written to disk.

use crate::bench::{BenchReport, Metric};
use crate::error::BenchError;
use rgb::RGB8;
use std::io::Write;
use textplots::{Chart, ColorPlot, LabelBuilder, LabelFormat, Shape};

/// Canvas size in braille dots used by [`render_charts`].
pub const CHART_WIDTH: u32 = 120;
pub const CHART_HEIGHT: u32 = 40;

// textplots panics below 32x3 and needs room for the x-axis labels.
const MIN_WIDTH: u32 = 64;
const MIN_HEIGHT: u32 = 8;

const PALETTE: [(&str, RGB8); 6] = [
    ("red", RGB8 { r: 220, g: 50, b: 47 }),
    ("green", RGB8 { r: 133, g: 153, b: 0 }),
    ("blue", RGB8 { r: 38, g: 139, b: 210 }),
    ("yellow", RGB8 { r: 181, g: 137, b: 0 }),
    ("magenta", RGB8 { r: 211, g: 54, b: 130 }),
    ("cyan", RGB8 { r: 42, g: 161, b: 152 }),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Data and labels for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_ticks: Vec<f64>,
    pub series: Vec<Series>,
}

impl LineChart {
    #[must_use]
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_ticks: Vec::new(),
            series: Vec::new(),
        }
    }

    /// Positions that must fall inside the x range even without data there.
    #[must_use]
    pub fn with_x_ticks(mut self, ticks: impl Into<Vec<f64>>) -> Self {
        self.x_ticks = ticks.into();
        self
    }

    pub fn add_series(&mut self, label: impl Into<String>, points: Vec<(f64, f64)>) {
        self.series.push(Series {
            label: label.into(),
            points,
        });
    }

    /// Title, y label, canvas, x label, and legend as one string.
    ///
    /// `width` and `height` are braille-dot counts and are raised to a
    /// minimum the canvas can label.
    #[must_use]
    pub fn render(&self, width: u32, height: u32) -> String {
        let mut text = format!("{}\n  y: {}\n", self.title, self.y_label);

        let points: Vec<Vec<(f32, f32)>> = self.series.iter().map(|s| finite_points(&s.points)).collect();
        if points.iter().all(Vec::is_empty) {
            text.push_str("  (no finite data)\n");
        } else {
            let (xmin, xmax) = self.x_range(&points);
            let shapes: Vec<Shape<'_>> = points
                .iter()
                .map(|p| if p.len() == 1 { Shape::Points(p) } else { Shape::Lines(p) })
                .collect();
            text.push_str(&draw(&shapes, width.max(MIN_WIDTH), height.max(MIN_HEIGHT), xmin, xmax));
        }

        text.push_str(&format!("  x: {}\n", self.x_label));
        let legend: Vec<String> = self
            .series
            .iter()
            .zip(PALETTE.iter().cycle())
            .map(|(s, (colour, _))| format!("{} ({colour})", s.label))
            .collect();
        text.push_str(&format!("  legend: {}\n", legend.join("   ")));
        text
    }

    fn x_range(&self, points: &[Vec<(f32, f32)>]) -> (f32, f32) {
        let xs = self
            .x_ticks
            .iter()
            .map(|&x| x as f32)
            .filter(|x| x.is_finite())
            .chain(points.iter().flatten().map(|&(x, _)| x));
        xs.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)))
    }
}

fn finite_points(points: &[(f64, f64)]) -> Vec<(f32, f32)> {
    points
        .iter()
        .map(|&(x, y)| (x as f32, y as f32))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

fn draw(shapes: &[Shape<'_>], width: u32, height: u32, xmin: f32, xmax: f32) -> String {
    let mut chart = Chart::new(width, height, xmin, xmax);
    let mut canvas = chart
        .x_label_format(LabelFormat::Custom(Box::new(|x: f32| format!("{x:.0}"))))
        .y_label_format(LabelFormat::Custom(Box::new(|y: f32| format!("{y:.3e}"))));
    for (shape, (_, colour)) in shapes.iter().zip(PALETTE.iter().cycle()) {
        canvas = canvas.linecolorplot(shape, *colour);
    }
    canvas.axis();
    canvas.figures();
    canvas.to_string()
}

/// The chart for one metric, one series per cipher.
#[must_use]
pub fn chart_for(report: &BenchReport, metric: Metric) -> LineChart {
    let (title, y_label) = match metric {
        Metric::Time => ("Cipher Runtime vs Message Size", "Average Runtime (seconds)"),
        Metric::Memory => ("Cipher Memory Usage vs Message Size", "Average Memory Used (MB)"),
        Metric::Ratio => ("Cipher Efficiency Ratio vs Message Size", "Efficiency Ratio (MB / sec)"),
    };
    let ticks: Vec<f64> = report.sizes().into_iter().map(|s| s as f64).collect();
    let mut chart = LineChart::new(title, "Message Size (bytes)", y_label).with_x_ticks(ticks);
    for &cipher in &report.ciphers {
        chart.add_series(cipher, report.series(cipher, metric));
    }
    chart
}

/// Render the runtime, memory, and ratio charts to `out`.
pub fn render_charts<W: Write>(report: &BenchReport, out: &mut W) -> Result<(), BenchError> {
    for metric in Metric::ALL {
        writeln!(out)?;
        write!(out, "{}", chart_for(report, metric).render(CHART_WIDTH, CHART_HEIGHT))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_points_are_skipped() {
        let mut chart = LineChart::new("t", "x", "y");
        chart.add_series("a", vec![(1.0, f64::INFINITY)]);
        assert!(chart.render(10, 4).contains("(no finite data)"));
    }

    #[test]
    fn x_range_covers_ticks_and_points() {
        let chart = LineChart::new("t", "x", "y").with_x_ticks([64.0, 256.0]);
        let range = chart.x_range(&[vec![(1024.0, 1.0)]]);
        assert_eq!(range, (64.0, 1024.0));
    }
}
