//! Chart Scene Module
//! Backend-independent chart geometry: bars, points, markers, value labels
//! and axis ranges. Both the interactive plotter and the static renderer
//! draw from a `Chart`, so layout rules live here only.

use super::colormap::ColorScale;
use super::{ChartOptions, LineStyle, Rgb};
use crate::error::{ChartError, Result};

/// Bar chart y-axis upper bound as a multiple of the tallest bar.
pub const BAR_HEADROOM: f64 = 1.2;
pub const BAR_WIDTH: f64 = 0.8;
/// Data-unit gap between a bar top and its value label.
pub const BAR_LABEL_OFFSET: f64 = 0.05;
/// Data-unit gap between a line point and its value label.
pub const LINE_LABEL_OFFSET: f64 = 0.1;
/// Scatter marker radius in pixels.
pub const SCATTER_MARKER_RADIUS: f32 = 7.0;
/// Fraction of the data span added on each side of auto-scaled axes.
const AXIS_MARGIN: f64 = 0.05;

/// Closed axis interval in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest range covering `values`, widened by the axis margin.
    fn auto(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let span = max - min;
        if span <= 0.0 {
            return Some(Self::new(min - 0.5, max + 0.5));
        }
        let pad = span * AXIS_MARGIN;
        Some(Self::new(min - pad, max + pad))
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Text label anchored at its bottom center.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Value label text: always two decimal places.
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: String,
    /// Bar center; bars sit at 0, 1, 2, ...
    pub x: f64,
    pub height: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarScene {
    pub options: ChartOptions,
    pub bars: Vec<Bar>,
    pub annotations: Vec<Annotation>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineScene {
    pub options: ChartOptions,
    /// Points in the order supplied; never sorted.
    pub points: Vec<[f64; 2]>,
    pub annotations: Vec<Annotation>,
    pub style: LineStyle,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub grid: bool,
}

/// One scatter marker colored by its value on the chart's color scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub color: Rgb,
}

/// Color legend of a scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBar {
    pub label: String,
    pub scale: ColorScale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterScene {
    pub options: ChartOptions,
    pub markers: Vec<Marker>,
    pub color_bar: ColorBar,
    pub marker_radius: f32,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub grid: bool,
}

/// A fully laid out chart, ready for either backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarScene),
    Line(LineScene),
    Scatter(ScatterScene),
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(ChartError::LengthMismatch { expected, actual });
    }
    Ok(())
}

impl Chart {
    /// One bar per category. Colors are applied in order and cycle; with
    /// no colors every bar uses `Rgb::DEFAULT_BAR`.
    pub fn bar(
        categories: &[impl AsRef<str>],
        values: &[f64],
        options: ChartOptions,
        colors: &[Rgb],
    ) -> Result<Self> {
        if categories.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        check_len(categories.len(), values.len())?;

        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let bars: Vec<Bar> = categories
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (category, &height))| Bar {
                category: category.as_ref().to_string(),
                x: i as f64,
                height,
                color: if colors.is_empty() {
                    Rgb::DEFAULT_BAR
                } else {
                    colors[i % colors.len()]
                },
            })
            .collect();

        let annotations = bars
            .iter()
            .map(|bar| Annotation {
                text: format_value(bar.height),
                x: bar.x,
                y: bar.height + BAR_LABEL_OFFSET,
            })
            .collect();

        tracing::debug!(bars = bars.len(), y_max = max * BAR_HEADROOM, "bar scene built");

        Ok(Chart::Bar(BarScene {
            options,
            x_range: AxisRange::new(-0.5, bars.len() as f64 - 0.5),
            y_range: AxisRange::new(0.0, max * BAR_HEADROOM),
            bars,
            annotations,
        }))
    }

    /// Connected line with a marker and value label at every point.
    pub fn line(x_values: &[f64], y_values: &[f64], options: ChartOptions) -> Result<Self> {
        if x_values.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        check_len(x_values.len(), y_values.len())?;

        let points: Vec<[f64; 2]> = x_values
            .iter()
            .zip(y_values)
            .map(|(&x, &y)| [x, y])
            .collect();

        let annotations: Vec<Annotation> = points
            .iter()
            .map(|&[x, y]| Annotation {
                text: format_value(y),
                x,
                y: y + LINE_LABEL_OFFSET,
            })
            .collect();

        let x_range = AxisRange::auto(x_values.iter().copied()).ok_or(ChartError::EmptyDataset)?;
        let y_range = AxisRange::auto(
            y_values
                .iter()
                .copied()
                .chain(annotations.iter().map(|a| a.y)),
        )
        .ok_or(ChartError::EmptyDataset)?;

        tracing::debug!(points = points.len(), "line scene built");

        Ok(Chart::Line(LineScene {
            options,
            points,
            annotations,
            style: LineStyle::default(),
            x_range,
            y_range,
            grid: true,
        }))
    }

    /// One marker per (x, y) pair, duplicates included, colored by
    /// `color_values` on a viridis scale spanning their min and max.
    pub fn scatter(
        x_values: &[f64],
        y_values: &[f64],
        color_values: &[f64],
        options: ChartOptions,
        color_label: impl Into<String>,
    ) -> Result<Self> {
        if x_values.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        check_len(x_values.len(), y_values.len())?;
        check_len(x_values.len(), color_values.len())?;

        let scale = ColorScale::from_values(color_values).ok_or(ChartError::EmptyDataset)?;

        let markers: Vec<Marker> = x_values
            .iter()
            .zip(y_values)
            .zip(color_values)
            .map(|((&x, &y), &value)| Marker {
                x,
                y,
                value,
                color: scale.color(value),
            })
            .collect();

        let x_range = AxisRange::auto(x_values.iter().copied()).ok_or(ChartError::EmptyDataset)?;
        let y_range = AxisRange::auto(y_values.iter().copied()).ok_or(ChartError::EmptyDataset)?;

        tracing::debug!(markers = markers.len(), "scatter scene built");

        Ok(Chart::Scatter(ScatterScene {
            options,
            markers,
            color_bar: ColorBar {
                label: color_label.into(),
                scale,
            },
            marker_radius: SCATTER_MARKER_RADIUS,
            x_range,
            y_range,
            grid: true,
        }))
    }

    pub fn options(&self) -> &ChartOptions {
        match self {
            Chart::Bar(scene) => &scene.options,
            Chart::Line(scene) => &scene.options,
            Chart::Scatter(scene) => &scene.options,
        }
    }

    /// Value labels drawn on the chart. Scatter charts have none.
    pub fn annotations(&self) -> &[Annotation] {
        match self {
            Chart::Bar(scene) => &scene.annotations,
            Chart::Line(scene) => &scene.annotations,
            Chart::Scatter(_) => &[],
        }
    }

    pub fn y_range(&self) -> AxisRange {
        match self {
            Chart::Bar(scene) => scene.y_range,
            Chart::Line(scene) => scene.y_range,
            Chart::Scatter(scene) => scene.y_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ChartOptions {
        ChartOptions::new("test").x_label("x").y_label("y")
    }

    #[test]
    fn bar_y_limit_is_headroom_times_max() {
        for values in [vec![1.23, 0.98, 1.45, 0.75], vec![3.0], vec![0.5, 0.5]] {
            let cats: Vec<String> = (0..values.len()).map(|i| format!("c{i}")).collect();
            let chart = Chart::bar(&cats, &values, opts(), &[]).unwrap();
            let max = values.iter().copied().fold(f64::MIN, f64::max);
            let range = chart.y_range();
            assert_eq!(range.min, 0.0);
            assert!((range.max - 1.2 * max).abs() < 1e-12);
        }
    }

    #[test]
    fn bar_labels_sit_above_centered_bars() {
        let Chart::Bar(scene) = Chart::bar(&["a", "b"], &[1.0, 2.5], opts(), &[]).unwrap() else {
            panic!("expected bar scene");
        };
        assert_eq!(scene.annotations.len(), 2);
        for (bar, label) in scene.bars.iter().zip(&scene.annotations) {
            assert_eq!(label.x, bar.x);
            assert!(label.y > bar.height);
            assert!(scene.y_range.contains(label.y));
        }
        assert_eq!(scene.x_range, AxisRange::new(-0.5, 1.5));
    }

    #[test]
    fn small_bars_keep_a_label_each_above_the_y_limit() {
        let chart = Chart::bar(&["a", "b"], &[0.1, 0.05], opts(), &[]).unwrap();
        let Chart::Bar(scene) = &chart else {
            panic!("expected bar scene");
        };
        assert!((scene.y_range.max - 0.12).abs() < 1e-12);

        let texts: Vec<&str> = chart.annotations().iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["0.10", "0.05"]);
        // Labels may sit above the y limit; both backends draw them unclipped
        assert!(!scene.y_range.contains(scene.annotations[0].y));
    }

    #[test]
    fn bar_colors_cycle_and_default() {
        let cats = ["a", "b", "c"];
        let values = [1.0, 2.0, 3.0];

        let Chart::Bar(scene) = Chart::bar(&cats, &values, opts(), &[Rgb::RED, Rgb::GREEN]).unwrap()
        else {
            panic!("expected bar scene");
        };
        let colors: Vec<Rgb> = scene.bars.iter().map(|b| b.color).collect();
        assert_eq!(colors, vec![Rgb::RED, Rgb::GREEN, Rgb::RED]);

        let Chart::Bar(scene) = Chart::bar(&cats, &values, opts(), &[]).unwrap() else {
            panic!("expected bar scene");
        };
        assert!(scene.bars.iter().all(|b| b.color == Rgb::DEFAULT_BAR));
    }

    #[test]
    fn labels_use_two_decimals() {
        let chart = Chart::line(&[1.0, 2.0, 3.0], &[15.234, 8.0, 0.006], opts()).unwrap();
        let texts: Vec<&str> = chart.annotations().iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["15.23", "8.00", "0.01"]);
    }

    #[test]
    fn line_keeps_supplied_order() {
        let x = [8.0, 1.0, 4.0];
        let Chart::Line(scene) = Chart::line(&x, &[1.0, 2.0, 3.0], opts()).unwrap() else {
            panic!("expected line scene");
        };
        let xs: Vec<f64> = scene.points.iter().map(|p| p[0]).collect();
        assert_eq!(xs, x.to_vec());
        assert!(scene.grid);
    }

    #[test]
    fn line_range_covers_points_and_labels() {
        let Chart::Line(scene) = Chart::line(&[1.0, 16.0], &[15.23, 1.45], opts()).unwrap() else {
            panic!("expected line scene");
        };
        for a in &scene.annotations {
            assert!(scene.x_range.contains(a.x));
            assert!(scene.y_range.contains(a.y));
        }
    }

    #[test]
    fn single_point_range_is_widened() {
        let chart = Chart::line(&[2.0], &[3.0], opts()).unwrap();
        let Chart::Line(scene) = chart else {
            panic!("expected line scene");
        };
        assert!(scene.x_range.span() > 0.0);
        assert!(scene.x_range.contains(2.0));
    }

    #[test]
    fn scatter_keeps_duplicate_pairs() {
        let x = [1.0, 1.0, 2.0];
        let y = [1.0, 1.0, 2.0];
        let c = [5.0, 4.0, 3.0];
        let Chart::Scatter(scene) = Chart::scatter(&x, &y, &c, opts(), "time").unwrap() else {
            panic!("expected scatter scene");
        };
        assert_eq!(scene.markers.len(), 3);
        assert_eq!(scene.color_bar.label, "time");
        assert_ne!(scene.markers[0].color, scene.markers[1].color);
        assert!(scene.grid);
    }

    #[test]
    fn empty_input_is_rejected() {
        let none: [&str; 0] = [];
        assert!(matches!(
            Chart::bar(&none, &[], opts(), &[]),
            Err(ChartError::EmptyDataset)
        ));
        assert!(matches!(
            Chart::line(&[], &[], opts()),
            Err(ChartError::EmptyDataset)
        ));
        assert!(matches!(
            Chart::scatter(&[], &[], &[], opts(), ""),
            Err(ChartError::EmptyDataset)
        ));
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        assert!(matches!(
            Chart::line(&[1.0, 2.0], &[1.0], opts()),
            Err(ChartError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert!(matches!(
            Chart::scatter(&[1.0], &[1.0], &[1.0, 2.0], opts(), ""),
            Err(ChartError::LengthMismatch { .. })
        ));
    }
}
