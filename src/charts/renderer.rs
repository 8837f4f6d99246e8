//! Static Chart Renderer
//! Draws chart scenes with plotters for export.
//!
//! Layout mirrors the interactive viewer:
//! 1. Title centered above the plot
//! 2. Plot area with axis descriptions and value labels
//! 3. Scatter charts only: color bar strip on the right, labeled with the
//!    color dimension

use super::colormap;
use super::scene::{Annotation, BarScene, Chart, LineScene, ScatterScene, BAR_WIDTH};
use super::Figure;
use crate::error::{ChartError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const FONT: &str = "sans-serif";
const TITLE_SIZE: u32 = 24;
const AXIS_DESC_SIZE: u32 = 18;
const VALUE_LABEL_SIZE: u32 = 15;
const MARGIN: u32 = 15;
const X_LABEL_AREA: u32 = 50;
const Y_LABEL_AREA: u32 = 70;
/// Width reserved for the scatter color bar and its labels.
const COLOR_BAR_AREA: u32 = 140;
const COLOR_BAR_STEPS: usize = 64;

fn render_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Bottom-centered value label style.
fn value_label_style() -> TextStyle<'static> {
    TextStyle::from((FONT, VALUE_LABEL_SIZE).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom))
}

/// Draw value labels on `root` at the pixel positions of their data
/// coordinates. The chart's plotting area would clip a label that sits
/// above the y limit.
fn draw_annotations<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    to_pixel: impl Fn(&(f64, f64)) -> (i32, i32),
    annotations: &[Annotation],
) -> Result<()> {
    let style = value_label_style();
    let (base_x, base_y) = root.get_base_pixel();
    for label in annotations {
        let (x, y) = to_pixel(&(label.x, label.y));
        root.draw(&Text::new(
            label.text.as_str(),
            (x - base_x, y - base_y),
            style.clone(),
        ))
        .map_err(render_err)?;
    }
    Ok(())
}

/// Renders charts to PNG and SVG without a window.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render to PNG-encoded bytes.
    pub fn render_png_bytes(chart: &Chart, figure: &Figure) -> Result<Vec<u8>> {
        let (width, height) = figure.pixels();
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, chart)?;
            root.present().map_err(render_err)?;
        }

        let image = image::RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::Render("bitmap buffer size mismatch".to_string()))?;
        let mut bytes = Vec::new();
        image.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render and write a PNG file.
    pub fn save_png(chart: &Chart, figure: &Figure, path: &Path) -> Result<()> {
        let bytes = Self::render_png_bytes(chart, figure)?;
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), "chart saved");
        Ok(())
    }

    /// Render to an SVG document.
    pub fn render_svg(chart: &Chart, figure: &Figure) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, figure.pixels()).into_drawing_area();
            Self::draw(&root, chart)?;
            root.present().map_err(render_err)?;
        }
        Ok(svg)
    }

    fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> Result<()> {
        root.fill(&WHITE).map_err(render_err)?;
        match chart {
            Chart::Bar(scene) => Self::draw_bar(root, scene),
            Chart::Line(scene) => Self::draw_line(root, scene),
            Chart::Scatter(scene) => Self::draw_scatter(root, scene),
        }
    }

    fn draw_bar<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, scene: &BarScene) -> Result<()> {
        let mut chart = ChartBuilder::on(root)
            .caption(&scene.options.title, (FONT, TITLE_SIZE))
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(
                scene.x_range.min..scene.x_range.max,
                scene.y_range.min..scene.y_range.max,
            )
            .map_err(render_err)?;

        // Integer ticks land on bar centers; label them with the category
        let category = |x: &f64| {
            let idx = x.round();
            if idx < 0.0 || (x - idx).abs() > 1e-6 {
                return String::new();
            }
            scene
                .bars
                .get(idx as usize)
                .map(|b| b.category.clone())
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(scene.bars.len())
            .x_label_formatter(&category)
            .x_desc(scene.options.x_label.as_str())
            .y_desc(scene.options.y_label.as_str())
            .axis_desc_style((FONT, AXIS_DESC_SIZE))
            .draw()
            .map_err(render_err)?;

        let half = BAR_WIDTH / 2.0;
        chart
            .draw_series(scene.bars.iter().map(|bar| {
                Rectangle::new(
                    [(bar.x - half, 0.0), (bar.x + half, bar.height)],
                    bar.color.to_plotters().filled(),
                )
            }))
            .map_err(render_err)?;

        draw_annotations(root, |c| chart.backend_coord(c), &scene.annotations)
    }

    fn draw_line<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        scene: &LineScene,
    ) -> Result<()> {
        let mut chart = ChartBuilder::on(root)
            .caption(&scene.options.title, (FONT, TITLE_SIZE))
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(
                scene.x_range.min..scene.x_range.max,
                scene.y_range.min..scene.y_range.max,
            )
            .map_err(render_err)?;

        let mut mesh = chart.configure_mesh();
        if !scene.grid {
            mesh.disable_mesh();
        }
        mesh.x_desc(scene.options.x_label.as_str())
            .y_desc(scene.options.y_label.as_str())
            .axis_desc_style((FONT, AXIS_DESC_SIZE))
            .draw()
            .map_err(render_err)?;

        let color = scene.style.color.to_plotters();
        let points: Vec<(f64, f64)> = scene.points.iter().map(|p| (p[0], p[1])).collect();

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(scene.style.width.round() as u32),
            ))
            .map_err(render_err)?;

        let radius = scene.style.marker_radius.round() as u32;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, radius, color.filled())),
            )
            .map_err(render_err)?;

        draw_annotations(root, |c| chart.backend_coord(c), &scene.annotations)
    }

    fn draw_scatter<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        scene: &ScatterScene,
    ) -> Result<()> {
        let (width, _) = root.dim_in_pixel();
        let (plot_area, bar_area) = root.split_horizontally(width.saturating_sub(COLOR_BAR_AREA));

        let mut chart = ChartBuilder::on(&plot_area)
            .caption(&scene.options.title, (FONT, TITLE_SIZE))
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(
                scene.x_range.min..scene.x_range.max,
                scene.y_range.min..scene.y_range.max,
            )
            .map_err(render_err)?;

        let mut mesh = chart.configure_mesh();
        if !scene.grid {
            mesh.disable_mesh();
        }
        mesh.x_desc(scene.options.x_label.as_str())
            .y_desc(scene.options.y_label.as_str())
            .axis_desc_style((FONT, AXIS_DESC_SIZE))
            .draw()
            .map_err(render_err)?;

        let radius = scene.marker_radius.round() as u32;
        chart
            .draw_series(scene.markers.iter().map(|m| {
                Circle::new((m.x, m.y), radius, m.color.to_plotters().filled())
            }))
            .map_err(render_err)?;

        Self::draw_color_bar(&bar_area, scene)
    }

    /// Gradient strip from the scale minimum (bottom) to maximum (top).
    fn draw_color_bar<DB: DrawingBackend>(
        area: &DrawingArea<DB, Shift>,
        scene: &ScatterScene,
    ) -> Result<()> {
        let scale = scene.color_bar.scale;
        let (lo, hi) = if scale.max > scale.min {
            (scale.min, scale.max)
        } else {
            (scale.min - 0.5, scale.max + 0.5)
        };

        let mut bar = ChartBuilder::on(area)
            .margin(MARGIN)
            .margin_top(MARGIN + TITLE_SIZE + 10)
            .margin_right(MARGIN + 20)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(0f64..1f64, lo..hi)
            .map_err(render_err)?;

        bar.configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .disable_x_axis()
            .y_desc(scene.color_bar.label.as_str())
            .y_label_formatter(&|v| format!("{v:.2}"))
            .axis_desc_style((FONT, AXIS_DESC_SIZE))
            .draw()
            .map_err(render_err)?;

        let step = (hi - lo) / COLOR_BAR_STEPS as f64;
        bar.draw_series((0..COLOR_BAR_STEPS).map(|i| {
            let t = (i as f64 + 0.5) / COLOR_BAR_STEPS as f64;
            let bottom = lo + step * i as f64;
            Rectangle::new(
                [(0.0, bottom), (1.0, bottom + step)],
                colormap::viridis(t).to_plotters().filled(),
            )
        }))
        .map_err(render_err)?;

        Ok(())
    }
}
