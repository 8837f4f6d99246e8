//! Blocking chart display and the three chart operations.

use crate::charts::{Chart, ChartOptions, Figure, Rgb};
use crate::error::{ChartError, Result};
use crate::gui::ChartWindow;
use eframe::egui;

/// Open a window showing `chart` and block until it is closed.
pub fn show(chart: Chart, figure: Figure) -> Result<()> {
    let (width, height) = figure.pixels();
    let title = chart.options().title.clone();
    tracing::info!(%title, width, height, "opening chart window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32 + 40.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ChartWindow::new(cc, chart, figure)))),
    )
    .map_err(|e| ChartError::Display(e.to_string()))?;

    tracing::info!("chart window closed");
    Ok(())
}

/// Bar chart with a bar per category, y axis up to 1.2 × the tallest bar
/// and each bar labeled with its value.
pub fn render_bar(
    categories: &[impl AsRef<str>],
    values: &[f64],
    options: ChartOptions,
    colors: &[Rgb],
) -> Result<()> {
    show(Chart::bar(categories, values, options, colors)?, Figure::default())
}

/// Line chart with markers, value labels and grid lines.
pub fn render_line(x_values: &[f64], y_values: &[f64], options: ChartOptions) -> Result<()> {
    show(Chart::line(x_values, y_values, options)?, Figure::default())
}

/// Scatter plot colored by `color_values`, with a color bar labeled
/// `color_label`.
pub fn render_scatter_colormap(
    x_values: &[f64],
    y_values: &[f64],
    color_values: &[f64],
    options: ChartOptions,
    color_label: impl Into<String>,
) -> Result<()> {
    let chart = Chart::scatter(x_values, y_values, color_values, options, color_label)?;
    show(chart, Figure::default())
}
