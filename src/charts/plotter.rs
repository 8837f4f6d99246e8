//! Chart Plotter Module
//! Draws chart scenes interactively using egui_plot.

use super::scene::{Annotation, BarScene, Chart, LineScene, ScatterScene, BAR_WIDTH};
use super::{colormap, Rgb};
use egui::{Align2, Color32, FontId, RichText};
use egui_plot::{
    Bar, BarChart, GridMark, Line, MarkerShape, Plot, PlotBounds, PlotPoint, PlotPoints, PlotUi,
    Points,
};
use std::ops::RangeInclusive;

/// Width of the scatter color bar strip.
const COLOR_BAR_WIDTH: f32 = 18.0;
/// Space reserved right of the strip for tick labels.
const COLOR_BAR_LABEL_SPACE: f32 = 60.0;
const COLOR_BAR_STEPS: usize = 64;
const COLOR_BAR_TICKS: usize = 5;

/// Draws `Chart` scenes with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw any chart into the remaining space of `ui`.
    pub fn draw_chart(ui: &mut egui::Ui, chart: &Chart) {
        match chart {
            Chart::Bar(scene) => Self::draw_bar_chart(ui, scene),
            Chart::Line(scene) => Self::draw_line_chart(ui, scene),
            Chart::Scatter(scene) => Self::draw_scatter_chart(ui, scene),
        }
    }

    /// Screen positions of value labels, taken from the plot transform.
    fn annotation_positions(
        plot_ui: &PlotUi,
        annotations: &[Annotation],
    ) -> Vec<(egui::Pos2, String)> {
        let transform = plot_ui.transform();
        annotations
            .iter()
            .map(|label| {
                let pos = transform.position_from_point(&PlotPoint::new(label.x, label.y));
                (pos, label.text.clone())
            })
            .collect()
    }

    /// Paint value labels with the outer painter. Plot items are clipped to
    /// the plot frame, and a label just above the y limit must stay visible.
    fn paint_annotations(ui: &egui::Ui, labels: &[(egui::Pos2, String)]) {
        let painter = ui.painter();
        for (pos, text) in labels {
            painter.text(
                *pos,
                Align2::CENTER_BOTTOM,
                text,
                FontId::proportional(12.0),
                Color32::BLACK,
            );
        }
    }

    /// Bars at x = 0..n with category names on the x axis and a fixed
    /// y range.
    pub fn draw_bar_chart(ui: &mut egui::Ui, scene: &BarScene) {
        let categories: Vec<String> = scene.bars.iter().map(|b| b.category.clone()).collect();
        let bounds = PlotBounds::from_min_max(
            [scene.x_range.min, scene.y_range.min],
            [scene.x_range.max, scene.y_range.max],
        );

        let response = Plot::new(format!("bar_{}", scene.options.title))
            .x_axis_label(scene.options.x_label.as_str())
            .y_axis_label(scene.options.y_label.as_str())
            .show_grid(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_grid_spacer(move |_input| {
                (0..categories.len())
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter({
                let names: Vec<String> = scene.bars.iter().map(|b| b.category.clone()).collect();
                move |mark: GridMark, _range: &RangeInclusive<f64>| {
                    let idx = mark.value.round();
                    if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                        return String::new();
                    }
                    names.get(idx as usize).cloned().unwrap_or_default()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(bounds);

                let bars: Vec<Bar> = scene
                    .bars
                    .iter()
                    .map(|bar| {
                        Bar::new(bar.x, bar.height)
                            .width(BAR_WIDTH)
                            .fill(bar.color.to_color32())
                            .name(&bar.category)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));

                Self::annotation_positions(plot_ui, &scene.annotations)
            });

        Self::paint_annotations(ui, &response.inner);
    }

    /// Connected line with circle markers and value labels.
    pub fn draw_line_chart(ui: &mut egui::Ui, scene: &LineScene) {
        let bounds = PlotBounds::from_min_max(
            [scene.x_range.min, scene.y_range.min],
            [scene.x_range.max, scene.y_range.max],
        );
        let color = scene.style.color.to_color32();

        let response = Plot::new(format!("line_{}", scene.options.title))
            .x_axis_label(scene.options.x_label.as_str())
            .y_axis_label(scene.options.y_label.as_str())
            .show_grid(scene.grid)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(bounds);

                plot_ui.line(
                    Line::new(PlotPoints::from_iter(scene.points.iter().copied()))
                        .color(color)
                        .width(scene.style.width),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(scene.points.iter().copied()))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(scene.style.marker_radius)
                        .color(color),
                );

                Self::annotation_positions(plot_ui, &scene.annotations)
            });

        Self::paint_annotations(ui, &response.inner);
    }

    /// Markers colored on the viridis scale, with a color bar to the right.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, scene: &ScatterScene) {
        let bounds = PlotBounds::from_min_max(
            [scene.x_range.min, scene.y_range.min],
            [scene.x_range.max, scene.y_range.max],
        );
        let plot_width = (ui.available_width() - COLOR_BAR_WIDTH - COLOR_BAR_LABEL_SPACE - 20.0)
            .max(COLOR_BAR_WIDTH);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_width(plot_width);
                Plot::new(format!("scatter_{}", scene.options.title))
                    .x_axis_label(scene.options.x_label.as_str())
                    .y_axis_label(scene.options.y_label.as_str())
                    .show_grid(scene.grid)
                    .allow_zoom(false)
                    .allow_drag(false)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.set_plot_bounds(bounds);

                        // egui_plot colors a whole series at once: one per marker
                        for marker in &scene.markers {
                            plot_ui.points(
                                Points::new(vec![[marker.x, marker.y]])
                                    .shape(MarkerShape::Circle)
                                    .filled(true)
                                    .radius(scene.marker_radius)
                                    .color(marker.color.to_color32())
                                    .name(format!("{:.2}", marker.value)),
                            );
                        }
                    });
            });

            ui.add_space(10.0);
            Self::draw_color_bar(ui, scene);
        });
    }

    /// Vertical gradient strip with min..max tick labels.
    fn draw_color_bar(ui: &mut egui::Ui, scene: &ScatterScene) {
        let scale = scene.color_bar.scale;

        ui.vertical(|ui| {
            ui.label(RichText::new(&scene.color_bar.label).size(12.0));

            let height = (ui.available_height() - 40.0).max(100.0);
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(COLOR_BAR_WIDTH + COLOR_BAR_LABEL_SPACE, height),
                egui::Sense::hover(),
            );
            let painter = ui.painter_at(rect);
            let strip_left = rect.left();
            let strip_right = rect.left() + COLOR_BAR_WIDTH;
            let step_h = height / COLOR_BAR_STEPS as f32;

            // Top of the strip is the maximum value
            for step in 0..COLOR_BAR_STEPS {
                let t = 1.0 - (step as f64 + 0.5) / COLOR_BAR_STEPS as f64;
                let top = rect.top() + step as f32 * step_h;
                painter.rect_filled(
                    egui::Rect::from_min_max(
                        egui::pos2(strip_left, top),
                        egui::pos2(strip_right, top + step_h + 0.5),
                    ),
                    0.0,
                    colormap::viridis(t).to_color32(),
                );
            }

            let text_color = ui.visuals().text_color();
            for tick in 0..COLOR_BAR_TICKS {
                let t = tick as f64 / (COLOR_BAR_TICKS - 1) as f64;
                let value = scale.min + t * (scale.max - scale.min);
                let y = rect.bottom() - t as f32 * height;
                painter.line_segment(
                    [egui::pos2(strip_right, y), egui::pos2(strip_right + 4.0, y)],
                    egui::Stroke::new(1.0, Rgb::BLACK.to_color32()),
                );
                painter.text(
                    egui::pos2(strip_right + 6.0, y),
                    Align2::LEFT_CENTER,
                    format!("{value:.2}"),
                    FontId::proportional(11.0),
                    text_color,
                );
            }
        });
    }
}
