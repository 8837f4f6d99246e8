//! Chart Window
//! Native window showing one chart, with PNG export.

use crate::charts::{Chart, Figure, StaticChartRenderer};
use crate::gui::ChartViewer;
use egui::{Color32, RichText, TopBottomPanel};

/// Outcome of the last export, shown in the header.
enum ExportStatus {
    Idle,
    Saved(String),
    Failed(String),
}

/// Viewer window for a single chart.
pub struct ChartWindow {
    chart_viewer: ChartViewer,
    figure: Figure,
    status: ExportStatus,
}

impl ChartWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, chart: Chart, figure: Figure) -> Self {
        // Value labels are drawn black, so keep a light background
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self {
            chart_viewer: ChartViewer::new(chart),
            figure,
            status: ExportStatus::Idle,
        }
    }

    /// Ask for a destination and write the chart as PNG.
    fn handle_export_png(&mut self) {
        let file_name = default_file_name(&self.chart_viewer.chart.options().title);
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(&file_name)
            .save_file()
        else {
            return;
        };

        self.status =
            match StaticChartRenderer::save_png(&self.chart_viewer.chart, &self.figure, &path) {
                Ok(()) => ExportStatus::Saved(path.display().to_string()),
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "PNG export failed");
                    ExportStatus::Failed(e.to_string())
                }
            };
    }
}

/// File name derived from a chart title: lowercase, non-alphanumerics
/// collapsed to single underscores.
fn default_file_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_lowercase());
        } else if !name.ends_with('_') {
            name.push('_');
        }
    }
    let name = name.trim_matches('_');
    if name.is_empty() {
        "chart.png".to_string()
    } else {
        format!("{name}.png")
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("💾 Save PNG").size(14.0)).clicked() {
                    self.handle_export_png();
                }
                match &self.status {
                    ExportStatus::Idle => {}
                    ExportStatus::Saved(path) => {
                        ui.label(RichText::new(format!("Saved {path}")).size(12.0));
                    }
                    ExportStatus::Failed(err) => {
                        ui.label(
                            RichText::new(format!("Export failed: {err}"))
                                .size(12.0)
                                .color(Color32::from_rgb(220, 53, 69)),
                        );
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::default_file_name;

    #[test]
    fn file_name_from_title() {
        assert_eq!(
            default_file_name("Execution Times of GEMM Variants"),
            "execution_times_of_gemm_variants.png"
        );
        assert_eq!(default_file_name("  --  "), "chart.png");
    }
}
