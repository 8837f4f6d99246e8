//! Chart Viewer Widget
//! Central panel showing a single chart with its title.

use crate::charts::{Chart, ChartPlotter};
use egui::RichText;

/// Displays one chart filling the available space.
pub struct ChartViewer {
    pub chart: Chart,
}

impl ChartViewer {
    pub fn new(chart: Chart) -> Self {
        Self { chart }
    }

    /// Draw the title centered above the chart.
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&self.chart.options().title)
                    .size(18.0)
                    .strong(),
            );
        });
        ui.add_space(8.0);

        ChartPlotter::draw_chart(ui, &self.chart);
    }
}
