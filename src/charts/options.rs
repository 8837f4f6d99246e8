//! Display options, colors and figure settings.

/// 8-bit RGB color shared by both drawing backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const SKYBLUE: Rgb = Rgb(135, 206, 235);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Default bar fill when no colors are supplied.
    pub const DEFAULT_BAR: Rgb = Rgb(31, 119, 180);

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.0, self.1, self.2)
    }

    pub fn to_plotters(self) -> plotters::style::RGBColor {
        plotters::style::RGBColor(self.0, self.1, self.2)
    }
}

/// Title and axis labels of a chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }
}

/// Connected-line appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: f32,
    /// Marker radius in pixels.
    pub marker_radius: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BLUE,
            width: 2.0,
            marker_radius: 4.0,
        }
    }
}

/// Output figure size. Defaults to 10 x 6 inches at 100 DPI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: u32,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            width_in: 10.0,
            height_in: 6.0,
            dpi: 100,
        }
    }
}

impl Figure {
    /// Pixel dimensions (width, height).
    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f32).round() as u32,
            (self.height_in * self.dpi as f32).round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_figure_is_1000_by_600() {
        assert_eq!(Figure::default().pixels(), (1000, 600));
    }

    #[test]
    fn options_builder_sets_labels() {
        let opts = ChartOptions::new("T").x_label("X").y_label("Y");
        assert_eq!(opts.title, "T");
        assert_eq!(opts.x_label, "X");
        assert_eq!(opts.y_label, "Y");
    }
}
