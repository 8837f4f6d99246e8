//! Charts module - Scene layout and rendering

pub mod colormap;
mod options;
mod plotter;
mod renderer;
pub mod scene;

pub use colormap::ColorScale;
pub use options::{ChartOptions, Figure, LineStyle, Rgb};
pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
pub use scene::{AxisRange, Chart};
