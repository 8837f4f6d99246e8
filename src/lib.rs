//! perfcharts - Benchmark result charts
//!
//! Renders hand-entered benchmark measurements (GEMM variants, thread
//! scaling, producer/consumer runs) as bar, line and color-mapped scatter
//! charts in a native viewer window, with PNG/SVG export.

pub mod charts;
pub mod data;
pub mod display;
pub mod error;
pub mod gui;
pub mod logging;

pub use charts::{Chart, ChartOptions, Figure, Rgb, StaticChartRenderer};
pub use display::{render_bar, render_line, render_scatter_colormap, show};
pub use error::{ChartError, Result};
