//! Bar chart of GEMM variant execution times.

use perfcharts::data::{samples, split_gemm};
use perfcharts::{logging, render_bar, ChartOptions};

fn main() -> anyhow::Result<()> {
    logging::init();

    let (methods, execution_times) = split_gemm(samples::GEMM_TIMINGS);
    let options = ChartOptions::new("Execution Times of GEMM Variants")
        .x_label("GEMM Variant")
        .y_label("Execution Time (seconds)");

    render_bar(&methods, &execution_times, options, samples::GEMM_COLORS)?;
    Ok(())
}
