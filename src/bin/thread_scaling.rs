//! Line chart of execution time against thread count.

use perfcharts::data::{samples, split_threads};
use perfcharts::{logging, render_line, ChartOptions};

fn main() -> anyhow::Result<()> {
    logging::init();

    let (thread_counts, execution_times) = split_threads(samples::THREAD_TIMINGS);
    let options =
        ChartOptions::new("Execution Time vs Number of Threads for Parallel Matrix Multiplication")
            .x_label("Number of Threads")
            .y_label("Execution Time (seconds)");

    render_line(&thread_counts, &execution_times, options)?;
    Ok(())
}
