//! Scatter plot of producer/consumer runs colored by execution time.

use perfcharts::data::{samples, split_queue};
use perfcharts::{logging, render_scatter_colormap, ChartOptions};

fn main() -> anyhow::Result<()> {
    logging::init();

    let columns = split_queue(samples::QUEUE_TIMINGS);
    let options = ChartOptions::new("Execution Time with Varying Producers and Consumers")
        .x_label("Number of Producers")
        .y_label("Number of Consumers");

    render_scatter_colormap(
        &columns.producers,
        &columns.consumers,
        &columns.times,
        options,
        "Execution Time (seconds)",
    )?;
    Ok(())
}
