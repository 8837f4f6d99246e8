//! End-to-end scene checks for the three chart kinds.

use perfcharts::charts::colormap::ColorScale;
use perfcharts::data::{samples, split_gemm, split_queue, split_threads};
use perfcharts::{Chart, ChartOptions, Rgb};

fn opts(title: &str) -> ChartOptions {
    ChartOptions::new(title).x_label("x").y_label("y")
}

#[test]
fn bar_two_categories() {
    let chart = Chart::bar(&["A", "B"], &[1.23, 0.98], opts("bar"), &[]).unwrap();
    let Chart::Bar(scene) = &chart else {
        panic!("expected bar scene");
    };

    let heights: Vec<f64> = scene.bars.iter().map(|b| b.height).collect();
    assert_eq!(heights, vec![1.23, 0.98]);
    assert!((scene.y_range.max - 1.476).abs() < 1e-9);

    let labels: Vec<&str> = chart.annotations().iter().map(|a| a.text.as_str()).collect();
    assert_eq!(labels, vec!["1.23", "0.98"]);
}

#[test]
fn line_two_points() {
    let chart = Chart::line(&[1.0, 2.0], &[15.23, 8.12], opts("line")).unwrap();
    let Chart::Line(scene) = &chart else {
        panic!("expected line scene");
    };

    assert_eq!(scene.points, vec![[1.0, 15.23], [2.0, 8.12]]);
    let labels: Vec<(&str, f64)> = chart
        .annotations()
        .iter()
        .map(|a| (a.text.as_str(), a.x))
        .collect();
    assert_eq!(labels, vec![("15.23", 1.0), ("8.12", 2.0)]);
}

#[test]
fn scatter_two_markers_share_scale() {
    let chart = Chart::scatter(&[1.0, 2.0], &[1.0, 2.0], &[5.1, 3.8], opts("scatter"), "t").unwrap();
    let Chart::Scatter(scene) = &chart else {
        panic!("expected scatter scene");
    };

    let scale = ColorScale { min: 3.8, max: 5.1 };
    assert_eq!(scene.color_bar.scale, scale);
    assert_eq!(scene.markers.len(), 2);
    assert_eq!((scene.markers[0].x, scene.markers[0].y), (1.0, 1.0));
    assert_eq!((scene.markers[1].x, scene.markers[1].y), (2.0, 2.0));
    assert_eq!(scene.markers[0].color, scale.color(5.1));
    assert_eq!(scene.markers[1].color, scale.color(3.8));
    assert!(chart.annotations().is_empty());
}

#[test]
fn gemm_sample_chart() {
    let (methods, times) = split_gemm(samples::GEMM_TIMINGS);
    let chart = Chart::bar(&methods, &times, opts("gemm"), samples::GEMM_COLORS).unwrap();
    let Chart::Bar(scene) = &chart else {
        panic!("expected bar scene");
    };

    assert!((scene.y_range.max - 1.45 * 1.2).abs() < 1e-9);
    assert_eq!(scene.bars[3].category, "Gemm_Tiling");
    assert_eq!(scene.bars[3].color, Rgb::RED);
    assert_eq!(chart.annotations().len(), samples::GEMM_TIMINGS.len());
}

#[test]
fn thread_sample_chart_keeps_thread_order() {
    let (threads, times) = split_threads(samples::THREAD_TIMINGS);
    let chart = Chart::line(&threads, &times, opts("threads")).unwrap();
    let xs: Vec<f64> = chart.annotations().iter().map(|a| a.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 4.0, 8.0, 16.0]);
}

#[test]
fn queue_sample_chart_has_marker_per_record() {
    let cols = split_queue(samples::QUEUE_TIMINGS);
    let chart = Chart::scatter(
        &cols.producers,
        &cols.consumers,
        &cols.times,
        opts("queue"),
        "Execution Time (seconds)",
    )
    .unwrap();
    let Chart::Scatter(scene) = &chart else {
        panic!("expected scatter scene");
    };
    assert_eq!(scene.markers.len(), samples::QUEUE_TIMINGS.len());
    assert_eq!(scene.color_bar.scale.min, 3.1);
    assert_eq!(scene.color_bar.scale.max, 5.1);
}
