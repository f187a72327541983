use approx::assert_abs_diff_eq;
use pluvio_chart::api::{
    AxisLabels, ChartEngine, ChartEngineConfig, LineGeometry, MonthlyAccumulation, PathRole,
    monthly_series,
};
use pluvio_chart::core::{Sample, Series, Viewport};
use pluvio_chart::render::{CanvasLayerKind, NullRenderer};

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 400)),
    )
    .expect("engine init")
}

fn month(year: i32, month: u32, accumulated_mm: f64) -> MonthlyAccumulation {
    MonthlyAccumulation {
        year,
        month,
        accumulated_mm,
    }
}

#[test]
fn monthly_history_draws_one_polyline_across_the_plot() {
    let series = monthly_series(&[
        month(2023, 1, 250.5),
        month(2023, 2, 180.0),
        month(2023, 3, 100.0),
    ])
    .expect("series");

    let mut engine = engine();
    engine
        .render(series, LineGeometry, AxisLabels::new("Mês", "mm"))
        .expect("render");

    let chart = engine.chart().expect("chart");
    let path = chart.geometry().path(PathRole::Observed).expect("path");
    assert_eq!(path.len(), 3);
    assert_abs_diff_eq!(path[0].x, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(path[2].x, 770.0, epsilon = 1e-9);
    assert!(path.windows(2).all(|pair| pair[0].x < pair[1].x));
    assert!(chart.geometry().marker().is_none());

    let (_, y_max) = chart.scales().y.domain();
    assert_abs_diff_eq!(y_max, 250.5 * 1.05, epsilon = 1e-9);

    let series_layer = engine
        .frame()
        .layer(CanvasLayerKind::Series)
        .expect("series layer");
    assert_eq!(series_layer.polylines.len(), 1);
    assert!(series_layer.rects.is_empty());
}

#[test]
fn single_sample_renders_a_centered_point() {
    let series = Series::new(vec![Sample::new(1_700_000_000.0, 42.0)]).expect("series");

    let mut engine = engine();
    engine
        .render(series, LineGeometry, AxisLabels::none())
        .expect("degenerate render must succeed");

    let chart = engine.chart().expect("chart");
    let marker = chart.geometry().marker().expect("marker for single point");
    assert_abs_diff_eq!(marker.x, 415.0, epsilon = 1e-9);
    assert!(marker.y.is_finite());

    let series_layer = engine
        .frame()
        .layer(CanvasLayerKind::Series)
        .expect("series layer");
    assert_eq!(series_layer.circles.len(), 1);
    assert!(!chart.x_ticks().is_empty());
}

#[test]
fn all_zero_values_still_produce_a_valid_chart() {
    let series = monthly_series(&[month(2023, 1, 0.0), month(2023, 2, 0.0)]).expect("series");

    let mut engine = engine();
    engine
        .render(series, LineGeometry, AxisLabels::none())
        .expect("render");

    let chart = engine.chart().expect("chart");
    assert_eq!(chart.scales().y.domain(), (0.0, 1.0));
    let path = chart.geometry().path(PathRole::Observed).expect("path");
    assert!(path.iter().all(|vertex| (vertex.y - 360.0).abs() <= 1e-9));
}

#[test]
fn rendering_the_same_input_twice_yields_identical_frames() {
    let input = [
        month(2022, 11, 90.0),
        month(2022, 12, 130.0),
        month(2023, 1, 210.0),
    ];

    let mut engine = engine();
    engine
        .render(
            monthly_series(&input).expect("series"),
            LineGeometry,
            AxisLabels::new("Mês", "mm"),
        )
        .expect("first render");
    let first = engine.frame().clone();
    let first_snapshot = engine.snapshot().chart;

    engine
        .render(
            monthly_series(&input).expect("series"),
            LineGeometry,
            AxisLabels::new("Mês", "mm"),
        )
        .expect("second render");

    assert_eq!(engine.frame(), &first);
    assert_eq!(engine.snapshot().chart, first_snapshot);
    assert_eq!(engine.renderer().render_count, 2);
}

#[test]
fn short_history_gets_month_year_tick_labels() {
    let series = monthly_series(&[month(2023, 1, 10.0), month(2023, 6, 20.0)]).expect("series");

    let mut engine = engine();
    engine
        .render(series, LineGeometry, AxisLabels::none())
        .expect("render");

    let labels: Vec<&str> = engine
        .chart()
        .expect("chart")
        .x_ticks()
        .iter()
        .map(|tick| tick.label.as_str())
        .collect();
    assert_eq!(labels, ["Jan 2023", "Mar 2023", "May 2023"]);
}
