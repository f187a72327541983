use pluvio_chart::ChartError;
use pluvio_chart::api::{
    AxisLabels, BarGeometry, ChartEngine, ChartEngineConfig, GeometryKind, LineGeometry,
    MonthlyAccumulation, monthly_series,
};
use pluvio_chart::core::{Margins, Sample, Series, Viewport};
use pluvio_chart::render::{CanvasLayerKind, NullRenderer};

fn monthly() -> Series {
    monthly_series(&[
        MonthlyAccumulation {
            year: 2023,
            month: 1,
            accumulated_mm: 120.0,
        },
        MonthlyAccumulation {
            year: 2023,
            month: 2,
            accumulated_mm: 95.5,
        },
        MonthlyAccumulation {
            year: 2023,
            month: 3,
            accumulated_mm: 160.0,
        },
    ])
    .expect("series")
}

#[test]
fn smoke_render_with_null_renderer() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(800, 400));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    engine
        .render(monthly(), LineGeometry, AxisLabels::new("Mês", "mm"))
        .expect("render should succeed");

    assert_eq!(engine.render_pass(), 1);
    assert_eq!(engine.renderer().render_count, 1);
    assert_eq!(engine.chart().map(|c| c.kind()), Some(GeometryKind::Line));
    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame, engine.frame());

    let axis = frame.layer(CanvasLayerKind::Axis).expect("axis layer");
    assert!(axis.texts.iter().any(|text| text.text == "Mês"));
    assert!(axis.texts.iter().any(|text| text.text == "mm"));
}

#[test]
fn invalid_viewport_is_rejected_at_construction() {
    let config = ChartEngineConfig::new(Viewport::new(0, 400));
    let err = ChartEngine::new(NullRenderer::default(), config).expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, .. }));
}

#[test]
fn viewport_narrower_than_margins_is_a_layout_error() {
    let config = ChartEngineConfig::new(Viewport::new(80, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    let err = engine
        .render(monthly(), LineGeometry, AxisLabels::none())
        .expect_err("no room for the plot");

    assert!(matches!(err, ChartError::Layout { plot_width, .. } if plot_width <= 0.0));
    assert!(engine.chart().is_none());
    assert_eq!(engine.renderer().render_count, 0);
}

#[test]
fn failed_render_keeps_the_previous_chart() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 400)),
    )
    .expect("engine init");
    engine
        .render(monthly(), LineGeometry, AxisLabels::none())
        .expect("first render");
    let frame = engine.frame().clone();
    let snapshot = engine.snapshot();

    let duplicated = Series::new(vec![Sample::new(2020.0, 1.0), Sample::new(2020.0, 2.0)])
        .expect("sorted series");
    engine
        .render(duplicated, BarGeometry, AxisLabels::none())
        .expect_err("duplicate category");

    assert_eq!(engine.frame(), &frame);
    assert_eq!(engine.snapshot(), snapshot);
    assert_eq!(engine.renderer().render_count, 1);
}

#[test]
fn empty_series_clears_the_canvas() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 400)),
    )
    .expect("engine init");
    engine
        .render(monthly(), LineGeometry, AxisLabels::none())
        .expect("render");

    engine
        .render(Series::empty(), LineGeometry, AxisLabels::none())
        .expect("empty series is not an error");

    assert!(engine.chart().is_none());
    assert!(engine.frame().is_empty());
    assert_eq!(engine.renderer().render_count, 2);
    assert!(
        engine
            .renderer()
            .last_frame
            .as_ref()
            .is_some_and(|frame| frame.is_empty())
    );
}

#[test]
fn resizing_lays_the_chart_out_again() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 400)),
    )
    .expect("engine init");
    engine
        .render(monthly(), LineGeometry, AxisLabels::none())
        .expect("render");

    engine
        .set_viewport(Viewport::new(1000, 500))
        .expect("resize");

    let plot = engine.scales().expect("scales").plot;
    assert_eq!(plot.width, 1000.0 - 60.0 - 30.0);
    assert_eq!(plot.height, 500.0 - 20.0 - 40.0);
    assert_eq!(engine.frame().viewport, Viewport::new(1000, 500));
    assert_eq!(engine.renderer().render_count, 2);

    // Same size again does not repaint.
    engine
        .set_viewport(Viewport::new(1000, 500))
        .expect("no-op resize");
    assert_eq!(engine.renderer().render_count, 2);
}

#[test]
fn resize_that_leaves_no_plot_keeps_the_previous_layout() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 400)),
    )
    .expect("engine init");
    engine
        .render(monthly(), LineGeometry, AxisLabels::none())
        .expect("render");

    let err = engine
        .set_viewport(Viewport::new(50, 400))
        .expect_err("too narrow");

    assert!(matches!(err, ChartError::Layout { .. }));
    assert_eq!(engine.viewport(), Viewport::new(800, 400));
    assert!(engine.chart().is_some());
}

#[test]
fn custom_margins_shape_the_plot_area() {
    let config = ChartEngineConfig::new(Viewport::new(600, 300)).with_margins(Margins {
        top: 10.0,
        right: 10.0,
        bottom: 10.0,
        left: 10.0,
    });
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .render(monthly(), LineGeometry, AxisLabels::none())
        .expect("render");

    let plot = engine.scales().expect("scales").plot;
    assert_eq!((plot.left, plot.top, plot.width, plot.height), (10.0, 10.0, 580.0, 280.0));
}
