use pluvio_chart::ChartError;
use pluvio_chart::api::{
    AxisLabels, ChartEngine, ChartEngineConfig, LineGeometry, MonthlyAccumulation, monthly_series,
};
use pluvio_chart::core::{Vertex, Viewport};
use pluvio_chart::render::{
    CanvasLayerKind, CirclePrimitive, Color, LayerPrimitives, LinePrimitive, NullRenderer,
    PolylinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[test]
fn new_frame_holds_every_layer_in_paint_order() {
    let frame = RenderFrame::new(Viewport::new(320, 200));
    let kinds: Vec<CanvasLayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(
        kinds,
        [
            CanvasLayerKind::Series,
            CanvasLayerKind::Axis,
            CanvasLayerKind::Tooltip
        ]
    );
    assert!(frame.is_empty());
}

#[test]
fn replacing_a_layer_keeps_paint_order() {
    let mut frame = RenderFrame {
        viewport: Viewport::new(320, 200),
        layers: Vec::new(),
    };
    let mut tooltip = LayerPrimitives::new(CanvasLayerKind::Tooltip);
    tooltip
        .circles
        .push(CirclePrimitive::new(10.0, 10.0, 4.0, Color::rgb(0.0, 0.0, 0.0)));
    frame.replace_layer(tooltip);

    let mut series = LayerPrimitives::new(CanvasLayerKind::Series);
    series.lines.push(LinePrimitive::new(
        0.0,
        0.0,
        10.0,
        10.0,
        1.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    frame.replace_layer(series);

    let kinds: Vec<CanvasLayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(kinds, [CanvasLayerKind::Series, CanvasLayerKind::Tooltip]);
    assert_eq!(frame.primitive_count(), 2);
}

#[test]
fn frame_validation_rejects_bad_primitives() {
    let black = Color::rgb(0.0, 0.0, 0.0);

    let mut frame = RenderFrame::new(Viewport::new(320, 200));
    frame
        .layer_mut(CanvasLayerKind::Series)
        .rects
        .push(RectPrimitive::new(0.0, 0.0, 10.0, -1.0, black));
    assert!(matches!(frame.validate(), Err(ChartError::InvalidData(_))));

    let mut frame = RenderFrame::new(Viewport::new(320, 200));
    frame
        .layer_mut(CanvasLayerKind::Axis)
        .texts
        .push(TextPrimitive::new("", 0.0, 0.0, 10.0, black, TextHAlign::Left));
    assert!(frame.validate().is_err());

    let mut frame = RenderFrame::new(Viewport::new(320, 200));
    frame
        .layer_mut(CanvasLayerKind::Series)
        .polylines
        .push(PolylinePrimitive::new(
            vec![Vertex { x: 0.0, y: f64::NAN }],
            1.0,
            black,
        ));
    assert!(frame.validate().is_err());

    let frame = RenderFrame::new(Viewport::new(0, 200));
    assert!(matches!(
        frame.validate(),
        Err(ChartError::InvalidViewport { .. })
    ));
}

#[test]
fn null_renderer_refuses_invalid_frames() {
    let mut renderer = NullRenderer::default();
    let mut frame = RenderFrame::new(Viewport::new(320, 200));
    frame
        .layer_mut(CanvasLayerKind::Series)
        .circles
        .push(CirclePrimitive::new(
            1.0,
            1.0,
            -2.0,
            Color::rgb(0.0, 0.0, 0.0),
        ));

    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.render_count, 0);
    assert!(renderer.last_frame.is_none());
}

#[test]
fn engine_frame_has_series_below_axis_and_ticks_inside_the_viewport() {
    let series = monthly_series(&[
        MonthlyAccumulation {
            year: 2023,
            month: 1,
            accumulated_mm: 120.0,
        },
        MonthlyAccumulation {
            year: 2023,
            month: 7,
            accumulated_mm: 40.0,
        },
    ])
    .expect("series");
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(800, 400)),
    )
    .expect("engine init");
    engine
        .render(series, LineGeometry, AxisLabels::new("Mês", "mm"))
        .expect("render");

    let frame = engine.frame();
    let series_position = frame
        .layers
        .iter()
        .position(|layer| layer.kind == CanvasLayerKind::Series);
    let axis_position = frame
        .layers
        .iter()
        .position(|layer| layer.kind == CanvasLayerKind::Axis);
    assert!(series_position < axis_position);

    let axis = frame.layer(CanvasLayerKind::Axis).expect("axis layer");
    let chart = engine.chart().expect("chart");
    // Two axis lines plus one tick mark per tick.
    assert_eq!(
        axis.lines.len(),
        2 + chart.x_ticks().len() + chart.y_ticks().len()
    );
    for text in &axis.texts {
        assert!(!text.text.is_empty());
        assert!((0.0..=800.0).contains(&text.x));
        assert!((0.0..=400.0).contains(&text.y));
    }
}
