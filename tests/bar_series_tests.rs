use approx::assert_abs_diff_eq;
use pluvio_chart::ChartError;
use pluvio_chart::api::{
    AxisLabels, BarGeometry, ChartEngine, ChartEngineConfig, YearlyAccumulation, yearly_series,
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

fn yearly(records: &[(i32, f64)]) -> Series {
    let records: Vec<YearlyAccumulation> = records
        .iter()
        .map(|(year, accumulated_mm)| YearlyAccumulation {
            year: *year,
            accumulated_mm: *accumulated_mm,
        })
        .collect();
    yearly_series(&records).expect("series")
}

#[test]
fn one_bar_per_year_standing_on_the_plot_bottom() {
    let mut engine = engine();
    engine
        .render(
            yearly(&[(2020, 1000.0), (2021, 1500.0), (2022, 1200.0)]),
            BarGeometry,
            AxisLabels::new("Ano", "mm"),
        )
        .expect("render");

    let chart = engine.chart().expect("chart");
    let bars = chart.geometry().bars();
    assert_eq!(bars.len(), 3);

    let band = chart.scales().x.as_band().expect("category axis");
    for (index, bar) in bars.iter().enumerate() {
        assert_abs_diff_eq!(bar.x, band.start_at(index), epsilon = 1e-9);
        assert_abs_diff_eq!(bar.width, band.bandwidth(), epsilon = 1e-9);
        assert_abs_diff_eq!(bar.y + bar.height, 360.0, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(bars[1].height, 340.0 / 1.05, epsilon = 1e-9);
    assert!(bars[0].height < bars[2].height && bars[2].height < bars[1].height);

    let labels: Vec<&str> = chart.x_ticks().iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["2020", "2021", "2022"]);

    let series_layer = engine
        .frame()
        .layer(CanvasLayerKind::Series)
        .expect("series layer");
    assert_eq!(series_layer.rects.len(), 3);
}

#[test]
fn zero_total_year_gets_a_zero_height_bar() {
    let mut engine = engine();
    engine
        .render(
            yearly(&[(2020, 0.0), (2021, 500.0)]),
            BarGeometry,
            AxisLabels::none(),
        )
        .expect("render");

    let bars = engine.chart().expect("chart").geometry().bars();
    assert_eq!(bars[0].height, 0.0);
    assert_abs_diff_eq!(bars[0].y, 360.0, epsilon = 1e-9);
}

#[test]
fn single_year_renders_one_visible_bar() {
    let mut engine = engine();
    engine
        .render(yearly(&[(2021, 900.0)]), BarGeometry, AxisLabels::none())
        .expect("render");

    let bars = engine.chart().expect("chart").geometry().bars();
    assert_eq!(bars.len(), 1);
    assert!(bars[0].width > 0.0);
    assert!(bars[0].height > 0.0);
    assert_abs_diff_eq!(bars[0].y + bars[0].height, 360.0, epsilon = 1e-9);

    let series_layer = engine
        .frame()
        .layer(CanvasLayerKind::Series)
        .expect("series layer");
    assert_eq!(series_layer.rects.len(), 1);
}

#[test]
fn repeated_year_is_rejected_and_previous_chart_is_kept() {
    let mut engine = engine();
    engine
        .render(
            yearly(&[(2020, 1000.0), (2021, 1500.0)]),
            BarGeometry,
            AxisLabels::none(),
        )
        .expect("first render");
    let before = engine.frame().clone();
    let before_pass = engine.render_pass();

    let duplicated = Series::new(vec![
        Sample::new(2020.0, 1.0),
        Sample::new(2021.0, 2.0),
        Sample::new(2021.0, 3.0),
    ])
    .expect("sorted series");
    let err = engine
        .render(duplicated, BarGeometry, AxisLabels::none())
        .expect_err("duplicate category");

    assert!(matches!(err, ChartError::DuplicateCategory { ref label } if label == "2021"));
    assert_eq!(engine.frame(), &before);
    assert_eq!(engine.render_pass(), before_pass);
    assert_eq!(engine.renderer().render_count, 1);
    assert_eq!(engine.chart().expect("kept").geometry().bars().len(), 2);
}

#[test]
fn yearly_payload_order_does_not_matter() {
    let series = yearly(&[(2022, 3.0), (2020, 1.0), (2021, 2.0)]);
    let years: Vec<f64> = series.iter().map(|sample| sample.x).collect();
    assert_eq!(years, [2020.0, 2021.0, 2022.0]);
}
