use approx::assert_abs_diff_eq;
use pluvio_chart::ChartError;
use pluvio_chart::core::{
    BandScale, LinearScale, Margins, Sample, ScalePair, ScaleTuning, Series, TimeScale,
    ValueScale, ValueScaleTuning, Viewport, XAxisUnit,
};

fn plot_800x400() -> pluvio_chart::core::PlotArea {
    Viewport::new(800, 400)
        .plot_area(Margins::default())
        .expect("plot area")
}

#[test]
fn default_margins_leave_expected_plot_area() {
    let plot = plot_800x400();
    assert_eq!(plot.left, 60.0);
    assert_eq!(plot.top, 20.0);
    assert_eq!(plot.width, 710.0);
    assert_eq!(plot.height, 340.0);
    assert_eq!(plot.right(), 770.0);
    assert_eq!(plot.bottom(), 360.0);
}

#[test]
fn margins_wider_than_viewport_are_a_layout_error() {
    let err = Viewport::new(80, 400)
        .plot_area(Margins::default())
        .expect_err("no room");
    assert!(matches!(err, ChartError::Layout { plot_width, .. } if plot_width <= 0.0));
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 60.0, 770.0).expect("valid scale");

    let px = scale.domain_to_pixel(42.5).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");
    assert_abs_diff_eq!(recovered, 42.5, epsilon = 1e-9);
}

#[test]
fn equal_time_endpoints_expand_around_the_instant() {
    let instant = 1_700_000_000.0;
    let scale = TimeScale::new(instant, instant, 86_400.0, 60.0, 770.0).expect("scale");

    assert_eq!(scale.domain(), (instant - 43_200.0, instant + 43_200.0));
    assert_eq!(scale.data_range(), (instant, instant));
    assert_abs_diff_eq!(scale.time_to_pixel(instant).expect("px"), 415.0, epsilon = 1e-9);
}

#[test]
fn value_scale_adds_five_percent_headroom() {
    let plot = plot_800x400();
    let scale = ValueScale::from_max(100.0, ValueScaleTuning::default(), plot.bottom(), plot.top)
        .expect("scale");

    let (low, high) = scale.domain();
    assert_eq!(low, 0.0);
    assert_abs_diff_eq!(high, 105.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.value_to_pixel(0.0).expect("zero"), 360.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.value_to_pixel(105.0).expect("top"), 20.0, epsilon = 1e-9);
}

#[test]
fn all_zero_values_fall_back_to_minimum_span() {
    let plot = plot_800x400();
    let scale = ValueScale::from_max(0.0, ValueScaleTuning::default(), plot.bottom(), plot.top)
        .expect("scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
}

#[test]
fn band_scale_lays_out_padded_equal_bands() {
    let series = Series::new(vec![
        Sample::new(2020.0, 1.0),
        Sample::new(2021.0, 2.0),
        Sample::new(2022.0, 3.0),
    ])
    .expect("series");
    let scale = BandScale::from_series(&series, 60.0, 770.0, 0.2).expect("band");

    assert_abs_diff_eq!(scale.step(), 221.875, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.bandwidth(), 177.5, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.start_at(0), 104.375, epsilon = 1e-9);
    assert_abs_diff_eq!(
        scale.start_at(2) + scale.bandwidth(),
        770.0 - 44.375,
        epsilon = 1e-9
    );
}

#[test]
fn band_scale_rejects_repeated_category() {
    let series = Series::new(vec![Sample::new(2020.0, 1.0), Sample::new(2020.0, 2.0)])
        .expect("sorted series");
    let err = BandScale::from_series(&series, 0.0, 100.0, 0.2).expect_err("duplicate");
    assert!(matches!(err, ChartError::DuplicateCategory { ref label } if label == "2020"));
}

#[test]
fn scale_pair_fits_time_axis_to_series_extent() {
    let series = Series::new(vec![Sample::new(0.0, 10.0), Sample::new(1000.0, 50.0)])
        .expect("series");
    let pair = ScalePair::fit(
        &series,
        XAxisUnit::Time,
        50.0,
        plot_800x400(),
        ScaleTuning::default(),
    )
    .expect("fit");

    let time = pair.x.as_time().expect("time axis");
    assert_eq!(time.domain(), (0.0, 1000.0));
    assert_abs_diff_eq!(pair.x.anchor_x(0, 0.0).expect("first"), 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pair.x.anchor_x(1, 1000.0).expect("last"), 770.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pair.y.domain().1, 52.5, epsilon = 1e-9);
}

#[test]
fn scale_pair_refuses_empty_series() {
    let err = ScalePair::fit(
        &Series::empty(),
        XAxisUnit::Time,
        0.0,
        plot_800x400(),
        ScaleTuning::default(),
    )
    .expect_err("empty");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
