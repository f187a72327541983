use crate::core::{BandScale, Series, ValueScale};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub category: f64,
    pub value: f64,
}

/// Projects one bar per sample.
///
/// `x` is the band start, `width` the bandwidth, `y` the mapped value and the
/// bar extends down to `plot_bottom`.
pub fn project_category_bars(
    series: &Series,
    band: &BandScale,
    value_scale: ValueScale,
    plot_bottom: f64,
) -> ChartResult<Vec<BarRect>> {
    let mut bars = Vec::with_capacity(series.len());
    for sample in series {
        let x = band.band_start(sample.x)?;
        let y = value_scale.value_to_pixel(sample.y)?;
        bars.push(BarRect {
            x,
            y,
            width: band.bandwidth(),
            height: (plot_bottom - y).max(0.0),
            category: sample.x,
            value: sample.y,
        });
    }
    Ok(bars)
}
