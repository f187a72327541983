use crate::core::{LinearScale, Series};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Continuous time axis over `[min(x), max(x)]` of a series.
///
/// Times are unix seconds. An all-equal series is widened to
/// `min_span_secs` around its single instant so the mapping stays
/// invertible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
    data_start: f64,
    data_end: f64,
}

impl TimeScale {
    /// Creates a scale over an explicit time range mapped to `[range_start, range_end]`.
    pub fn new(
        time_start: f64,
        time_end: f64,
        min_span_secs: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        let (start, end) = normalize_range(time_start, time_end, min_span_secs)?;
        Ok(Self {
            linear: LinearScale::new(start, end, range_start, range_end)?,
            data_start: time_start.min(time_end),
            data_end: time_start.max(time_end),
        })
    }

    /// Fits the domain to the series extent.
    pub fn from_series(
        series: &Series,
        min_span_secs: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        let (first, last) = series.x_extent().ok_or_else(|| {
            ChartError::InvalidData("time scale cannot be built from empty data".to_owned())
        })?;
        Self::new(first, last, min_span_secs, range_start, range_end)
    }

    /// Domain actually used for mapping (after epsilon expansion).
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    /// Raw data extent before any expansion.
    #[must_use]
    pub fn data_range(self) -> (f64, f64) {
        (self.data_start, self.data_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn span_secs(self) -> f64 {
        let (start, end) = self.domain();
        end - start
    }

    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(time)
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }
    if !min_span.is_finite() || min_span <= 0.0 {
        return Err(ChartError::InvalidData(
            "time scale min span must be finite and > 0".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
