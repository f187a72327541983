use serde::{Deserialize, Serialize};

use crate::core::{BandScale, PlotArea, Series, TimeScale, ValueScale, ValueScaleTuning};
use crate::error::{ChartError, ChartResult};

/// Unit of the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XAxisUnit {
    /// Continuous time in unix seconds.
    Time,
    /// Distinct ordered labels (calendar years).
    Category,
}

/// Knobs shared by every scale fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTuning {
    pub min_time_span_secs: f64,
    pub band_padding: f64,
    pub value: ValueScaleTuning,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        Self {
            min_time_span_secs: 86_400.0,
            band_padding: 0.2,
            value: ValueScaleTuning::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum XScale {
    Time(TimeScale),
    Category(BandScale),
}

impl XScale {
    #[must_use]
    pub fn unit(&self) -> XAxisUnit {
        match self {
            Self::Time(_) => XAxisUnit::Time,
            Self::Category(_) => XAxisUnit::Category,
        }
    }

    #[must_use]
    pub fn as_time(&self) -> Option<TimeScale> {
        match self {
            Self::Time(scale) => Some(*scale),
            Self::Category(_) => None,
        }
    }

    #[must_use]
    pub fn as_band(&self) -> Option<&BandScale> {
        match self {
            Self::Time(_) => None,
            Self::Category(scale) => Some(scale),
        }
    }

    /// Horizontal anchor of the sample at `index`: its time coordinate or its
    /// band center.
    pub fn anchor_x(&self, index: usize, x: f64) -> ChartResult<f64> {
        match self {
            Self::Time(scale) => scale.time_to_pixel(x),
            Self::Category(scale) => Ok(scale.center_at(index)),
        }
    }
}

/// X and y scales fitted to one series and one plot area.
///
/// Rebuilt from scratch on every render; never updated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalePair {
    pub x: XScale,
    pub y: ValueScale,
    pub plot: PlotArea,
}

impl ScalePair {
    /// Fits both scales. `max_value` is the largest value the geometry will
    /// draw (value or upper confidence bound).
    pub fn fit(
        series: &Series,
        unit: XAxisUnit,
        max_value: f64,
        plot: PlotArea,
        tuning: ScaleTuning,
    ) -> ChartResult<Self> {
        if series.is_empty() {
            return Err(ChartError::InvalidData(
                "scales cannot be fitted to an empty series".to_owned(),
            ));
        }

        let x = match unit {
            XAxisUnit::Time => XScale::Time(TimeScale::from_series(
                series,
                tuning.min_time_span_secs,
                plot.left,
                plot.right(),
            )?),
            XAxisUnit::Category => XScale::Category(BandScale::from_series(
                series,
                plot.left,
                plot.right(),
                tuning.band_padding,
            )?),
        };
        let y = ValueScale::from_max(max_value, tuning.value, plot.bottom(), plot.top)?;

        Ok(Self { x, y, plot })
    }
}
