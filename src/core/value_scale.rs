use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Tuning for the value (rainfall) axis domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleTuning {
    /// Fraction added above the largest value, so the top sample never sits on
    /// the plot edge.
    pub headroom_ratio: f64,
    /// Upper bound used when every value is zero.
    pub min_span: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            headroom_ratio: 0.05,
            min_span: 1.0,
        }
    }
}

impl ValueScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.headroom_ratio.is_finite() || self.headroom_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "value headroom ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span.is_finite() || self.min_span <= 0.0 {
            return Err(ChartError::InvalidData(
                "value min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Value axis anchored at zero and mapped onto an inverted pixel axis
/// (`0` at the plot bottom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    /// Builds `[0, max_value * (1 + headroom)]` mapped to `[plot_bottom, plot_top]`.
    pub fn from_max(
        max_value: f64,
        tuning: ValueScaleTuning,
        plot_bottom: f64,
        plot_top: f64,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        if !max_value.is_finite() || max_value < 0.0 {
            return Err(ChartError::InvalidData(
                "max value must be finite and >= 0".to_owned(),
            ));
        }

        let upper = if max_value > 0.0 {
            max_value * (1.0 + tuning.headroom_ratio)
        } else {
            tuning.min_span
        };
        Ok(Self {
            linear: LinearScale::new(0.0, upper, plot_bottom, plot_top)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn linear(self) -> LinearScale {
        self.linear
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(value)
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        self.linear.ticks(count)
    }

    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        self.linear.tick_step(count)
    }
}
