use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Total drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Subtracts fixed margins and returns the plotting rectangle.
    ///
    /// Fails with `ChartError::Layout` when the remaining width or height is
    /// not strictly positive.
    pub fn plot_area(self, margins: Margins) -> ChartResult<PlotArea> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        margins.validate()?;

        let plot_width = f64::from(self.width) - margins.left - margins.right;
        let plot_height = f64::from(self.height) - margins.top - margins.bottom;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(ChartError::Layout {
                plot_width,
                plot_height,
            });
        }

        Ok(PlotArea {
            left: margins.left,
            top: margins.top,
            width: plot_width,
            height: plot_height,
        })
    }
}

/// Fixed insets between the viewport edge and the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 30.0, 40.0, 60.0)
    }
}

/// Plotting rectangle in absolute viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}
