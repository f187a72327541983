use serde::{Deserialize, Serialize};

use crate::core::{Margins, ScaleTuning, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Colors, strokes and font sizes used when turning geometry into draw
/// commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub bar_color: Color,
    pub band_fill_color: Color,
    pub forecast_line_color: Color,
    pub forecast_line_width: f64,
    pub forecast_stroke_style: LineStrokeStyle,
    pub marker_radius: f64,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub tick_size_px: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub tooltip_background_color: Color,
    pub tooltip_border_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_padding_px: f64,
    pub highlight_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        let steel_blue = Color::rgb8(70, 130, 180);
        let dark = Color::rgb8(51, 51, 51);
        Self {
            line_color: steel_blue,
            line_width: 2.0,
            bar_color: steel_blue,
            band_fill_color: Color::rgb8(173, 216, 230).with_alpha(0.5),
            forecast_line_color: Color::rgb8(255, 99, 71),
            forecast_line_width: 2.0,
            forecast_stroke_style: LineStrokeStyle::Dashed {
                dash_px: 5.0,
                gap_px: 5.0,
            },
            marker_radius: 4.0,
            axis_color: dark,
            axis_line_width: 1.0,
            tick_size_px: 6.0,
            axis_label_color: dark,
            axis_label_font_size_px: 10.0,
            axis_title_font_size_px: 12.0,
            tooltip_background_color: Color::rgb(1.0, 1.0, 1.0).with_alpha(0.9),
            tooltip_border_color: Color::rgb8(153, 153, 153),
            tooltip_text_color: dark,
            tooltip_font_size_px: 12.0,
            tooltip_padding_px: 6.0,
            highlight_color: Color::rgb8(255, 165, 0).with_alpha(0.35),
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.line_color,
            self.bar_color,
            self.band_fill_color,
            self.forecast_line_color,
            self.axis_color,
            self.axis_label_color,
            self.tooltip_background_color,
            self.tooltip_border_color,
            self.tooltip_text_color,
            self.highlight_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("line_width", self.line_width),
            ("forecast_line_width", self.forecast_line_width),
            ("marker_radius", self.marker_radius),
            ("axis_line_width", self.axis_line_width),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("tick_size_px", self.tick_size_px),
            ("tooltip_padding_px", self.tooltip_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        self.forecast_stroke_style.validate()
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub scale_tuning: ScaleTuning,
    /// Preferred horizontal distance between x-axis ticks.
    #[serde(default = "default_x_tick_spacing_px")]
    pub x_tick_spacing_px: f64,
    /// Approximate number of value-axis intervals.
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            scale_tuning: ScaleTuning::default(),
            x_tick_spacing_px: default_x_tick_spacing_px(),
            y_tick_count: default_y_tick_count(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_scale_tuning(mut self, scale_tuning: ScaleTuning) -> Self {
        self.scale_tuning = scale_tuning;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_x_tick_spacing_px(mut self, spacing_px: f64) -> Self {
        self.x_tick_spacing_px = spacing_px;
        self
    }

    #[must_use]
    pub fn with_y_tick_count(mut self, count: usize) -> Self {
        self.y_tick_count = count;
        self
    }

    /// Checks everything that does not depend on the data.
    ///
    /// Margins that leave no plot area are reported at render time as a
    /// layout error, since the host may still resize the viewport.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate()?;
        self.scale_tuning.value.validate()?;
        if !self.scale_tuning.min_time_span_secs.is_finite()
            || self.scale_tuning.min_time_span_secs <= 0.0
        {
            return Err(ChartError::InvalidData(
                "min time span must be finite and > 0".to_owned(),
            ));
        }
        if !self.scale_tuning.band_padding.is_finite()
            || !(0.0..1.0).contains(&self.scale_tuning.band_padding)
        {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !self.x_tick_spacing_px.is_finite() || self.x_tick_spacing_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "x tick spacing must be finite and > 0".to_owned(),
            ));
        }
        if self.y_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "y tick count must be > 0".to_owned(),
            ));
        }
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_x_tick_spacing_px() -> f64 {
    80.0
}

fn default_y_tick_count() -> usize {
    10
}
