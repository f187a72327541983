use serde::{Deserialize, Serialize};

use crate::core::{
    BarRect, Sample, ScalePair, Series, Vertex, XAxisUnit, category_label,
    project_category_bars, project_confidence_band, project_line_path,
};
use crate::error::{ChartError, ChartResult};

use super::axis_label_format::{
    MONTH_YEAR_PATTERN, NUMERIC_MONTH_YEAR_PATTERN, format_rainfall_mm, format_time_pattern,
};

const FORECAST_TOOLTIP_PREFIX: &str = "Previsão";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    Line,
    Bar,
    LineWithBand,
}

/// Which stroke a drawn path takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathRole {
    Observed,
    Forecast,
}

/// Pixel-space shapes produced by a strategy, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawnShape {
    /// Filled area between the confidence bounds.
    ConfidenceArea(Vec<Vertex>),
    Bars(Vec<BarRect>),
    Path { points: Vec<Vertex>, role: PathRole },
    /// Dot drawn for a single-sample path, which has no visible length.
    Marker(Vertex),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnGeometry {
    pub kind: GeometryKind,
    pub shapes: Vec<DrawnShape>,
}

impl DrawnGeometry {
    #[must_use]
    pub fn path(&self, role: PathRole) -> Option<&[Vertex]> {
        self.shapes.iter().find_map(|shape| match shape {
            DrawnShape::Path { points, role: r } if *r == role => Some(points.as_slice()),
            _ => None,
        })
    }

    #[must_use]
    pub fn bars(&self) -> &[BarRect] {
        self.shapes
            .iter()
            .find_map(|shape| match shape {
                DrawnShape::Bars(bars) => Some(bars.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn confidence_area(&self) -> Option<&[Vertex]> {
        self.shapes.iter().find_map(|shape| match shape {
            DrawnShape::ConfidenceArea(points) => Some(points.as_slice()),
            _ => None,
        })
    }

    #[must_use]
    pub fn marker(&self) -> Option<Vertex> {
        self.shapes.iter().find_map(|shape| match shape {
            DrawnShape::Marker(vertex) => Some(*vertex),
            _ => None,
        })
    }
}

/// Per-chart-type behavior plugged into the engine.
///
/// A strategy decides which x axis it needs, which samples it accepts, how
/// much vertical room it draws into, what shapes it emits and how a hovered
/// sample reads in the tooltip.
pub trait GeometryStrategy: std::fmt::Debug + Send + Sync {
    fn kind(&self) -> GeometryKind;

    fn x_axis_unit(&self) -> XAxisUnit;

    /// Rejects series this geometry cannot draw. Runs before any layout.
    fn validate(&self, series: &Series) -> ChartResult<()>;

    /// Largest value the geometry draws; drives the value-axis domain.
    fn value_extent(&self, series: &Series) -> f64;

    fn draw(&self, series: &Series, scales: &ScalePair) -> ChartResult<DrawnGeometry>;

    fn tooltip_text(&self, sample: &Sample) -> ChartResult<String>;
}

/// Monthly history: one polyline over a time axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineGeometry;

impl GeometryStrategy for LineGeometry {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Line
    }

    fn x_axis_unit(&self) -> XAxisUnit {
        XAxisUnit::Time
    }

    fn validate(&self, _series: &Series) -> ChartResult<()> {
        Ok(())
    }

    fn value_extent(&self, series: &Series) -> f64 {
        series.max_value().unwrap_or(0.0)
    }

    fn draw(&self, series: &Series, scales: &ScalePair) -> ChartResult<DrawnGeometry> {
        let points = project_line_path(series, scales)?;
        Ok(DrawnGeometry {
            kind: self.kind(),
            shapes: path_shapes(points, PathRole::Observed),
        })
    }

    fn tooltip_text(&self, sample: &Sample) -> ChartResult<String> {
        Ok(format!(
            "{}: {} mm",
            format_time_pattern(sample.x, MONTH_YEAR_PATTERN)?,
            format_rainfall_mm(sample.y)
        ))
    }
}

/// Yearly totals: one bar per year over a band axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarGeometry;

impl GeometryStrategy for BarGeometry {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Bar
    }

    fn x_axis_unit(&self) -> XAxisUnit {
        XAxisUnit::Category
    }

    fn validate(&self, series: &Series) -> ChartResult<()> {
        // Series are sorted, so a repeated category is always adjacent.
        if let Some(pair) = series.samples().windows(2).find(|pair| pair[0].x == pair[1].x) {
            return Err(ChartError::DuplicateCategory {
                label: category_label(pair[1].x),
            });
        }
        Ok(())
    }

    fn value_extent(&self, series: &Series) -> f64 {
        series.max_value().unwrap_or(0.0)
    }

    fn draw(&self, series: &Series, scales: &ScalePair) -> ChartResult<DrawnGeometry> {
        let band = scales.x.as_band().ok_or_else(|| {
            ChartError::InvalidData("bar geometry requires a category axis".to_owned())
        })?;
        let bars = project_category_bars(series, band, scales.y, scales.plot.bottom())?;
        Ok(DrawnGeometry {
            kind: self.kind(),
            shapes: vec![DrawnShape::Bars(bars)],
        })
    }

    fn tooltip_text(&self, sample: &Sample) -> ChartResult<String> {
        Ok(format!(
            "{}: {} mm",
            category_label(sample.x),
            format_rainfall_mm(sample.y)
        ))
    }
}

/// Forecast: filled confidence band with a dashed prediction line on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineWithBandGeometry;

impl GeometryStrategy for LineWithBandGeometry {
    fn kind(&self) -> GeometryKind {
        GeometryKind::LineWithBand
    }

    fn x_axis_unit(&self) -> XAxisUnit {
        XAxisUnit::Time
    }

    fn validate(&self, series: &Series) -> ChartResult<()> {
        match series.iter().position(|sample| sample.bounds().is_none()) {
            Some(index) => Err(ChartError::MalformedSample {
                index,
                reason: "forecast sample requires both confidence bounds".to_owned(),
            }),
            None => Ok(()),
        }
    }

    fn value_extent(&self, series: &Series) -> f64 {
        series.max_upper().unwrap_or(0.0)
    }

    fn draw(&self, series: &Series, scales: &ScalePair) -> ChartResult<DrawnGeometry> {
        let band = project_confidence_band(series, scales)?;
        let mut shapes = vec![DrawnShape::ConfidenceArea(band.area_polygon())];
        shapes.extend(path_shapes(band.center, PathRole::Forecast));
        Ok(DrawnGeometry {
            kind: self.kind(),
            shapes,
        })
    }

    fn tooltip_text(&self, sample: &Sample) -> ChartResult<String> {
        Ok(format!(
            "{FORECAST_TOOLTIP_PREFIX}: {} mm ({})",
            format_rainfall_mm(sample.y),
            format_time_pattern(sample.x, NUMERIC_MONTH_YEAR_PATTERN)?
        ))
    }
}

/// Strategy for `kind` as a trait object, for hosts that pick the chart type
/// at runtime.
#[must_use]
pub fn strategy_for_kind(kind: GeometryKind) -> Box<dyn GeometryStrategy> {
    match kind {
        GeometryKind::Line => Box::new(LineGeometry),
        GeometryKind::Bar => Box::new(BarGeometry),
        GeometryKind::LineWithBand => Box::new(LineWithBandGeometry),
    }
}

impl GeometryStrategy for Box<dyn GeometryStrategy> {
    fn kind(&self) -> GeometryKind {
        (**self).kind()
    }

    fn x_axis_unit(&self) -> XAxisUnit {
        (**self).x_axis_unit()
    }

    fn validate(&self, series: &Series) -> ChartResult<()> {
        (**self).validate(series)
    }

    fn value_extent(&self, series: &Series) -> f64 {
        (**self).value_extent(series)
    }

    fn draw(&self, series: &Series, scales: &ScalePair) -> ChartResult<DrawnGeometry> {
        (**self).draw(series, scales)
    }

    fn tooltip_text(&self, sample: &Sample) -> ChartResult<String> {
        (**self).tooltip_text(sample)
    }
}

fn path_shapes(points: Vec<Vertex>, role: PathRole) -> Vec<DrawnShape> {
    if let [only] = points.as_slice() {
        let marker = *only;
        vec![DrawnShape::Path { points, role }, DrawnShape::Marker(marker)]
    } else {
        vec![DrawnShape::Path { points, role }]
    }
}

#[cfg(test)]
mod tests {
    use super::{BarGeometry, GeometryStrategy, LineGeometry, LineWithBandGeometry};
    use crate::core::primitives::first_of_month;
    use crate::core::{Sample, Series};
    use crate::error::ChartError;

    #[test]
    fn line_tooltip_reads_month_and_amount() {
        let x = first_of_month(2021, 3).expect("date");
        let text = LineGeometry
            .tooltip_text(&Sample::new(x, 123.45))
            .expect("text");
        assert_eq!(text, "Mar 2021: 123.5 mm");
    }

    #[test]
    fn bar_tooltip_reads_year_and_amount() {
        let text = BarGeometry
            .tooltip_text(&Sample::new(2020.0, 1500.0))
            .expect("text");
        assert_eq!(text, "2020: 1500.0 mm");
    }

    #[test]
    fn forecast_tooltip_reads_prefix_amount_and_numeric_month() {
        let x = first_of_month(2025, 1).expect("date");
        let text = LineWithBandGeometry
            .tooltip_text(&Sample::with_bounds(x, 80.04, 60.0, 100.0))
            .expect("text");
        assert_eq!(text, "Previsão: 80.0 mm (01/2025)");
    }

    #[test]
    fn bar_validation_rejects_repeated_year() {
        let series = Series::new(vec![
            Sample::new(2020.0, 1.0),
            Sample::new(2020.0, 2.0),
            Sample::new(2021.0, 3.0),
        ])
        .expect("sorted series");
        let err = BarGeometry.validate(&series).expect_err("duplicate");
        assert!(matches!(err, ChartError::DuplicateCategory { ref label } if label == "2020"));
    }

    #[test]
    fn band_validation_points_at_first_sample_without_bounds() {
        let series = Series::new(vec![
            Sample::with_bounds(1.0, 5.0, 4.0, 6.0),
            Sample::new(2.0, 5.0),
        ])
        .expect("series");
        let err = LineWithBandGeometry.validate(&series).expect_err("missing bounds");
        assert!(matches!(err, ChartError::MalformedSample { index: 1, .. }));
    }

    #[test]
    fn band_extent_uses_upper_bound() {
        let series = Series::new(vec![Sample::with_bounds(1.0, 50.0, 40.0, 100.0)]).expect("series");
        assert_eq!(LineWithBandGeometry.value_extent(&series), 100.0);
        assert_eq!(LineGeometry.value_extent(&series), 50.0);
    }
}
