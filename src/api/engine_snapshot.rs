use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Sample, Viewport, XAxisUnit};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::Renderer;

use super::axis_ticks::AxisTick;
use super::{AxisLabels, ChartEngine, DrawnGeometry, GeometryKind};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub render_pass: u64,
    pub chart: Option<RenderedChartSnapshot>,
    pub tooltip: TooltipState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedChartSnapshot {
    pub kind: GeometryKind,
    pub x_axis_unit: XAxisUnit,
    pub plot_area: PlotArea,
    /// Time domain after expansion, or first and last category.
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub labels: AxisLabels,
    pub samples: Vec<Sample>,
    pub geometry: DrawnGeometry,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let chart = self.chart.as_ref().map(|chart| {
            let x_domain = match (chart.scales.x.as_time(), chart.scales.x.as_band()) {
                (Some(time), _) => time.domain(),
                (None, Some(band)) => {
                    let mut categories = band.categories();
                    let first = categories.next().unwrap_or(0.0);
                    (first, categories.last().unwrap_or(first))
                }
                (None, None) => (0.0, 0.0),
            };
            RenderedChartSnapshot {
                kind: chart.kind(),
                x_axis_unit: chart.scales.x.unit(),
                plot_area: chart.scales.plot,
                x_domain,
                y_domain: chart.scales.y.domain(),
                labels: chart.labels.clone(),
                samples: chart.series.samples().to_vec(),
                geometry: chart.geometry.clone(),
                x_ticks: chart.x_ticks.clone(),
                y_ticks: chart.y_ticks.clone(),
            }
        });

        ChartSnapshot {
            viewport: self.config.viewport,
            render_pass: self.render_pass,
            chart,
            tooltip: self.interaction.tooltip().clone(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
