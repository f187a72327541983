use tracing::trace;

use crate::core::{XScale, nearest_index};
use crate::error::ChartResult;
use crate::interaction::{TooltipAnchor, TooltipState};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Snaps the tooltip to the sample nearest the pointer.
    ///
    /// Time axes invert the pointer to a timestamp and search sample times;
    /// category axes search band centers. A pointer outside the plot area,
    /// or an engine with nothing drawn, hides the tooltip instead.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<&TooltipState> {
        let Some(chart) = &self.chart else {
            self.interaction.on_pointer_leave();
            return Ok(self.interaction.tooltip());
        };
        if !x.is_finite() || !y.is_finite() || !chart.scales.plot.contains(x, y) {
            self.interaction.on_pointer_leave();
            return Ok(self.interaction.tooltip());
        }

        let samples = chart.series.samples();
        let index = match &chart.scales.x {
            XScale::Time(scale) => {
                let time = scale.pixel_to_time(x)?;
                nearest_index(samples.len(), time, |i| samples[i].x)
            }
            XScale::Category(scale) => nearest_index(samples.len(), x, |i| scale.center_at(i)),
        };
        let Some(index) = index else {
            self.interaction.on_pointer_leave();
            return Ok(self.interaction.tooltip());
        };

        let sample = samples[index];
        let anchor = TooltipAnchor {
            index,
            sample,
            x: chart.scales.x.anchor_x(index, sample.x)?,
            y: chart.scales.y.value_to_pixel(sample.y)?,
            text: chart.strategy.tooltip_text(&sample)?,
        };
        trace!(index, pointer_x = x, pointer_y = y, "tooltip snapped");
        self.interaction.on_pointer_move(x, y, anchor);
        Ok(self.interaction.tooltip())
    }

    /// Hides the tooltip.
    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }
}
