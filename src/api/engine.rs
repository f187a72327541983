use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{ScalePair, Series, Viewport};
use crate::error::ChartResult;
use crate::interaction::{InteractionState, TooltipState};
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::axis_ticks::{AxisTick, category_axis_ticks, time_axis_ticks, value_axis_ticks};
use super::render_frame_builder::{BaseFrameInput, build_base_frame, build_tooltip_layer};
use super::{AxisLabels, ChartEngineConfig, DrawnGeometry, GeometryKind, GeometryStrategy};

/// Scales, geometry and ticks of the last successful render.
///
/// Rebuilt from scratch on every render call and replaced atomically.
#[derive(Debug)]
pub struct RenderedChart {
    pub(super) series: Series,
    pub(super) strategy: Arc<dyn GeometryStrategy>,
    pub(super) labels: AxisLabels,
    pub(super) scales: ScalePair,
    pub(super) geometry: DrawnGeometry,
    pub(super) x_ticks: Vec<AxisTick>,
    pub(super) y_ticks: Vec<AxisTick>,
}

impl RenderedChart {
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        self.strategy.kind()
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn scales(&self) -> &ScalePair {
        &self.scales
    }

    #[must_use]
    pub fn geometry(&self) -> &DrawnGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn x_ticks(&self) -> &[AxisTick] {
        &self.x_ticks
    }

    #[must_use]
    pub fn y_ticks(&self) -> &[AxisTick] {
        &self.y_ticks
    }

    #[must_use]
    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` fits scales to a series, asks a geometry strategy for
/// shapes, lays out axes, keeps tooltip state and hands finished frames to
/// the renderer.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) chart: Option<RenderedChart>,
    pub(super) base_frame: RenderFrame,
    pub(super) interaction: InteractionState,
    pub(super) render_pass: u64,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with nothing drawn yet.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "create chart engine"
        );
        Ok(Self {
            renderer,
            config,
            chart: None,
            base_frame: RenderFrame::new(config.viewport),
            interaction: InteractionState::default(),
            render_pass: 0,
        })
    }

    /// Replaces whatever is drawn with `series` drawn by `strategy`.
    ///
    /// The new chart is fully built before anything is replaced: on error
    /// the previous chart, frame and tooltip stay as they were. An empty
    /// series clears the canvas and is not an error.
    pub fn render<S>(&mut self, series: Series, strategy: S, labels: AxisLabels) -> ChartResult<()>
    where
        S: GeometryStrategy + 'static,
    {
        let strategy: Arc<dyn GeometryStrategy> = Arc::new(strategy);
        debug!(
            kind = ?strategy.kind(),
            samples = series.len(),
            "render chart"
        );

        if series.is_empty() {
            return self.clear();
        }

        let chart = layout_chart(&self.config, series, strategy, labels)?;
        self.commit(chart)
    }

    /// Resizes the drawing surface and lays the current chart out again.
    ///
    /// On error the previous viewport and chart are kept.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if viewport == self.config.viewport {
            return Ok(());
        }
        let mut config = self.config;
        config.viewport = viewport;
        config.validate()?;
        debug!(width = viewport.width, height = viewport.height, "resize chart");

        match &self.chart {
            Some(current) => {
                let chart = layout_chart(
                    &config,
                    current.series.clone(),
                    Arc::clone(&current.strategy),
                    current.labels.clone(),
                )?;
                let previous = std::mem::replace(&mut self.config, config);
                self.commit(chart).inspect_err(|_| self.config = previous)
            }
            None => {
                self.config = config;
                self.clear()
            }
        }
    }

    fn commit(&mut self, chart: RenderedChart) -> ChartResult<()> {
        let frame = build_base_frame(&BaseFrameInput {
            viewport: self.config.viewport,
            plot: chart.scales.plot,
            geometry: &chart.geometry,
            x_ticks: &chart.x_ticks,
            y_ticks: &chart.y_ticks,
            labels: &chart.labels,
            style: self.config.style,
        })?;
        self.renderer.render(&frame)?;

        self.chart = Some(chart);
        self.base_frame = frame;
        self.interaction.reset();
        self.render_pass += 1;
        trace!(
            render_pass = self.render_pass,
            primitives = self.base_frame.primitive_count(),
            "chart frame committed"
        );
        Ok(())
    }

    /// Removes all drawn content and hides the tooltip.
    pub fn clear(&mut self) -> ChartResult<()> {
        let frame = RenderFrame::new(self.config.viewport);
        self.renderer.render(&frame)?;
        self.chart = None;
        self.base_frame = frame;
        self.interaction.reset();
        self.render_pass += 1;
        debug!(render_pass = self.render_pass, "chart cleared");
        Ok(())
    }

    /// Repaints the current chart with the tooltip overlay on top.
    pub fn present(&mut self) -> ChartResult<()> {
        let frame = self.composed_frame();
        self.renderer.render(&frame)
    }

    /// Renders the composed frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn present_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.composed_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Base frame of the last render plus the current tooltip layer.
    #[must_use]
    pub fn composed_frame(&self) -> RenderFrame {
        let mut frame = self.base_frame.clone();
        if let Some(chart) = &self.chart {
            let bar_highlight = self
                .interaction
                .tooltip()
                .anchor
                .as_ref()
                .and_then(|anchor| chart.geometry.bars().get(anchor.index))
                .map(|bar| (bar.x, bar.y, bar.width, bar.height));
            frame.replace_layer(build_tooltip_layer(
                self.interaction.tooltip(),
                chart.kind(),
                bar_highlight,
                self.config.viewport,
                self.config.style,
            ));
        }
        frame
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// The last successfully rendered chart, or `None` when the canvas is
    /// empty.
    #[must_use]
    pub fn chart(&self) -> Option<&RenderedChart> {
        self.chart.as_ref()
    }

    #[must_use]
    pub fn scales(&self) -> Option<&ScalePair> {
        self.chart.as_ref().map(|chart| &chart.scales)
    }

    /// Frame of the last render, without the tooltip layer.
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.base_frame
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn render_pass(&self) -> u64 {
        self.render_pass
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> std::fmt::Debug for ChartEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartEngine")
            .field("viewport", &self.config.viewport)
            .field("kind", &self.chart.as_ref().map(RenderedChart::kind))
            .field("render_pass", &self.render_pass)
            .field("tooltip_visible", &self.interaction.tooltip().visible)
            .finish()
    }
}

fn layout_chart(
    config: &ChartEngineConfig,
    series: Series,
    strategy: Arc<dyn GeometryStrategy>,
    labels: AxisLabels,
) -> ChartResult<RenderedChart> {
    strategy.validate(&series)?;
    let plot = config.viewport.plot_area(config.margins)?;
    let scales = ScalePair::fit(
        &series,
        strategy.x_axis_unit(),
        strategy.value_extent(&series),
        plot,
        config.scale_tuning,
    )?;
    let geometry = strategy.draw(&series, &scales)?;

    let x_ticks = match (scales.x.as_time(), scales.x.as_band()) {
        (Some(time), _) => time_axis_ticks(time, config.x_tick_spacing_px)?,
        (None, Some(band)) => category_axis_ticks(band),
        (None, None) => Vec::new(),
    };
    let y_ticks = value_axis_ticks(scales.y, config.y_tick_count)?;
    trace!(
        plot_width = plot.width,
        plot_height = plot.height,
        x_ticks = x_ticks.len(),
        y_ticks = y_ticks.len(),
        "chart layout resolved"
    );

    Ok(RenderedChart {
        series,
        strategy,
        labels,
        scales,
        geometry,
        x_ticks,
        y_ticks,
    })
}
