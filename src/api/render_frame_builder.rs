use crate::core::{PlotArea, Viewport};
use crate::error::ChartResult;
use crate::interaction::TooltipState;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LayerPrimitives, LinePrimitive, PolygonPrimitive,
    PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::axis_ticks::AxisTick;
use super::layout_helpers::{estimate_label_text_width_px, place_tooltip_box, x_axis_title_top};
use super::{AxisLabels, ChartStyle, DrawnGeometry, DrawnShape, GeometryKind, PathRole};

const TICK_LABEL_GAP_PX: f64 = 3.0;
const TOOLTIP_OFFSET_PX: f64 = 10.0;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 3.0;

/// Everything needed to paint the static part of a chart.
pub(super) struct BaseFrameInput<'a> {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub geometry: &'a DrawnGeometry,
    pub x_ticks: &'a [AxisTick],
    pub y_ticks: &'a [AxisTick],
    pub labels: &'a AxisLabels,
    pub style: ChartStyle,
}

pub(super) fn build_base_frame(input: &BaseFrameInput<'_>) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(input.viewport);
    frame.replace_layer(build_series_layer(input.geometry, input.style));
    frame.replace_layer(build_axis_layer(input));
    frame.validate()?;
    Ok(frame)
}

fn build_series_layer(geometry: &DrawnGeometry, style: ChartStyle) -> LayerPrimitives {
    let mut layer = LayerPrimitives::new(CanvasLayerKind::Series);

    for shape in &geometry.shapes {
        match shape {
            DrawnShape::ConfidenceArea(points) => {
                layer
                    .polygons
                    .push(PolygonPrimitive::new(points.clone(), style.band_fill_color));
            }
            DrawnShape::Bars(bars) => {
                layer.rects.extend(bars.iter().map(|bar| {
                    RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, style.bar_color)
                }));
            }
            DrawnShape::Path { points, role } => {
                let polyline = match role {
                    PathRole::Observed => {
                        PolylinePrimitive::new(points.clone(), style.line_width, style.line_color)
                    }
                    PathRole::Forecast => PolylinePrimitive::new(
                        points.clone(),
                        style.forecast_line_width,
                        style.forecast_line_color,
                    )
                    .with_stroke_style(style.forecast_stroke_style),
                };
                layer.polylines.push(polyline);
            }
            DrawnShape::Marker(vertex) => {
                let color = match geometry.kind {
                    GeometryKind::LineWithBand => style.forecast_line_color,
                    GeometryKind::Line | GeometryKind::Bar => style.line_color,
                };
                layer.circles.push(CirclePrimitive::new(
                    vertex.x,
                    vertex.y,
                    style.marker_radius,
                    color,
                ));
            }
        }
    }

    layer
}

fn build_axis_layer(input: &BaseFrameInput<'_>) -> LayerPrimitives {
    let mut layer = LayerPrimitives::new(CanvasLayerKind::Axis);
    let style = input.style;
    let plot = input.plot;

    layer.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        style.axis_line_width,
        style.axis_color,
    ));
    for tick in input.x_ticks {
        layer.lines.push(LinePrimitive::new(
            tick.pixel,
            plot.bottom(),
            tick.pixel,
            plot.bottom() + style.tick_size_px,
            style.axis_line_width,
            style.axis_color,
        ));
        layer.texts.push(TextPrimitive::new(
            tick.label.clone(),
            tick.pixel,
            plot.bottom() + style.tick_size_px + TICK_LABEL_GAP_PX,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }

    layer.lines.push(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        style.axis_line_width,
        style.axis_color,
    ));
    for tick in input.y_ticks {
        layer.lines.push(LinePrimitive::new(
            plot.left - style.tick_size_px,
            tick.pixel,
            plot.left,
            tick.pixel,
            style.axis_line_width,
            style.axis_color,
        ));
        layer.texts.push(TextPrimitive::new(
            tick.label.clone(),
            plot.left - style.tick_size_px - TICK_LABEL_GAP_PX,
            tick.pixel - style.axis_label_font_size_px * 0.5,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
    }

    if let Some(title) = input.labels.x.as_deref().filter(|title| !title.is_empty()) {
        layer.texts.push(TextPrimitive::new(
            title,
            plot.left + plot.width * 0.5,
            x_axis_title_top(plot, style.tick_size_px, style.axis_label_font_size_px),
            style.axis_title_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }
    if let Some(title) = input.labels.y.as_deref().filter(|title| !title.is_empty()) {
        layer.texts.push(TextPrimitive::new(
            title,
            plot.left,
            (plot.top - style.axis_title_font_size_px - 4.0).max(0.0),
            style.axis_title_font_size_px,
            style.axis_label_color,
            TextHAlign::Left,
        ));
    }

    layer
}

/// Focus marker plus text box for a visible tooltip; an empty layer
/// otherwise.
pub(super) fn build_tooltip_layer(
    tooltip: &TooltipState,
    kind: GeometryKind,
    bar_highlight: Option<(f64, f64, f64, f64)>,
    viewport: Viewport,
    style: ChartStyle,
) -> LayerPrimitives {
    let mut layer = LayerPrimitives::new(CanvasLayerKind::Tooltip);
    let Some(anchor) = tooltip.anchor.as_ref().filter(|_| tooltip.visible) else {
        return layer;
    };

    match (kind, bar_highlight) {
        (GeometryKind::Bar, Some((x, y, width, height))) => {
            layer
                .rects
                .push(RectPrimitive::new(x, y, width, height, style.highlight_color));
        }
        (GeometryKind::LineWithBand, _) => {
            layer.circles.push(CirclePrimitive::new(
                anchor.x,
                anchor.y,
                style.marker_radius,
                style.forecast_line_color,
            ));
        }
        _ => {
            layer.circles.push(CirclePrimitive::new(
                anchor.x,
                anchor.y,
                style.marker_radius,
                style.line_color,
            ));
        }
    }

    let padding = style.tooltip_padding_px;
    let box_width =
        estimate_label_text_width_px(&anchor.text, style.tooltip_font_size_px) + 2.0 * padding;
    let box_height = style.tooltip_font_size_px + 2.0 * padding;
    let (box_x, box_y) = place_tooltip_box(
        anchor.x,
        anchor.y,
        box_width,
        box_height,
        TOOLTIP_OFFSET_PX,
        viewport,
    );

    layer.rects.push(
        RectPrimitive::new(
            box_x,
            box_y,
            box_width,
            box_height,
            style.tooltip_background_color,
        )
        .with_border(1.0, style.tooltip_border_color)
        .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
    );
    layer.texts.push(TextPrimitive::new(
        anchor.text.clone(),
        box_x + padding,
        box_y + padding,
        style.tooltip_font_size_px,
        style.tooltip_text_color,
        TextHAlign::Left,
    ));

    layer
}
