use crate::core::{PlotArea, Viewport};

pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '(' | ')' | '/' | ':' => 0.36,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Top-left corner of a `width x height` box placed up and to the right of
/// the anchor, flipped to the other side when it would leave the viewport.
pub(super) fn place_tooltip_box(
    anchor_x: f64,
    anchor_y: f64,
    width: f64,
    height: f64,
    offset_px: f64,
    viewport: Viewport,
) -> (f64, f64) {
    let viewport_width = f64::from(viewport.width);
    let viewport_height = f64::from(viewport.height);

    let mut x = anchor_x + offset_px;
    if x + width > viewport_width {
        x = anchor_x - offset_px - width;
    }
    let mut y = anchor_y - offset_px - height;
    if y < 0.0 {
        y = anchor_y + offset_px;
    }

    (
        x.clamp(0.0, (viewport_width - width).max(0.0)),
        y.clamp(0.0, (viewport_height - height).max(0.0)),
    )
}

/// Vertical position of the x-axis title, below the tick labels.
pub(super) fn x_axis_title_top(plot: PlotArea, tick_size_px: f64, label_font_size_px: f64) -> f64 {
    plot.bottom() + tick_size_px + label_font_size_px + 8.0
}
