use serde::{Deserialize, Serialize};

use crate::core::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Pointer is inside the plot area and the tooltip follows it.
    Hovering,
}

/// Resolved tooltip target: the sample nearest to the pointer, its pixel
/// anchor, and the display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub index: usize,
    pub sample: Sample,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Public tooltip state exposed to host applications.
///
/// Transient: it is reset whenever the pointer leaves the plot area or a new
/// series is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub anchor: Option<TooltipAnchor>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor_x: f64,
    cursor_y: f64,
    tooltip: TooltipState,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(&self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Moves to `Hovering` and shows the tooltip at `anchor`.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, anchor: TooltipAnchor) {
        self.mode = InteractionMode::Hovering;
        self.cursor_x = x;
        self.cursor_y = y;
        self.tooltip.visible = true;
        self.tooltip.anchor = Some(anchor);
    }

    /// Moves to `Idle` and hides the tooltip.
    pub fn on_pointer_leave(&mut self) {
        self.mode = InteractionMode::Idle;
        self.tooltip = TooltipState::default();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
