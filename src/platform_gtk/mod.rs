use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::ChartEngine;
use crate::core::Viewport;
use crate::render::{CairoContextRenderer, Renderer};

pub type SharedChartEngine<R> = Rc<RefCell<ChartEngine<R>>>;

/// Hosts a `ChartEngine` inside a GTK `DrawingArea`.
///
/// The draw callback resizes the engine to the widget and paints the
/// composed frame; pointer motion drives the tooltip.
pub struct GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    drawing_area: gtk::DrawingArea,
    engine: SharedChartEngine<R>,
}

impl<R> GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        attach_draw_func(&drawing_area, Rc::clone(&engine));
        attach_pointer_tracking(&drawing_area, Rc::clone(&engine));

        Self {
            drawing_area,
            engine,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Shared handle for callers that render new series into the engine.
    /// Call `queue_redraw` afterwards.
    #[must_use]
    pub fn engine(&self) -> SharedChartEngine<R> {
        Rc::clone(&self.engine)
    }

    pub fn queue_redraw(&self) {
        self.drawing_area.queue_draw();
    }
}

fn attach_draw_func<R>(drawing_area: &gtk::DrawingArea, engine: SharedChartEngine<R>)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    drawing_area.set_draw_func(move |_widget, context, width, height| {
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            return;
        };
        if width == 0 || height == 0 {
            return;
        }
        let Ok(mut chart) = engine.try_borrow_mut() else {
            return;
        };

        if let Err(err) = chart.set_viewport(Viewport::new(width, height)) {
            warn!(error = %err, width, height, "keeping previous chart layout");
        }
        if let Err(err) = chart.present_on_cairo_context(context) {
            warn!(error = %err, "chart draw failed");
        }
    });
}

fn attach_pointer_tracking<R>(drawing_area: &gtk::DrawingArea, engine: SharedChartEngine<R>)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    let motion = gtk::EventControllerMotion::new();
    {
        let engine = Rc::clone(&engine);
        let drawing_area = drawing_area.clone();
        motion.connect_motion(move |_, x, y| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                if let Err(err) = chart.pointer_move(x, y) {
                    warn!(error = %err, "tooltip lookup failed");
                }
            }
            drawing_area.queue_draw();
        });
    }
    {
        let drawing_area = drawing_area.clone();
        motion.connect_leave(move |_| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                chart.pointer_leave();
            }
            drawing_area.queue_draw();
        });
    }
    drawing_area.add_controller(motion);
}
