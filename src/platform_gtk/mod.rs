//! GTK4 embedding glue.
//!
//! Wires a [`RoadmapEngine`] into a [`gtk::DrawingArea`]: the draw func keeps
//! the engine viewport in sync with the widget allocation and paints through
//! the cairo context GTK hands us, and an optional drag gesture maps pointer
//! input onto bubble drag sessions. The engine stays single-threaded behind
//! `Rc<RefCell<..>>`, matching GTK's main-loop ownership model.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::debug;

use crate::api::RoadmapEngine;
use crate::core::{CanvasPoint, Viewport};
use crate::render::{CairoContextRenderer, Renderer};

/// Shared handle to an engine driven from GTK signal closures.
pub type SharedEngine<R> = Rc<RefCell<RoadmapEngine<R>>>;

/// Owns the engine handle and the widget it paints into.
pub struct GtkRoadmapAdapter<R: Renderer> {
    engine: SharedEngine<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R> GtkRoadmapAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    /// Installs the draw func on `drawing_area` and hands back the adapter.
    ///
    /// Every GTK draw pass resizes the engine viewport to the current widget
    /// allocation before rendering, so window resizes never need explicit
    /// plumbing. Borrow failures skip the frame instead of panicking inside
    /// a signal handler.
    pub fn attach(engine: RoadmapEngine<R>, drawing_area: &gtk::DrawingArea) -> Self {
        let engine = Rc::new(RefCell::new(engine));

        drawing_area.set_draw_func({
            let engine = Rc::clone(&engine);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut roadmap) = engine.try_borrow_mut() else {
                    return;
                };
                let viewport = Viewport::new(width as u32, height as u32);
                if roadmap.viewport() != viewport {
                    let _ = roadmap.set_viewport(viewport);
                }
                let _ = roadmap.render_on_cairo_context(context);
            }
        });

        Self {
            engine,
            drawing_area: drawing_area.clone(),
        }
    }

    /// Wires a [`gtk::GestureDrag`] that moves bubbles.
    ///
    /// Drag begin hit-tests the pointer against the visible bubbles; a miss
    /// leaves the gesture inert for the rest of the stroke. Updates arrive as
    /// offsets from the gesture start point, so the pointer is reconstructed
    /// as `start + offset` before it reaches the engine.
    pub fn connect_bubble_drag(&self) {
        let drag = gtk::GestureDrag::new();
        let dragging = Rc::new(Cell::new(false));

        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            let dragging = Rc::clone(&dragging);
            drag.connect_drag_begin(move |_, start_x, start_y| {
                dragging.set(false);
                let Ok(mut roadmap) = engine.try_borrow_mut() else {
                    return;
                };
                let pointer = CanvasPoint::new(start_x, start_y);
                let Ok(Some(bubble)) = roadmap.bubble_at(pointer) else {
                    return;
                };
                if roadmap.begin_bubble_drag(bubble.id, pointer).is_ok() {
                    dragging.set(true);
                    drawing_area.queue_draw();
                } else {
                    debug!(id = bubble.id, "bubble drag refused");
                }
            });
        }

        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            let dragging = Rc::clone(&dragging);
            drag.connect_drag_update(move |gesture, offset_x, offset_y| {
                if !dragging.get() {
                    return;
                }
                let Some((start_x, start_y)) = gesture.start_point() else {
                    return;
                };
                if let Ok(mut roadmap) = engine.try_borrow_mut() {
                    let pointer = CanvasPoint::new(start_x + offset_x, start_y + offset_y);
                    let _ = roadmap.move_bubble_drag(pointer);
                }
                drawing_area.queue_draw();
            });
        }

        {
            let engine = Rc::clone(&self.engine);
            let drawing_area = self.drawing_area.clone();
            let dragging = Rc::clone(&dragging);
            drag.connect_drag_end(move |_, _, _| {
                if !dragging.replace(false) {
                    return;
                }
                if let Ok(mut roadmap) = engine.try_borrow_mut() {
                    let _ = roadmap.complete_bubble_drag();
                }
                drawing_area.queue_draw();
            });
        }

        self.drawing_area.add_controller(drag);
    }

    /// Shared engine handle for wiring further controls.
    #[must_use]
    pub fn engine(&self) -> SharedEngine<R> {
        Rc::clone(&self.engine)
    }

    /// Schedules a repaint, e.g. after mutating the engine through
    /// [`Self::engine`].
    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }

    /// The widget this adapter paints into.
    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}
