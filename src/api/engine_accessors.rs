use crate::core::{BubbleScale, CalendarGrid, Project, TimelineWindow, ValueAxis, Viewport};
use crate::error::{RoadmapError, RoadmapResult};
use crate::extensions::RoadmapEvent;
use crate::interaction::GestureMode;
use crate::render::Renderer;

use super::{GestureInputBehavior, RoadmapEngine};

impl<R: Renderer> RoadmapEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    /// Updates viewport dimensions used by grid mapping and render layout.
    ///
    /// Windows and brushes are percentage-based, so they survive resizes
    /// unchanged.
    pub fn set_viewport(&mut self, viewport: Viewport) -> RoadmapResult<()> {
        if !viewport.is_valid() {
            return Err(RoadmapError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.core.model.viewport = viewport;
        self.mark_frame_dirty();
        Ok(())
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        self.core.model.store.projects()
    }

    #[must_use]
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.core.model.store.get(id)
    }

    #[must_use]
    pub fn project_count(&self) -> usize {
        self.core.model.store.len()
    }

    /// Id the next sentinel-id insertion would receive.
    #[must_use]
    pub fn next_project_id(&self) -> u32 {
        self.core.model.store.next_id()
    }

    #[must_use]
    pub fn grid_year(&self) -> i32 {
        self.core.model.calendar_grid.year
    }

    /// Moves the grid to another calendar year.
    ///
    /// The timeline bounds follow the new year and the visible window is
    /// recomputed from the current brush span.
    pub fn set_grid_year(&mut self, year: i32) -> RoadmapResult<()> {
        let calendar_grid = CalendarGrid::new(year)?;
        let timeline_bounds = TimelineWindow::for_year(year)?;
        let brush = self.core.model.timeline_brush;
        let visible_window =
            timeline_bounds.window_for_span(brush.start_percent(), brush.span_percent())?;

        self.core.model.calendar_grid = calendar_grid;
        self.core.model.timeline_bounds = timeline_bounds;
        self.core.model.visible_window = visible_window;
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::VisibleWindowChanged {
            start: visible_window.start(),
            end: visible_window.end(),
        });
        Ok(())
    }

    #[must_use]
    pub fn calendar_grid(&self) -> CalendarGrid {
        self.core.model.calendar_grid
    }

    #[must_use]
    pub fn value_axis(&self) -> ValueAxis {
        self.core.model.value_axis
    }

    #[must_use]
    pub fn bubble_scale(&self) -> BubbleScale {
        self.core.model.bubble_scale
    }

    pub fn set_bubble_scale(&mut self, bubble_scale: BubbleScale) -> RoadmapResult<()> {
        bubble_scale.validate()?;
        self.core.model.bubble_scale = bubble_scale;
        self.mark_frame_dirty();
        Ok(())
    }

    #[must_use]
    pub fn gesture_mode(&self) -> GestureMode {
        self.core.model.interaction.mode()
    }

    #[must_use]
    pub fn cursor(&self) -> (f64, f64) {
        self.core.model.interaction.cursor()
    }

    #[must_use]
    pub fn gesture_input_behavior(&self) -> GestureInputBehavior {
        self.core.behavior.gesture_input_behavior
    }

    pub fn set_gesture_input_behavior(&mut self, behavior: GestureInputBehavior) {
        self.core.behavior.gesture_input_behavior = behavior;
    }
}
