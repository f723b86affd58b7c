use chrono::NaiveDate;
use tracing::debug;

use crate::core::{TimelineWindow, ValueWindow};
use crate::error::RoadmapResult;
use crate::extensions::RoadmapEvent;
use crate::interaction::BrushSpan;
use crate::render::Renderer;

use super::RoadmapEngine;

impl<R: Renderer> RoadmapEngine<R> {
    /// Fixed window spanning the whole grid year.
    #[must_use]
    pub fn timeline_bounds(&self) -> (NaiveDate, NaiveDate) {
        let bounds = self.core.model.timeline_bounds;
        (bounds.start(), bounds.end())
    }

    /// Window selected by the timeline brush.
    #[must_use]
    pub fn visible_window(&self) -> (NaiveDate, NaiveDate) {
        let window = self.core.model.visible_window;
        (window.start(), window.end())
    }

    /// Fixed value window spanning the whole axis range.
    #[must_use]
    pub fn value_bounds(&self) -> (f64, f64) {
        let bounds = self.core.model.value_bounds;
        (bounds.min(), bounds.max())
    }

    /// Window selected by the value brush.
    #[must_use]
    pub fn value_window(&self) -> (f64, f64) {
        let window = self.core.model.value_window;
        (window.min(), window.max())
    }

    #[must_use]
    pub fn timeline_brush(&self) -> BrushSpan {
        self.core.model.timeline_brush
    }

    #[must_use]
    pub fn value_brush(&self) -> BrushSpan {
        self.core.model.value_brush
    }

    /// Sets the visible date window directly, bypassing brush drags.
    ///
    /// The brush span is re-derived from the window so handle positions stay
    /// in sync; windows narrower than the brush's minimum span widen to it.
    pub fn set_visible_window(&mut self, start: NaiveDate, end: NaiveDate) -> RoadmapResult<()> {
        let window = TimelineWindow::new(start, end)?;
        let bounds = self.core.model.timeline_bounds;

        let start_percent = bounds.percent_of(window.start())?.clamp(0.0, 99.0);
        let end_percent = bounds
            .percent_of(window.end())?
            .clamp(start_percent, 100.0);
        let span_percent = (end_percent - start_percent)
            .max(1.0)
            .min(100.0 - start_percent);
        let brush = BrushSpan::new(start_percent, span_percent)?;

        self.core.model.visible_window = window;
        self.core.model.timeline_brush = brush;
        debug!(%start, %end, "set visible window");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::VisibleWindowChanged { start, end });
        Ok(())
    }

    /// Opens the visible date window back up to the full grid year.
    pub fn reset_visible_window(&mut self) {
        let bounds = self.core.model.timeline_bounds;
        self.core.model.visible_window = bounds;
        self.core.model.timeline_brush = BrushSpan::full();
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::VisibleWindowChanged {
            start: bounds.start(),
            end: bounds.end(),
        });
    }

    /// Sets the visible value window directly, bypassing brush drags.
    pub fn set_value_window(&mut self, min: f64, max: f64) -> RoadmapResult<()> {
        let window = ValueWindow::new(min, max)?;
        let bounds = self.core.model.value_bounds;

        let start_percent = bounds.percent_of(window.min())?.clamp(0.0, 99.0);
        let end_percent = bounds
            .percent_of(window.max())?
            .clamp(start_percent, 100.0);
        let span_percent = (end_percent - start_percent)
            .max(1.0)
            .min(100.0 - start_percent);
        let brush = BrushSpan::new(start_percent, span_percent)?;

        self.core.model.value_window = window;
        self.core.model.value_brush = brush;
        debug!(min, max, "set value window");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ValueWindowChanged { min, max });
        Ok(())
    }

    /// Opens the visible value window back up to the full axis range.
    pub fn reset_value_window(&mut self) {
        let bounds = self.core.model.value_bounds;
        self.core.model.value_window = bounds;
        self.core.model.value_brush = BrushSpan::full();
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ValueWindowChanged {
            min: bounds.min(),
            max: bounds.max(),
        });
    }
}
