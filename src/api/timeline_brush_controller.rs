use tracing::{debug, trace};

use crate::error::{RoadmapError, RoadmapResult};
use crate::extensions::RoadmapEvent;
use crate::interaction::{BrushAxis, BrushDrag, BrushDragMode, BrushSpan, GestureMode};
use crate::render::Renderer;

use super::RoadmapEngine;

impl<R: Renderer> RoadmapEngine<R> {
    /// Arms a drag on the timeline brush.
    ///
    /// `mode` selects which part of the brush was grabbed: the window body or
    /// one of the two resize handles.
    pub fn begin_timeline_brush(
        &mut self,
        mode: BrushDragMode,
        pointer_x: f64,
    ) -> RoadmapResult<()> {
        if !self
            .core
            .behavior
            .gesture_input_behavior
            .allow_brush_filtering
        {
            return Err(RoadmapError::InvalidData(
                "brush filtering is disabled".to_owned(),
            ));
        }

        let session = BrushDrag::begin(
            BrushAxis::Horizontal,
            mode,
            pointer_x,
            self.core.model.timeline_brush,
        )?;
        self.core
            .model
            .interaction
            .begin_gesture(GestureMode::BrushingTimeline)?;
        self.core.runtime.brush_drag = Some(session);

        debug!(?mode, "begin timeline brush");
        self.emit_plugin_event(RoadmapEvent::GestureStarted {
            mode: GestureMode::BrushingTimeline,
        });
        Ok(())
    }

    /// Recomputes the brush span and visible window for a pointer move.
    ///
    /// The window updates on every move, so filtering tracks the drag live.
    pub fn move_timeline_brush(&mut self, pointer_x: f64) -> RoadmapResult<()> {
        if self.core.model.interaction.mode() != GestureMode::BrushingTimeline {
            return Err(RoadmapError::InvalidData(
                "no timeline brush drag in progress".to_owned(),
            ));
        }
        let Some(session) = self.core.runtime.brush_drag else {
            return Err(RoadmapError::InvalidData(
                "no timeline brush drag in progress".to_owned(),
            ));
        };

        let track = f64::from(self.core.model.viewport.width);
        let span = session.span_at(pointer_x, track)?;
        trace!(
            start = span.start_percent(),
            span = span.span_percent(),
            "move timeline brush"
        );
        self.apply_timeline_brush(span)
    }

    /// Disarms the timeline brush drag.
    pub fn end_timeline_brush(&mut self) -> RoadmapResult<()> {
        if self.core.model.interaction.mode() != GestureMode::BrushingTimeline {
            return Err(RoadmapError::InvalidData(
                "no timeline brush drag in progress".to_owned(),
            ));
        }

        self.core.runtime.brush_drag = None;
        self.core.model.interaction.end_gesture();
        debug!("end timeline brush");
        self.emit_plugin_event(RoadmapEvent::GestureEnded);
        Ok(())
    }

    /// Applies a timeline brush span directly, bypassing pointer drags.
    pub fn set_timeline_brush(&mut self, span: BrushSpan) -> RoadmapResult<()> {
        self.apply_timeline_brush(span)
    }

    fn apply_timeline_brush(&mut self, span: BrushSpan) -> RoadmapResult<()> {
        let window = self
            .core
            .model
            .timeline_bounds
            .window_for_span(span.start_percent(), span.span_percent())?;

        self.core.model.timeline_brush = span;
        self.core.model.visible_window = window;
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::VisibleWindowChanged {
            start: window.start(),
            end: window.end(),
        });
        Ok(())
    }
}
