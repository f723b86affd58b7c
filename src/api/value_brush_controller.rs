use tracing::{debug, trace};

use crate::error::{RoadmapError, RoadmapResult};
use crate::extensions::RoadmapEvent;
use crate::interaction::{BrushAxis, BrushDrag, BrushDragMode, BrushSpan, GestureMode};
use crate::render::Renderer;

use super::RoadmapEngine;

impl<R: Renderer> RoadmapEngine<R> {
    /// Arms a drag on the vertical value brush.
    ///
    /// The brush track grows bottom-up: its start handle is the lower value
    /// bound and upward pointer movement increases percentages.
    pub fn begin_value_brush(&mut self, mode: BrushDragMode, pointer_y: f64) -> RoadmapResult<()> {
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
            BrushAxis::Vertical,
            mode,
            pointer_y,
            self.core.model.value_brush,
        )?;
        self.core
            .model
            .interaction
            .begin_gesture(GestureMode::BrushingValue)?;
        self.core.runtime.brush_drag = Some(session);

        debug!(?mode, "begin value brush");
        self.emit_plugin_event(RoadmapEvent::GestureStarted {
            mode: GestureMode::BrushingValue,
        });
        Ok(())
    }

    /// Recomputes the brush span and value window for a pointer move.
    pub fn move_value_brush(&mut self, pointer_y: f64) -> RoadmapResult<()> {
        if self.core.model.interaction.mode() != GestureMode::BrushingValue {
            return Err(RoadmapError::InvalidData(
                "no value brush drag in progress".to_owned(),
            ));
        }
        let Some(session) = self.core.runtime.brush_drag else {
            return Err(RoadmapError::InvalidData(
                "no value brush drag in progress".to_owned(),
            ));
        };

        let track = f64::from(self.core.model.viewport.height);
        let span = session.span_at(pointer_y, track)?;
        trace!(
            start = span.start_percent(),
            span = span.span_percent(),
            "move value brush"
        );
        self.apply_value_brush(span)
    }

    /// Disarms the value brush drag.
    pub fn end_value_brush(&mut self) -> RoadmapResult<()> {
        if self.core.model.interaction.mode() != GestureMode::BrushingValue {
            return Err(RoadmapError::InvalidData(
                "no value brush drag in progress".to_owned(),
            ));
        }

        self.core.runtime.brush_drag = None;
        self.core.model.interaction.end_gesture();
        debug!("end value brush");
        self.emit_plugin_event(RoadmapEvent::GestureEnded);
        Ok(())
    }

    /// Applies a value brush span directly, bypassing pointer drags.
    pub fn set_value_brush(&mut self, span: BrushSpan) -> RoadmapResult<()> {
        self.apply_value_brush(span)
    }

    fn apply_value_brush(&mut self, span: BrushSpan) -> RoadmapResult<()> {
        let window = self
            .core
            .model
            .value_bounds
            .window_for_span(span.start_percent(), span.span_percent())?;

        self.core.model.value_brush = span;
        self.core.model.value_window = window;
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ValueWindowChanged {
            min: window.min(),
            max: window.max(),
        });
        Ok(())
    }
}
