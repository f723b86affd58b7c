use tracing::{debug, trace};

use crate::core::CanvasPoint;
use crate::error::{RoadmapError, RoadmapResult};
use crate::extensions::RoadmapEvent;
use crate::interaction::{BubbleResize, GestureMode};
use crate::render::Renderer;

use super::RoadmapEngine;

/// Data committed to a record when a bubble resize completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleResizeCommit {
    pub id: u32,
    pub complexity: f64,
}

impl<R: Renderer> RoadmapEngine<R> {
    /// Arms a resize on the bubble's rim handle.
    ///
    /// While armed, the bubble previews the diameter implied by the cursor;
    /// the record itself only changes on completion.
    pub fn begin_bubble_resize(&mut self, id: u32, pointer: CanvasPoint) -> RoadmapResult<()> {
        if !self
            .core
            .behavior
            .gesture_input_behavior
            .allow_bubble_resize
        {
            return Err(RoadmapError::InvalidData(
                "bubble resizing is disabled".to_owned(),
            ));
        }

        let geometry = self.bubble_geometry(id)?;
        let session = BubbleResize::begin(id, geometry.center)?;
        self.core
            .model
            .interaction
            .begin_gesture(GestureMode::ResizingBubble(id))?;
        self.core.model.interaction.on_pointer_move(pointer.x, pointer.y);
        self.core.runtime.bubble_resize = Some(session);

        debug!(id, "begin bubble resize");
        self.emit_plugin_event(RoadmapEvent::GestureStarted {
            mode: GestureMode::ResizingBubble(id),
        });
        Ok(())
    }

    /// Updates the preview diameter for a pointer move.
    ///
    /// Returns the previewed diameter, clamped to the bubble scale's bounds.
    pub fn move_bubble_resize(&mut self, pointer: CanvasPoint) -> RoadmapResult<f64> {
        let Some(session) = self.core.runtime.bubble_resize else {
            return Err(RoadmapError::InvalidData(
                "no bubble resize in progress".to_owned(),
            ));
        };

        let raw = session.diameter_at(pointer)?;
        self.core.model.interaction.on_pointer_move(pointer.x, pointer.y);
        let scale = self.core.model.bubble_scale;
        let diameter = raw.clamp(scale.min_diameter_px, scale.max_diameter_px);
        trace!(id = session.id(), diameter, "move bubble resize");
        self.mark_frame_dirty();
        Ok(diameter)
    }

    /// Completes the resize: the final diameter maps back to a complexity and
    /// the record is updated.
    pub fn complete_bubble_resize(&mut self) -> RoadmapResult<BubbleResizeCommit> {
        let Some(session) = self.core.runtime.bubble_resize.take() else {
            return Err(RoadmapError::InvalidData(
                "no bubble resize in progress".to_owned(),
            ));
        };
        let id = session.id();

        let result = self.commit_resize_diameter(session);
        self.core.model.interaction.end_gesture();
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::GestureEnded);

        let commit = result?;
        debug!(id, complexity = commit.complexity, "complete bubble resize");
        self.emit_plugin_event(RoadmapEvent::ProjectUpdated { id });
        Ok(commit)
    }

    /// Abandons the resize, leaving the record untouched.
    pub fn cancel_bubble_resize(&mut self) -> RoadmapResult<()> {
        let Some(session) = self.core.runtime.bubble_resize.take() else {
            return Err(RoadmapError::InvalidData(
                "no bubble resize in progress".to_owned(),
            ));
        };

        self.core.model.interaction.end_gesture();
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::GestureEnded);

        debug!(id = session.id(), "cancel bubble resize");
        Ok(())
    }

    fn commit_resize_diameter(&mut self, session: BubbleResize) -> RoadmapResult<BubbleResizeCommit> {
        let id = session.id();
        let (cursor_x, cursor_y) = self.core.model.interaction.cursor();
        let diameter = session.diameter_at(CanvasPoint::new(cursor_x, cursor_y))?;
        let complexity = self.core.model.bubble_scale.complexity_for(diameter)?;

        let Some(project) = self.core.model.store.get(id) else {
            return Err(RoadmapError::UnknownProjectId(id));
        };
        let mut updated = project.clone();
        updated.complexity = complexity;
        self.core.model.store.update(updated)?;

        Ok(BubbleResizeCommit { id, complexity })
    }
}
