use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::CanvasPoint;
use crate::error::{RoadmapError, RoadmapResult};
use crate::extensions::RoadmapEvent;
use crate::interaction::{BubbleDrag, GestureMode};
use crate::render::Renderer;

use super::RoadmapEngine;

/// Data committed to a record when a bubble drag completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleDragCommit {
    pub id: u32,
    pub start_date: NaiveDate,
    pub value: f64,
}

impl<R: Renderer> RoadmapEngine<R> {
    /// Arms a bubble drag at the given pointer position.
    ///
    /// The grab offset between pointer and bubble centre is preserved for the
    /// whole gesture, so bubbles never jump under the cursor.
    pub fn begin_bubble_drag(&mut self, id: u32, pointer: CanvasPoint) -> RoadmapResult<()> {
        if !self.core.behavior.gesture_input_behavior.allow_bubble_drag {
            return Err(RoadmapError::InvalidData(
                "bubble dragging is disabled".to_owned(),
            ));
        }

        let geometry = self.bubble_geometry(id)?;
        let session = BubbleDrag::begin(id, pointer, geometry.center)?;
        self.core
            .model
            .interaction
            .begin_gesture(GestureMode::DraggingBubble(id))?;
        self.core.model.interaction.on_pointer_move(pointer.x, pointer.y);
        self.core.runtime.bubble_drag = Some(session);

        debug!(id, "begin bubble drag");
        self.emit_plugin_event(RoadmapEvent::GestureStarted {
            mode: GestureMode::DraggingBubble(id),
        });
        Ok(())
    }

    /// Recomputes the dragged bubble's pinned position for a pointer move.
    pub fn move_bubble_drag(&mut self, pointer: CanvasPoint) -> RoadmapResult<()> {
        let Some(session) = self.core.runtime.bubble_drag else {
            return Err(RoadmapError::InvalidData(
                "no bubble drag in progress".to_owned(),
            ));
        };

        let center = session.center_at(pointer)?;
        self.core.model.interaction.on_pointer_move(pointer.x, pointer.y);
        self.core.model.store.set_position(session.id(), center.x, center.y)?;
        trace!(id = session.id(), x = center.x, y = center.y, "move bubble drag");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::PositionChanged { id: session.id() });
        Ok(())
    }

    /// Completes the drag: the final position maps back through the grid to a
    /// start date and business value, the record is updated, and the pinned
    /// position is dropped so placement derives from data again.
    pub fn complete_bubble_drag(&mut self) -> RoadmapResult<BubbleDragCommit> {
        let Some(session) = self.core.runtime.bubble_drag.take() else {
            return Err(RoadmapError::InvalidData(
                "no bubble drag in progress".to_owned(),
            ));
        };
        let id = session.id();

        let result = self.commit_drag_position(id);
        self.core.model.interaction.end_gesture();
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::GestureEnded);

        let commit = result?;
        debug!(
            id,
            start_date = %commit.start_date,
            value = commit.value,
            "complete bubble drag"
        );
        self.emit_plugin_event(RoadmapEvent::ProjectUpdated { id });
        Ok(commit)
    }

    /// Abandons the drag and restores data-derived placement.
    pub fn cancel_bubble_drag(&mut self) -> RoadmapResult<()> {
        let Some(session) = self.core.runtime.bubble_drag.take() else {
            return Err(RoadmapError::InvalidData(
                "no bubble drag in progress".to_owned(),
            ));
        };

        let cleared = self.core.model.store.clear_position(session.id());
        self.core.model.interaction.end_gesture();
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::GestureEnded);
        cleared?;

        debug!(id = session.id(), "cancel bubble drag");
        Ok(())
    }

    fn commit_drag_position(&mut self, id: u32) -> RoadmapResult<BubbleDragCommit> {
        let model = &self.core.model;
        let Some(project) = model.store.get(id) else {
            return Err(RoadmapError::UnknownProjectId(id));
        };

        let center = match project.position {
            Some(position) => position,
            None => CanvasPoint::new(
                model
                    .calendar_grid
                    .date_to_pixel(project.start_date, model.viewport)?,
                model
                    .value_axis
                    .value_to_pixel(project.value, model.viewport)?,
            ),
        };

        let start_date = model.calendar_grid.pixel_to_date(center.x, model.viewport)?;
        let value = model.value_axis.pixel_to_value(center.y, model.viewport)?;

        let mut updated = project.clone();
        updated.start_date = start_date;
        updated.value = value;
        updated.position = None;
        self.core.model.store.update(updated)?;

        Ok(BubbleDragCommit {
            id,
            start_date,
            value,
        })
    }
}
