pub mod brush;

pub use brush::{BrushAxis, BrushDrag, BrushDragMode, BrushSpan};

use serde::{Deserialize, Serialize};

use crate::core::types::CanvasPoint;
use crate::error::{RoadmapError, RoadmapResult};

/// Which gesture currently owns the pointer.
///
/// Pointer-down arms a mode, pointer-move recomputes derived state while the
/// mode is armed and pointer-up disarms back to `Idle`. Gestures never
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureMode {
    Idle,
    DraggingBubble(u32),
    ResizingBubble(u32),
    BrushingTimeline,
    BrushingValue,
}

/// Session data for an in-flight bubble move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleDrag {
    id: u32,
    pointer_start: CanvasPoint,
    origin: CanvasPoint,
}

impl BubbleDrag {
    pub fn begin(id: u32, pointer: CanvasPoint, center: CanvasPoint) -> RoadmapResult<Self> {
        if !pointer.is_finite() || !center.is_finite() {
            return Err(RoadmapError::InvalidData(
                "drag coordinates must be finite".to_owned(),
            ));
        }
        Ok(Self {
            id,
            pointer_start: pointer,
            origin: center,
        })
    }

    #[must_use]
    pub fn id(self) -> u32 {
        self.id
    }

    /// Bubble centre for the current pointer position.
    pub fn center_at(self, pointer: CanvasPoint) -> RoadmapResult<CanvasPoint> {
        if !pointer.is_finite() {
            return Err(RoadmapError::InvalidData(
                "drag coordinates must be finite".to_owned(),
            ));
        }
        Ok(CanvasPoint::new(
            self.origin.x + (pointer.x - self.pointer_start.x),
            self.origin.y + (pointer.y - self.pointer_start.y),
        ))
    }
}

/// Session data for an in-flight bubble resize.
///
/// The resize handle sits on the bubble's rim, so the tracked diameter is
/// twice the pointer's distance from the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleResize {
    id: u32,
    center: CanvasPoint,
}

impl BubbleResize {
    pub fn begin(id: u32, center: CanvasPoint) -> RoadmapResult<Self> {
        if !center.is_finite() {
            return Err(RoadmapError::InvalidData(
                "resize coordinates must be finite".to_owned(),
            ));
        }
        Ok(Self { id, center })
    }

    #[must_use]
    pub fn id(self) -> u32 {
        self.id
    }

    /// Diameter implied by the current pointer position.
    pub fn diameter_at(self, pointer: CanvasPoint) -> RoadmapResult<f64> {
        if !pointer.is_finite() {
            return Err(RoadmapError::InvalidData(
                "resize coordinates must be finite".to_owned(),
            ));
        }
        let dx = pointer.x - self.center.x;
        let dy = pointer.y - self.center.y;
        Ok(2.0 * dx.hypot(dy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: GestureMode,
    cursor_x: f64,
    cursor_y: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: GestureMode::Idle,
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> GestureMode {
        self.mode
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self.mode == GestureMode::Idle
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Arms a gesture. Only one gesture may own the pointer at a time.
    pub fn begin_gesture(&mut self, mode: GestureMode) -> RoadmapResult<()> {
        if self.mode != GestureMode::Idle {
            return Err(RoadmapError::InvalidData(
                "a gesture is already active".to_owned(),
            ));
        }
        if mode == GestureMode::Idle {
            return Err(RoadmapError::InvalidData(
                "cannot arm the idle mode".to_owned(),
            ));
        }

        self.mode = mode;
        Ok(())
    }

    pub fn end_gesture(&mut self) {
        self.mode = GestureMode::Idle;
    }
}
