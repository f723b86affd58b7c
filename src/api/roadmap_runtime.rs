use crate::core::Project;
use crate::extensions::RoadmapPlugin;
use crate::interaction::{BrushDrag, BubbleDrag, BubbleResize};

/// Runtime orchestration state grouped separately from model/behavior/presentation.
///
/// Gesture sessions live here because they are transient bookkeeping: they
/// exist only between pointer-down and pointer-up and never serialize.
pub(super) struct RoadmapRuntimeState {
    pub(super) plugins: Vec<Box<dyn RoadmapPlugin>>,
    pub(super) frame_dirty: bool,
    pub(super) bubble_drag: Option<BubbleDrag>,
    pub(super) bubble_resize: Option<BubbleResize>,
    pub(super) brush_drag: Option<BrushDrag>,
    pub(super) staged_import: Option<Vec<Project>>,
}

impl RoadmapRuntimeState {
    /// A fresh engine needs one full render before anything is on screen.
    #[must_use]
    pub(super) fn with_dirty_frame() -> Self {
        Self {
            plugins: Vec::new(),
            frame_dirty: true,
            bubble_drag: None,
            bubble_resize: None,
            brush_drag: None,
            staged_import: None,
        }
    }
}
