use super::GestureInputBehavior;

/// Host-configurable behavior state grouped separately from model data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct RoadmapBehaviorState {
    pub(super) gesture_input_behavior: GestureInputBehavior,
}
