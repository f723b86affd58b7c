use super::{
    roadmap_behavior::RoadmapBehaviorState, roadmap_model::RoadmapModel,
    roadmap_presentation::RoadmapPresentationState, roadmap_runtime::RoadmapRuntimeState,
};

/// Internal engine core state used by the public facade (`RoadmapEngine`).
pub(super) struct EngineCore {
    pub(super) model: RoadmapModel,
    pub(super) behavior: RoadmapBehaviorState,
    pub(super) presentation: RoadmapPresentationState,
    pub(super) runtime: RoadmapRuntimeState,
}
