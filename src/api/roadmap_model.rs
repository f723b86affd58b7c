use indexmap::IndexMap;

use crate::core::{
    BubbleScale, CalendarGrid, ProjectStore, TimelineWindow, ValueAxis, ValueWindow, Viewport,
};
use crate::interaction::{BrushSpan, InteractionState};

/// Core roadmap domain state.
///
/// This struct intentionally groups mutable chart state (store, grid mapping,
/// windows, brushes, interaction) so the engine facade can stay a thin
/// orchestration layer over it.
pub struct RoadmapModel {
    pub(super) viewport: Viewport,
    pub(super) store: ProjectStore,
    pub(super) calendar_grid: CalendarGrid,
    pub(super) value_axis: ValueAxis,
    pub(super) bubble_scale: BubbleScale,
    pub(super) timeline_bounds: TimelineWindow,
    pub(super) visible_window: TimelineWindow,
    pub(super) value_bounds: ValueWindow,
    pub(super) value_window: ValueWindow,
    pub(super) timeline_brush: BrushSpan,
    pub(super) value_brush: BrushSpan,
    pub(super) service_visibility: IndexMap<String, bool>,
    pub(super) interaction: InteractionState,
}

pub struct RoadmapModelBootstrap {
    pub viewport: Viewport,
    pub store: ProjectStore,
    pub calendar_grid: CalendarGrid,
    pub value_axis: ValueAxis,
    pub bubble_scale: BubbleScale,
    pub timeline_bounds: TimelineWindow,
    pub value_bounds: ValueWindow,
}

impl RoadmapModel {
    /// Both visible windows start fully open over their bounds.
    #[must_use]
    pub fn new(bootstrap: RoadmapModelBootstrap) -> Self {
        Self {
            viewport: bootstrap.viewport,
            store: bootstrap.store,
            calendar_grid: bootstrap.calendar_grid,
            value_axis: bootstrap.value_axis,
            bubble_scale: bootstrap.bubble_scale,
            timeline_bounds: bootstrap.timeline_bounds,
            visible_window: bootstrap.timeline_bounds,
            value_bounds: bootstrap.value_bounds,
            value_window: bootstrap.value_bounds,
            timeline_brush: BrushSpan::full(),
            value_brush: BrushSpan::full(),
            service_visibility: IndexMap::new(),
            interaction: InteractionState::default(),
        }
    }
}
