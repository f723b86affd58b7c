use crate::core::{CalendarGrid, ProjectStore, TimelineWindow, ValueWindow};
use crate::error::{RoadmapError, RoadmapResult};
use crate::render::Renderer;

use super::{
    RoadmapEngine, RoadmapEngineConfig, engine_core::EngineCore,
    roadmap_behavior::RoadmapBehaviorState, roadmap_model::RoadmapModel,
    roadmap_model::RoadmapModelBootstrap, roadmap_presentation::RoadmapPresentationState,
    roadmap_runtime::RoadmapRuntimeState,
};

impl<R: Renderer> RoadmapEngine<R> {
    /// Creates a fully initialized engine from an explicit configuration.
    pub fn new(renderer: R, config: RoadmapEngineConfig) -> RoadmapResult<Self> {
        if !config.viewport.is_valid() {
            return Err(RoadmapError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        config.bubble_scale.validate()?;
        config.value_axis.validate()?;

        let calendar_grid = CalendarGrid::new(config.grid_year)?;
        let timeline_bounds = TimelineWindow::for_year(config.grid_year)?;
        let value_bounds = ValueWindow::for_axis_range(config.value_axis.axis_range)?;
        let store = if config.seed_default_projects {
            ProjectStore::with_defaults()
        } else {
            ProjectStore::new()
        };

        let model = RoadmapModel::new(RoadmapModelBootstrap {
            viewport: config.viewport,
            store,
            calendar_grid,
            value_axis: config.value_axis,
            bubble_scale: config.bubble_scale,
            timeline_bounds,
            value_bounds,
        });

        let mut engine = Self {
            renderer,
            core: EngineCore {
                model,
                behavior: RoadmapBehaviorState {
                    gesture_input_behavior: config.gesture_input_behavior,
                },
                presentation: RoadmapPresentationState::default(),
                runtime: RoadmapRuntimeState::with_dirty_frame(),
            },
        };
        engine.sync_service_visibility();

        Ok(engine)
    }
}
