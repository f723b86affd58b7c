use crate::error::{RoadmapError, RoadmapResult};
use crate::render::Renderer;

use super::{EngineSnapshot, RoadmapEngine};

impl<R: Renderer> RoadmapEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.core.model;
        EngineSnapshot {
            viewport: model.viewport,
            grid_year: model.calendar_grid.year,
            timeline_bounds: (model.timeline_bounds.start(), model.timeline_bounds.end()),
            visible_window: (model.visible_window.start(), model.visible_window.end()),
            value_bounds: (model.value_bounds.min(), model.value_bounds.max()),
            value_window: (model.value_window.min(), model.value_window.max()),
            timeline_brush: model.timeline_brush,
            value_brush: model.value_brush,
            gesture_mode: model.interaction.mode(),
            service_visibility: model.service_visibility.clone(),
            projects: model.store.projects().to_vec(),
            staged_import_count: self.staged_import_count(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> RoadmapResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| RoadmapError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
