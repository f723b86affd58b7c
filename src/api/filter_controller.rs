use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    Project, projects_in_value_window, projects_in_window, projects_with_visible_service,
};
use crate::error::{RoadmapError, RoadmapResult};
use crate::extensions::RoadmapEvent;
use crate::render::Renderer;

use super::RoadmapEngine;

impl<R: Renderer> RoadmapEngine<R> {
    /// Shows or hides every bubble belonging to a service.
    ///
    /// Service names match exactly; an unknown name simply creates a new
    /// visibility entry, so hosts can pre-seed toggles before data arrives.
    pub fn set_service_visible(
        &mut self,
        service: impl Into<String>,
        visible: bool,
    ) -> RoadmapResult<()> {
        let service = service.into();
        if service.trim().is_empty() {
            return Err(RoadmapError::InvalidData(
                "service name must not be blank".to_owned(),
            ));
        }

        self.core
            .model
            .service_visibility
            .insert(service.clone(), visible);
        debug!(service, visible, "set service visibility");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ServiceFilterChanged { service, visible });
        Ok(())
    }

    /// Services absent from the map are treated as visible.
    #[must_use]
    pub fn is_service_visible(&self, service: &str) -> bool {
        self.core
            .model
            .service_visibility
            .get(service)
            .copied()
            .unwrap_or(true)
    }

    #[must_use]
    pub fn service_visibility(&self) -> &IndexMap<String, bool> {
        &self.core.model.service_visibility
    }

    /// Records that pass all three active filters: timeline window, value
    /// window, and service visibility.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<Project> {
        let model = &self.core.model;
        let in_window = projects_in_window(model.store.projects(), model.visible_window);
        let in_value_window = projects_in_value_window(&in_window, model.value_window);
        projects_with_visible_service(&in_value_window, &model.service_visibility)
    }

    /// Ensures every service present in the store has a visibility entry.
    ///
    /// Existing toggles are preserved; new services default to visible.
    pub(super) fn sync_service_visibility(&mut self) {
        let model = &mut self.core.model;
        for project in model.store.projects() {
            if !model.service_visibility.contains_key(&project.service) {
                model
                    .service_visibility
                    .insert(project.service.clone(), true);
            }
        }
    }
}
