use tracing::{debug, trace};

use crate::core::Project;
use crate::error::RoadmapResult;
use crate::extensions::RoadmapEvent;
use crate::render::Renderer;

use super::RoadmapEngine;

impl<R: Renderer> RoadmapEngine<R> {
    /// Adds a record and returns its assigned id.
    ///
    /// Pass id `0` to let the store assign the next free id.
    pub fn add_project(&mut self, project: Project) -> RoadmapResult<u32> {
        let id = self.core.model.store.add(project)?;
        self.sync_service_visibility();
        debug!(id, count = self.core.model.store.len(), "add project");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ProjectAdded { id });
        Ok(id)
    }

    /// Replaces the record carrying the same id.
    pub fn update_project(&mut self, project: Project) -> RoadmapResult<()> {
        let id = project.id;
        self.core.model.store.update(project)?;
        self.sync_service_visibility();
        debug!(id, "update project");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ProjectUpdated { id });
        Ok(())
    }

    /// Removes and returns the record with the given id.
    pub fn remove_project(&mut self, id: u32) -> RoadmapResult<Project> {
        let removed = self.core.model.store.remove(id)?;
        debug!(id, count = self.core.model.store.len(), "remove project");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ProjectRemoved { id });
        Ok(removed)
    }

    /// Atomically replaces the whole roadmap. Returns the new record count.
    pub fn replace_projects(&mut self, projects: Vec<Project>) -> RoadmapResult<usize> {
        let count = self.core.model.store.replace_all(projects)?;
        self.sync_service_visibility();
        debug!(count, "replace projects");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ProjectsReplaced { count });
        Ok(count)
    }

    /// Restores the built-in sample roadmap. Returns the record count.
    pub fn restore_default_projects(&mut self) -> usize {
        let count = self.core.model.store.restore_defaults();
        self.sync_service_visibility();
        debug!(count, "restore default projects");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ProjectsReplaced { count });
        count
    }

    /// Pins a record to an on-screen position during an active drag.
    pub fn set_project_position(&mut self, id: u32, x: f64, y: f64) -> RoadmapResult<()> {
        self.core.model.store.set_position(id, x, y)?;
        trace!(id, x, y, "set project position");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::PositionChanged { id });
        Ok(())
    }

    /// Drops a pinned position so placement derives from data again.
    pub fn clear_project_position(&mut self, id: u32) -> RoadmapResult<()> {
        self.core.model.store.clear_position(id)?;
        trace!(id, "clear project position");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::PositionChanged { id });
        Ok(())
    }
}
