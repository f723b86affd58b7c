use tracing::debug;

use crate::core::Project;
use crate::error::{RoadmapError, RoadmapResult};
use crate::extensions::RoadmapEvent;
use crate::io::{export_csv, export_json, import_csv, import_json};
use crate::render::Renderer;

use super::RoadmapEngine;

impl<R: Renderer> RoadmapEngine<R> {
    /// Serializes the current roadmap as pretty JSON.
    pub fn export_projects_json(&self) -> RoadmapResult<String> {
        export_json(self.core.model.store.projects())
    }

    /// Validates a JSON payload and replaces the roadmap with it.
    ///
    /// JSON import commits directly; there is no staging step. Returns the
    /// new record count.
    pub fn import_projects_json(&mut self, raw: &str) -> RoadmapResult<usize> {
        let projects = import_json(raw)?;
        let count = self.core.model.store.replace_all(projects)?;
        self.sync_service_visibility();
        debug!(count, "import projects from json");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ProjectsReplaced { count });
        Ok(count)
    }

    /// Serializes the current roadmap as spreadsheet CSV.
    pub fn export_projects_csv(&self) -> RoadmapResult<String> {
        export_csv(self.core.model.store.projects())
    }

    /// Validates a spreadsheet payload and stages it for an explicit commit.
    ///
    /// The store is untouched until `commit_staged_import`; re-staging
    /// replaces any previously staged rows. Returns the staged row count.
    pub fn stage_spreadsheet_import(&mut self, raw: &str) -> RoadmapResult<usize> {
        let projects = import_csv(raw)?;
        let count = projects.len();
        self.core.runtime.staged_import = Some(projects);
        debug!(count, "stage spreadsheet import");
        self.emit_plugin_event(RoadmapEvent::ImportStaged { count });
        Ok(count)
    }

    #[must_use]
    pub fn staged_import(&self) -> Option<&[Project]> {
        self.core.runtime.staged_import.as_deref()
    }

    #[must_use]
    pub fn staged_import_count(&self) -> usize {
        self.core
            .runtime
            .staged_import
            .as_ref()
            .map_or(0, Vec::len)
    }

    /// Replaces the roadmap with the staged rows.
    ///
    /// The staged rows are kept when the store rejects them, so a host can
    /// surface the error without losing the user's upload.
    pub fn commit_staged_import(&mut self) -> RoadmapResult<usize> {
        let Some(staged) = self.core.runtime.staged_import.clone() else {
            return Err(RoadmapError::InvalidData(
                "no staged import to commit".to_owned(),
            ));
        };

        let count = self.core.model.store.replace_all(staged)?;
        self.core.runtime.staged_import = None;
        self.sync_service_visibility();
        debug!(count, "commit staged import");
        self.mark_frame_dirty();
        self.emit_plugin_event(RoadmapEvent::ProjectsReplaced { count });
        self.emit_plugin_event(RoadmapEvent::ImportCommitted { count });
        Ok(count)
    }

    /// Drops staged rows without touching the store. Returns `true` when
    /// something was staged.
    pub fn discard_staged_import(&mut self) -> bool {
        if self.core.runtime.staged_import.take().is_none() {
            return false;
        }
        debug!("discard staged import");
        self.emit_plugin_event(RoadmapEvent::ImportDiscarded);
        true
    }
}
