use tracing::debug;

use crate::error::{RoadmapError, RoadmapResult};
use crate::extensions::RoadmapPlugin;
use crate::render::Renderer;

use super::RoadmapEngine;

impl<R: Renderer> RoadmapEngine<R> {
    /// Registers an observer plugin. Ids must be non-empty and unique.
    pub fn register_plugin(&mut self, plugin: Box<dyn RoadmapPlugin>) -> RoadmapResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(RoadmapError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.plugin_index(&plugin_id).is_some() {
            return Err(RoadmapError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }

        debug!(plugin_id, "register plugin");
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Removes a plugin by id. Returns `true` when something was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let Some(index) = self.plugin_index(plugin_id) else {
            return false;
        };
        self.core.runtime.plugins.remove(index);
        debug!(plugin_id, "unregister plugin");
        true
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugin_index(plugin_id).is_some()
    }

    fn plugin_index(&self, plugin_id: &str) -> Option<usize> {
        self.core
            .runtime
            .plugins
            .iter()
            .position(|plugin| plugin.id() == plugin_id)
    }
}
