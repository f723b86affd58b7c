use crate::extensions::{PluginContext, RoadmapEvent};
use crate::render::Renderer;

use super::RoadmapEngine;

impl<R: Renderer> RoadmapEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let visible_window = self.core.model.visible_window;
        let value_window = self.core.model.value_window;
        PluginContext {
            viewport: self.core.model.viewport,
            visible_window: (visible_window.start(), visible_window.end()),
            value_window: (value_window.min(), value_window.max()),
            project_count: self.core.model.store.len(),
            gesture_mode: self.core.model.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: RoadmapEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(&event, context);
        }
    }
}
