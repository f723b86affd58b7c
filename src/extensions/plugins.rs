use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::GestureMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub visible_window: (NaiveDate, NaiveDate),
    pub value_window: (f64, f64),
    pub project_count: usize,
    pub gesture_mode: GestureMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoadmapEvent {
    ProjectsReplaced { count: usize },
    ProjectAdded { id: u32 },
    ProjectUpdated { id: u32 },
    ProjectRemoved { id: u32 },
    PositionChanged { id: u32 },
    VisibleWindowChanged { start: NaiveDate, end: NaiveDate },
    ValueWindowChanged { min: f64, max: f64 },
    ServiceFilterChanged { service: String, visible: bool },
    ImportStaged { count: usize },
    ImportCommitted { count: usize },
    ImportDiscarded,
    GestureStarted { mode: GestureMode },
    GestureEnded,
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read engine context without mutating core
/// internals directly.
pub trait RoadmapPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &RoadmapEvent, context: PluginContext);
}
