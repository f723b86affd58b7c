use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Project, Viewport};
use crate::interaction::{BrushSpan, GestureMode};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub grid_year: i32,
    pub timeline_bounds: (NaiveDate, NaiveDate),
    pub visible_window: (NaiveDate, NaiveDate),
    pub value_bounds: (f64, f64),
    pub value_window: (f64, f64),
    pub timeline_brush: BrushSpan,
    pub value_brush: BrushSpan,
    pub gesture_mode: GestureMode,
    pub service_visibility: IndexMap<String, bool>,
    pub projects: Vec<Project>,
    pub staged_import_count: usize,
}
