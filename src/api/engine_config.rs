use serde::{Deserialize, Serialize};

use crate::core::{BubbleScale, DEFAULT_GRID_YEAR, ValueAxis, Viewport};
use crate::error::{RoadmapError, RoadmapResult};

use super::GestureInputBehavior;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load roadmap
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadmapEngineConfig {
    pub viewport: Viewport,
    /// Calendar year the grid maps onto. Dropped bubbles land in this year.
    #[serde(default = "default_grid_year")]
    pub grid_year: i32,
    #[serde(default = "default_bubble_scale")]
    pub bubble_scale: BubbleScale,
    #[serde(default = "default_value_axis")]
    pub value_axis: ValueAxis,
    #[serde(default = "default_gesture_input_behavior")]
    pub gesture_input_behavior: GestureInputBehavior,
    /// Seeds the built-in sample roadmap into the store on startup.
    #[serde(default = "default_seed_default_projects")]
    pub seed_default_projects: bool,
}

impl RoadmapEngineConfig {
    /// Creates a minimal config for the default grid year.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            grid_year: default_grid_year(),
            bubble_scale: default_bubble_scale(),
            value_axis: default_value_axis(),
            gesture_input_behavior: default_gesture_input_behavior(),
            seed_default_projects: default_seed_default_projects(),
        }
    }

    /// Sets the calendar year mapped by the grid.
    #[must_use]
    pub fn with_grid_year(mut self, grid_year: i32) -> Self {
        self.grid_year = grid_year;
        self
    }

    /// Sets the complexity-to-diameter mapping.
    #[must_use]
    pub fn with_bubble_scale(mut self, bubble_scale: BubbleScale) -> Self {
        self.bubble_scale = bubble_scale;
        self
    }

    /// Sets the vertical business-value axis.
    #[must_use]
    pub fn with_value_axis(mut self, value_axis: ValueAxis) -> Self {
        self.value_axis = value_axis;
        self
    }

    /// Sets initial gesture input behavior.
    #[must_use]
    pub fn with_gesture_input_behavior(mut self, behavior: GestureInputBehavior) -> Self {
        self.gesture_input_behavior = behavior;
        self
    }

    /// Controls whether the store starts with the sample roadmap or empty.
    #[must_use]
    pub fn with_seed_default_projects(mut self, seed: bool) -> Self {
        self.seed_default_projects = seed;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> RoadmapResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| RoadmapError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> RoadmapResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RoadmapError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_grid_year() -> i32 {
    DEFAULT_GRID_YEAR
}

fn default_bubble_scale() -> BubbleScale {
    BubbleScale::default()
}

fn default_value_axis() -> ValueAxis {
    ValueAxis::default()
}

fn default_gesture_input_behavior() -> GestureInputBehavior {
    GestureInputBehavior::default()
}

fn default_seed_default_projects() -> bool {
    true
}
