use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Host-configurable gesture input gates.
///
/// Hosts that render a read-only roadmap can switch off the mutating gesture
/// families while keeping programmatic mutation available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureInputBehavior {
    /// Enables drag-to-reschedule on bubbles.
    #[serde(default = "default_true")]
    pub allow_bubble_drag: bool,
    /// Enables rim-handle drag-to-resize on bubbles.
    #[serde(default = "default_true")]
    pub allow_bubble_resize: bool,
    /// Enables timeline and value brush dragging.
    #[serde(default = "default_true")]
    pub allow_brush_filtering: bool,
}

impl Default for GestureInputBehavior {
    fn default() -> Self {
        Self {
            allow_bubble_drag: true,
            allow_bubble_resize: true,
            allow_brush_filtering: true,
        }
    }
}
