use super::{RenderStyle, ServicePalette};

/// Presentation state grouped separately from model/behavior/runtime.
#[derive(Debug, Clone, PartialEq, Default)]
pub(super) struct RoadmapPresentationState {
    pub(super) render_style: RenderStyle,
    pub(super) service_palette: ServicePalette,
}
