use crate::error::RoadmapResult;
use crate::render::Renderer;

use super::validation::validate_render_style;
use super::{RenderStyle, engine_core::EngineCore, render_coordinator::RenderCoordinator};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `RoadmapEngine` coordinates the project store, grid mappings, brush
/// windows, gesture sessions, and renderer calls.
pub struct RoadmapEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> core::fmt::Debug for RoadmapEngine<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RoadmapEngine").finish_non_exhaustive()
    }
}

impl<R: Renderer> RoadmapEngine<R> {
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.core.presentation.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> RoadmapResult<()> {
        validate_render_style(style)?;
        self.core.presentation.render_style = style;
        self.mark_frame_dirty();
        Ok(())
    }

    /// True when state changed since the last completed render.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.core.runtime.frame_dirty
    }

    pub(super) fn mark_frame_dirty(&mut self) {
        self.core.runtime.frame_dirty = true;
    }

    pub fn render(&mut self) -> RoadmapResult<()> {
        RenderCoordinator::render(self)
    }

    /// Renders only when state changed since the last render.
    ///
    /// Returns `true` when a frame was produced.
    pub fn render_if_dirty(&mut self) -> RoadmapResult<bool> {
        if !self.core.runtime.frame_dirty {
            return Ok(false);
        }
        RenderCoordinator::render(self)?;
        Ok(true)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> RoadmapResult<()>
    where
        R: CairoContextRenderer,
    {
        RenderCoordinator::render_on_cairo_context(self, context)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
