use tracing::trace;

use crate::error::RoadmapResult;
use crate::extensions::RoadmapEvent;
use crate::render::Renderer;

use super::RoadmapEngine;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(engine: &mut RoadmapEngine<R>) -> RoadmapResult<()> {
        let frame = engine.build_frame()?;
        trace!(primitives = frame.primitive_count(), "render pass");
        engine.renderer.render(&frame)?;
        engine.core.runtime.frame_dirty = false;
        engine.emit_plugin_event(RoadmapEvent::Rendered);
        Ok(())
    }

    #[cfg(feature = "cairo-backend")]
    pub(super) fn render_on_cairo_context<R: Renderer + CairoContextRenderer>(
        engine: &mut RoadmapEngine<R>,
        context: &cairo::Context,
    ) -> RoadmapResult<()> {
        let frame = engine.build_frame()?;
        trace!(primitives = frame.primitive_count(), "cairo context render pass");
        engine.renderer.render_on_cairo_context(context, &frame)?;
        engine.core.runtime.frame_dirty = false;
        engine.emit_plugin_event(RoadmapEvent::Rendered);
        Ok(())
    }
}
