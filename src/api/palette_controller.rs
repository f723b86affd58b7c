use tracing::debug;

use crate::error::RoadmapResult;
use crate::render::{Color, Renderer};

use super::{RoadmapEngine, ServicePalette};

impl<R: Renderer> RoadmapEngine<R> {
    #[must_use]
    pub fn service_palette(&self) -> &ServicePalette {
        &self.core.presentation.service_palette
    }

    /// Assigns a legend and bubble color to a service.
    pub fn set_service_color(
        &mut self,
        service: impl Into<String>,
        color: Color,
    ) -> RoadmapResult<()> {
        let service = service.into();
        self.core
            .presentation
            .service_palette
            .set_color(service.clone(), color)?;
        debug!(service, "set service color");
        self.mark_frame_dirty();
        Ok(())
    }

    /// Color used for services without a palette entry.
    pub fn set_service_fallback_color(&mut self, color: Color) -> RoadmapResult<()> {
        self.core
            .presentation
            .service_palette
            .set_fallback_color(color)?;
        self.mark_frame_dirty();
        Ok(())
    }

    /// Removes a service's color assignment. Returns `true` when removed.
    pub fn remove_service_color(&mut self, service: &str) -> bool {
        let removed = self.core.presentation.service_palette.remove(service);
        if removed {
            debug!(service, "remove service color");
            self.mark_frame_dirty();
        }
        removed
    }
}
