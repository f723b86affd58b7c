use crate::error::RoadmapResult;
use crate::render::{RenderFrame, Renderer};

/// Primitive counts captured by [`NullRenderer`] on its last draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullRenderStats {
    pub lines: usize,
    pub rects: usize,
    pub circles: usize,
    pub texts: usize,
}

/// Headless backend for tests and server-side rendering of nothing.
///
/// Every frame still goes through [`RenderFrame::validate`], and the
/// primitive counts are recorded, so engine tests can assert on scene
/// composition without a drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    stats: NullRenderStats,
}

impl NullRenderer {
    /// Counts from the most recent [`Renderer::render`] call.
    #[must_use]
    pub fn last_stats(&self) -> NullRenderStats {
        self.stats
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RoadmapResult<()> {
        frame.validate()?;
        self.stats = NullRenderStats {
            lines: frame.lines.len(),
            rects: frame.rects.len(),
            circles: frame.circles.len(),
            texts: frame.texts.len(),
        };
        Ok(())
    }
}
