use crate::core::Viewport;
use crate::error::{RoadmapError, RoadmapResult};
use crate::render::{CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one roadmap draw pass.
///
/// The scene builder fills the lists in paint order: backends paint the
/// background wash first, then lines, circles, rects and texts as-is, back
/// to front, without re-sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    /// Full-viewport wash painted before any primitive; `None` lets the
    /// backend's own clear color show through.
    pub background: Option<Color>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: None,
            lines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Checks the viewport and every primitive for finite, in-range values.
    pub fn validate(&self) -> RoadmapResult<()> {
        if !self.viewport.is_valid() {
            return Err(RoadmapError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if let Some(background) = self.background {
            background.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    /// Total primitive count across all kinds.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.circles.len() + self.texts.len()
    }
}
