use crate::core::{CanvasPoint, Project};
use crate::error::{RoadmapError, RoadmapResult};
use crate::render::Renderer;

use super::RoadmapEngine;

/// Resolved on-screen geometry for one roadmap bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleGeometry {
    pub id: u32,
    pub center: CanvasPoint,
    pub diameter_px: f64,
}

impl BubbleGeometry {
    #[must_use]
    pub fn radius_px(self) -> f64 {
        self.diameter_px / 2.0
    }
}

impl<R: Renderer> RoadmapEngine<R> {
    /// Projects one record onto the grid.
    ///
    /// A pinned drag position wins over the data-derived placement, and an
    /// in-flight resize session previews its live diameter.
    pub(super) fn project_bubble(&self, project: &Project) -> RoadmapResult<BubbleGeometry> {
        let model = &self.core.model;

        let center = match project.position {
            Some(position) => position,
            None => CanvasPoint::new(
                model
                    .calendar_grid
                    .date_to_pixel(project.start_date, model.viewport)?,
                model
                    .value_axis
                    .value_to_pixel(project.value, model.viewport)?,
            ),
        };

        let diameter_px = match self.core.runtime.bubble_resize {
            Some(resize) if resize.id() == project.id => {
                let (cursor_x, cursor_y) = model.interaction.cursor();
                let raw = resize.diameter_at(CanvasPoint::new(cursor_x, cursor_y))?;
                raw.clamp(
                    model.bubble_scale.min_diameter_px,
                    model.bubble_scale.max_diameter_px,
                )
            }
            _ => model.bubble_scale.diameter_for(project.complexity)?,
        };

        Ok(BubbleGeometry {
            id: project.id,
            center,
            diameter_px,
        })
    }

    /// On-screen geometry for a single record.
    pub fn bubble_geometry(&self, id: u32) -> RoadmapResult<BubbleGeometry> {
        let Some(project) = self.core.model.store.get(id) else {
            return Err(RoadmapError::UnknownProjectId(id));
        };
        self.project_bubble(project)
    }

    /// Geometry for every record passing the active filters, in store order.
    pub fn visible_bubbles(&self) -> RoadmapResult<Vec<BubbleGeometry>> {
        let visible = self.visible_projects();
        let mut bubbles = Vec::with_capacity(visible.len());
        for project in &visible {
            bubbles.push(self.project_bubble(project)?);
        }
        Ok(bubbles)
    }

    /// Visible bubble under `pointer`, if any.
    ///
    /// Bubbles draw in store order, so when two overlap the later record is
    /// on top and wins the hit.
    pub fn bubble_at(&self, pointer: CanvasPoint) -> RoadmapResult<Option<BubbleGeometry>> {
        if !pointer.is_finite() {
            return Err(RoadmapError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }
        let bubbles = self.visible_bubbles()?;
        Ok(bubbles.into_iter().rev().find(|bubble| {
            let dx = pointer.x - bubble.center.x;
            let dy = pointer.y - bubble.center.y;
            dx * dx + dy * dy <= bubble.radius_px() * bubble.radius_px()
        }))
    }
}
