use crate::core::{CalendarGrid, ValueAxis, Viewport};
use crate::error::RoadmapResult;
use crate::io::fields::format_number;
use crate::render::Renderer;

use super::RoadmapEngine;

pub(super) const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One axis label with its position along the owning axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub position_px: f64,
}

/// Month labels centred in their grid slots.
pub(super) fn month_axis_labels(
    grid: CalendarGrid,
    viewport: Viewport,
) -> RoadmapResult<Vec<AxisLabel>> {
    let mut labels = Vec::with_capacity(MONTH_LABELS.len());
    for (month_index, text) in MONTH_LABELS.iter().enumerate() {
        labels.push(AxisLabel {
            text: (*text).to_owned(),
            position_px: grid.slot_center_x(month_index as u32, viewport)?,
        });
    }
    Ok(labels)
}

/// Evenly spaced value ticks with top-origin pixel positions.
pub(super) fn value_axis_labels(
    axis: ValueAxis,
    viewport: Viewport,
    tick_count: usize,
) -> RoadmapResult<Vec<AxisLabel>> {
    let ticks = axis.ticks(tick_count)?;
    let mut labels = Vec::with_capacity(ticks.len());
    for value in ticks {
        labels.push(AxisLabel {
            text: format_number(value),
            position_px: axis.value_to_pixel(value, viewport)?,
        });
    }
    Ok(labels)
}

impl<R: Renderer> RoadmapEngine<R> {
    /// Month labels along the timeline axis, in calendar order.
    pub fn timeline_axis_labels(&self) -> RoadmapResult<Vec<AxisLabel>> {
        month_axis_labels(self.core.model.calendar_grid, self.core.model.viewport)
    }

    /// Value tick labels along the vertical axis, bottom tick first.
    pub fn value_axis_labels(&self) -> RoadmapResult<Vec<AxisLabel>> {
        value_axis_labels(
            self.core.model.value_axis,
            self.core.model.viewport,
            self.core.presentation.render_style.value_tick_count,
        )
    }
}
