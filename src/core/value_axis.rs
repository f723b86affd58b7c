use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{RoadmapError, RoadmapResult};

/// Vertical business-value axis mapped bottom-up onto the grid height.
///
/// The axis spans `0..=axis_range` while record values clamp to `value_max`;
/// the headroom above `value_max` keeps high-value bubbles clear of the top
/// edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub axis_range: f64,
    pub value_max: f64,
}

impl Default for ValueAxis {
    fn default() -> Self {
        Self {
            axis_range: 650.0,
            value_max: 500.0,
        }
    }
}

impl ValueAxis {
    pub fn validate(self) -> RoadmapResult<Self> {
        if !self.axis_range.is_finite() || self.axis_range <= 0.0 {
            return Err(RoadmapError::InvalidData(
                "value axis range must be finite and > 0".to_owned(),
            ));
        }

        if !self.value_max.is_finite() || self.value_max <= 0.0 || self.value_max > self.axis_range
        {
            return Err(RoadmapError::InvalidData(
                "value axis max must be finite and within the axis range".to_owned(),
            ));
        }

        Ok(self)
    }

    /// Maps a business value to a pixel offset measured from the grid bottom.
    pub fn bottom_offset_for(self, value: f64, viewport: Viewport) -> RoadmapResult<f64> {
        self.validate()?;
        check_viewport(viewport)?;
        if !value.is_finite() {
            return Err(RoadmapError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = value.clamp(0.0, self.axis_range) / self.axis_range;
        Ok(normalized * f64::from(viewport.height))
    }

    /// Inverse mapping used when a bubble drag completes.
    ///
    /// The offset is clamped to the grid, the result is rounded to a whole
    /// value and capped at `value_max`; a drop above the cap's pixel line
    /// therefore lands exactly on `value_max`.
    pub fn value_for_bottom_offset(self, offset_px: f64, viewport: Viewport) -> RoadmapResult<f64> {
        self.validate()?;
        check_viewport(viewport)?;
        if !offset_px.is_finite() {
            return Err(RoadmapError::InvalidData(
                "offset must be finite".to_owned(),
            ));
        }

        let height = f64::from(viewport.height);
        let normalized = offset_px.clamp(0.0, height) / height;
        Ok((normalized * self.axis_range).round().min(self.value_max))
    }

    /// Maps a business value to a top-origin pixel Y (render coordinate space).
    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> RoadmapResult<f64> {
        let offset = self.bottom_offset_for(value, viewport)?;
        Ok(f64::from(viewport.height) - offset)
    }

    /// Maps a top-origin pixel Y back to a rounded, capped business value.
    pub fn pixel_to_value(self, pixel_y: f64, viewport: Viewport) -> RoadmapResult<f64> {
        check_viewport(viewport)?;
        if !pixel_y.is_finite() {
            return Err(RoadmapError::InvalidData("pixel must be finite".to_owned()));
        }

        self.value_for_bottom_offset(f64::from(viewport.height) - pixel_y, viewport)
    }

    /// Builds evenly spaced tick values from 0 to the axis range inclusive.
    pub fn ticks(self, tick_count: usize) -> RoadmapResult<Vec<f64>> {
        self.validate()?;
        if tick_count == 0 {
            return Ok(Vec::new());
        }
        if tick_count == 1 {
            return Ok(vec![0.0]);
        }

        let denominator = (tick_count - 1) as f64;
        let mut ticks = Vec::with_capacity(tick_count);
        for index in 0..tick_count {
            let ratio = (index as f64) / denominator;
            ticks.push(self.axis_range * ratio);
        }
        Ok(ticks)
    }
}

fn check_viewport(viewport: Viewport) -> RoadmapResult<()> {
    if !viewport.is_valid() {
        return Err(RoadmapError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
