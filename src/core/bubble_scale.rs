use serde::{Deserialize, Serialize};

use crate::error::{RoadmapError, RoadmapResult};

/// Complexity-to-diameter mapping for roadmap bubbles.
///
/// Diameter grows linearly from `min_diameter_px` at complexity `0` to
/// `max_diameter_px` at `complexity_range`; inputs outside the range clamp to
/// the nearest endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleScale {
    pub min_diameter_px: f64,
    pub max_diameter_px: f64,
    pub complexity_range: f64,
}

impl Default for BubbleScale {
    fn default() -> Self {
        Self {
            min_diameter_px: 40.0,
            max_diameter_px: 120.0,
            complexity_range: 500.0,
        }
    }
}

impl BubbleScale {
    pub fn validate(self) -> RoadmapResult<Self> {
        if !self.min_diameter_px.is_finite()
            || !self.max_diameter_px.is_finite()
            || self.min_diameter_px <= 0.0
            || self.max_diameter_px <= self.min_diameter_px
        {
            return Err(RoadmapError::InvalidData(
                "bubble diameter bounds must be finite and max > min > 0".to_owned(),
            ));
        }

        if !self.complexity_range.is_finite() || self.complexity_range <= 0.0 {
            return Err(RoadmapError::InvalidData(
                "bubble complexity range must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }

    /// Maps complexity to bubble diameter in pixels.
    pub fn diameter_for(self, complexity: f64) -> RoadmapResult<f64> {
        self.validate()?;
        if !complexity.is_finite() {
            return Err(RoadmapError::InvalidData(
                "complexity must be finite".to_owned(),
            ));
        }

        let ratio = (complexity / self.complexity_range).clamp(0.0, 1.0);
        Ok(self.min_diameter_px + ratio * (self.max_diameter_px - self.min_diameter_px))
    }

    /// Inverse mapping used when a bubble resize gesture completes.
    ///
    /// The returned complexity is rounded to a whole unit, matching the
    /// integral values users type into the edit form.
    pub fn complexity_for(self, diameter_px: f64) -> RoadmapResult<f64> {
        self.validate()?;
        if !diameter_px.is_finite() {
            return Err(RoadmapError::InvalidData(
                "diameter must be finite".to_owned(),
            ));
        }

        let clamped = diameter_px.clamp(self.min_diameter_px, self.max_diameter_px);
        let ratio = (clamped - self.min_diameter_px) / (self.max_diameter_px - self.min_diameter_px);
        Ok((ratio * self.complexity_range).round())
    }
}
