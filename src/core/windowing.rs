use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::project::Project;
use crate::core::timeline_window::TimelineWindow;
use crate::error::{RoadmapError, RoadmapResult};

/// Inclusive business-value window driven by the value brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueWindow {
    min: f64,
    max: f64,
}

impl ValueWindow {
    pub fn new(min: f64, max: f64) -> RoadmapResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(RoadmapError::InvalidData(
                "value window bounds must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Builds the full window covering `0..=axis_range`.
    pub fn for_axis_range(axis_range: f64) -> RoadmapResult<Self> {
        Self::new(0.0, axis_range)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    pub fn set(&mut self, min: f64, max: f64) -> RoadmapResult<()> {
        *self = Self::new(min, max)?;
        Ok(())
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Position of a value inside the window as a percentage of its span.
    pub fn percent_of(self, value: f64) -> RoadmapResult<f64> {
        if self.span() <= 0.0 {
            return Err(RoadmapError::InvalidData(
                "value window span must be > 0 for percent conversions".to_owned(),
            ));
        }
        if !value.is_finite() {
            return Err(RoadmapError::InvalidData("value must be finite".to_owned()));
        }

        Ok((value - self.min) / self.span() * 100.0)
    }

    /// Converts a brush span into a rounded sub-window.
    ///
    /// The top bound derives from the unrounded bottom, matching the brush
    /// emit math, and both bounds round to whole values.
    pub fn window_for_span(self, start_percent: f64, span_percent: f64) -> RoadmapResult<Self> {
        if self.span() <= 0.0 {
            return Err(RoadmapError::InvalidData(
                "value window span must be > 0 for percent conversions".to_owned(),
            ));
        }
        if !start_percent.is_finite() || !span_percent.is_finite() || span_percent < 0.0 {
            return Err(RoadmapError::InvalidData(
                "span percentages must be finite and span >= 0".to_owned(),
            ));
        }

        let bottom = self.min + self.span() * start_percent.clamp(0.0, 100.0) / 100.0;
        let top = (bottom + self.span() * span_percent / 100.0).min(self.max);
        Self::new(bottom.round(), top.round())
    }
}

/// Records whose start date falls inside the visible timeline window.
#[must_use]
pub fn projects_in_window(projects: &[Project], window: TimelineWindow) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| window.contains(project.start_date))
        .cloned()
        .collect()
}

/// Records whose business value falls inside the visible value window.
#[must_use]
pub fn projects_in_value_window(projects: &[Project], window: ValueWindow) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| window.contains(project.value))
        .cloned()
        .collect()
}

/// Records whose service is visible. Services absent from the map are visible.
#[must_use]
pub fn projects_with_visible_service(
    projects: &[Project],
    visibility: &IndexMap<String, bool>,
) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| visibility.get(&project.service).copied().unwrap_or(true))
        .cloned()
        .collect()
}
