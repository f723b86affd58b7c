use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::types::CanvasPoint;
use crate::error::{RoadmapError, RoadmapResult};

/// Upper bound for implementation complexity. Values are clamped, not rejected.
pub const MAX_COMPLEXITY: f64 = 500.0;

/// Upper bound for business value. Values are clamped, not rejected.
pub const MAX_BUSINESS_VALUE: f64 = 500.0;

/// A single roadmap record.
///
/// `complexity` drives bubble diameter, `value` drives vertical placement and
/// `start_date` drives horizontal placement on the calendar grid. `position`
/// is a transient on-screen override used while a drag is in flight; it is
/// never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
    pub name: String,
    pub service: String,
    pub complexity: f64,
    pub value: f64,
    pub start_date: NaiveDate,
    #[serde(skip)]
    pub position: Option<CanvasPoint>,
}

impl Project {
    /// Creates a record with clamped complexity/value and no transient position.
    ///
    /// Id `0` is the creation sentinel: the store assigns the next free id on add.
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        service: impl Into<String>,
        complexity: f64,
        value: f64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            project_key: None,
            name: name.into(),
            service: service.into(),
            complexity: complexity.clamp(0.0, MAX_COMPLEXITY),
            value: value.clamp(0.0, MAX_BUSINESS_VALUE),
            start_date,
            position: None,
        }
    }

    #[must_use]
    pub fn with_project_key(mut self, project_key: impl Into<String>) -> Self {
        self.project_key = Some(project_key.into());
        self
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(CanvasPoint::new(x, y));
        self
    }

    /// Returns the record with complexity/value clamped into their limits.
    ///
    /// Records built through deserialization bypass `new`, so store mutations
    /// re-canonicalize before accepting them. Non-finite numbers cannot be
    /// clamped meaningfully and are rejected.
    pub fn canonicalized(mut self) -> RoadmapResult<Self> {
        if !self.complexity.is_finite() {
            return Err(RoadmapError::InvalidData(format!(
                "project {} complexity must be finite",
                self.id
            )));
        }
        if !self.value.is_finite() {
            return Err(RoadmapError::InvalidData(format!(
                "project {} value must be finite",
                self.id
            )));
        }
        if let Some(position) = self.position {
            if !position.is_finite() {
                return Err(RoadmapError::InvalidData(format!(
                    "project {} position must be finite",
                    self.id
                )));
            }
        }

        self.complexity = self.complexity.clamp(0.0, MAX_COMPLEXITY);
        self.value = self.value.clamp(0.0, MAX_BUSINESS_VALUE);
        Ok(self)
    }
}
