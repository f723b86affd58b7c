use serde::{Deserialize, Serialize};

use crate::error::{RoadmapError, RoadmapResult};

/// Track orientation of a brush.
///
/// Vertical brushes grow bottom-up, so pointer deltas invert: moving the
/// pointer up (smaller pixel Y) increases the start percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushAxis {
    Horizontal,
    Vertical,
}

/// Which part of the brush window the pointer grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushDragMode {
    /// Drag the whole window; the span is preserved.
    MoveWindow,
    /// Drag the leading handle; the trailing edge stays fixed.
    ResizeStart,
    /// Drag the trailing handle; the leading edge stays fixed.
    ResizeEnd,
}

/// Brush window as percentages of the track: `(start, span)`.
///
/// Invariants: `start >= 0`, `span >= 1` and `start + span <= 100`. The one
/// percent span floor keeps the window grabbable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSpan {
    start_percent: f64,
    span_percent: f64,
}

impl BrushSpan {
    pub fn new(start_percent: f64, span_percent: f64) -> RoadmapResult<Self> {
        if !start_percent.is_finite() || !span_percent.is_finite() {
            return Err(RoadmapError::InvalidData(
                "brush percentages must be finite".to_owned(),
            ));
        }
        if start_percent < 0.0 || span_percent < 1.0 || start_percent + span_percent > 100.0 {
            return Err(RoadmapError::InvalidData(format!(
                "brush span (start {start_percent}, span {span_percent}) must satisfy start >= 0, span >= 1, start + span <= 100"
            )));
        }

        Ok(Self {
            start_percent,
            span_percent,
        })
    }

    /// The full track: `(0, 100)`.
    #[must_use]
    pub fn full() -> Self {
        Self {
            start_percent: 0.0,
            span_percent: 100.0,
        }
    }

    #[must_use]
    pub fn start_percent(self) -> f64 {
        self.start_percent
    }

    #[must_use]
    pub fn span_percent(self) -> f64 {
        self.span_percent
    }

    #[must_use]
    pub fn end_percent(self) -> f64 {
        self.start_percent + self.span_percent
    }
}

/// Session data for an in-flight brush drag.
///
/// The start pointer position and the window at arm time stay fixed for the
/// whole gesture; every move recomputes the window from scratch against
/// them, so out-of-track pointer excursions cannot accumulate error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushDrag {
    axis: BrushAxis,
    mode: BrushDragMode,
    pointer_start_px: f64,
    initial: BrushSpan,
}

impl BrushDrag {
    pub fn begin(
        axis: BrushAxis,
        mode: BrushDragMode,
        pointer_px: f64,
        current: BrushSpan,
    ) -> RoadmapResult<Self> {
        if !pointer_px.is_finite() {
            return Err(RoadmapError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }

        Ok(Self {
            axis,
            mode,
            pointer_start_px: pointer_px,
            initial: current,
        })
    }

    #[must_use]
    pub fn mode(self) -> BrushDragMode {
        self.mode
    }

    /// Window for the current pointer position along the track.
    pub fn span_at(self, pointer_px: f64, track_length_px: f64) -> RoadmapResult<BrushSpan> {
        if !pointer_px.is_finite() {
            return Err(RoadmapError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        if !track_length_px.is_finite() || track_length_px <= 0.0 {
            return Err(RoadmapError::InvalidData(
                "track length must be finite and > 0".to_owned(),
            ));
        }

        let delta_px = match self.axis {
            BrushAxis::Horizontal => pointer_px - self.pointer_start_px,
            BrushAxis::Vertical => self.pointer_start_px - pointer_px,
        };
        let delta_percent = delta_px / track_length_px * 100.0;

        let initial_start = self.initial.start_percent();
        let initial_span = self.initial.span_percent();

        match self.mode {
            BrushDragMode::MoveWindow => {
                let start = (initial_start + delta_percent).clamp(0.0, 100.0 - initial_span);
                BrushSpan::new(start, initial_span)
            }
            BrushDragMode::ResizeStart => {
                let max_start = initial_start + initial_span - 1.0;
                let start = (initial_start + delta_percent).clamp(0.0, max_start);
                // At start == max_start the difference can round a hair below 1.
                let span = ((initial_start + initial_span) - start).max(1.0);
                BrushSpan::new(start, span)
            }
            BrushDragMode::ResizeEnd => {
                let span = (initial_span + delta_percent).clamp(1.0, 100.0 - initial_start);
                BrushSpan::new(initial_start, span)
            }
        }
    }
}
