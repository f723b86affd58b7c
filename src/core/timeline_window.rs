use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RoadmapError, RoadmapResult};

/// An inclusive date window on the roadmap timeline.
///
/// The engine keeps two of these: the fixed global window spanning the grid
/// year and the visible window driven by the timeline brush. Percent
/// conversions interpolate over elapsed milliseconds and truncate back to
/// day granularity, matching the brush track's continuous handle positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimelineWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> RoadmapResult<Self> {
        if start > end {
            return Err(RoadmapError::InvalidData(format!(
                "timeline window start {start} must not be after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Builds the window covering one full calendar year.
    pub fn for_year(year: i32) -> RoadmapResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1);
        let end = NaiveDate::from_ymd_opt(year, 12, 31);
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(RoadmapError::InvalidData(format!(
                "year {year} is outside the supported calendar range"
            ))),
        }
    }

    #[must_use]
    pub fn start(self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.end
    }

    pub fn set(&mut self, start: NaiveDate, end: NaiveDate) -> RoadmapResult<()> {
        *self = Self::new(start, end)?;
        Ok(())
    }

    #[must_use]
    pub fn duration_ms(self) -> i64 {
        self.end
            .signed_duration_since(self.start)
            .num_milliseconds()
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Position of a date inside the window as a percentage of its duration.
    ///
    /// Dates outside the window produce values outside `0..=100`.
    pub fn percent_of(self, date: NaiveDate) -> RoadmapResult<f64> {
        let total = self.duration_ms();
        if total <= 0 {
            return Err(RoadmapError::InvalidData(
                "timeline window duration must be > 0 for percent conversions".to_owned(),
            ));
        }

        let offset = date.signed_duration_since(self.start).num_milliseconds();
        Ok(offset as f64 / total as f64 * 100.0)
    }

    /// Date at a percentage of the window duration, truncated to day granularity.
    pub fn date_at_percent(self, percent: f64) -> RoadmapResult<NaiveDate> {
        let total = self.duration_ms();
        if total <= 0 {
            return Err(RoadmapError::InvalidData(
                "timeline window duration must be > 0 for percent conversions".to_owned(),
            ));
        }
        if !percent.is_finite() {
            return Err(RoadmapError::InvalidData(
                "percent must be finite".to_owned(),
            ));
        }

        let clamped = percent.clamp(0.0, 100.0);
        let offset_ms = (total as f64 * clamped / 100.0).floor() as i64;
        let moment = self.start.and_time(chrono::NaiveTime::MIN) + Duration::milliseconds(offset_ms);
        Ok(moment.date())
    }

    /// Converts a brush span (start percent + span percent) into a sub-window.
    ///
    /// The end date derives from the exact start milliseconds before
    /// truncation, so back-to-back spans stay contiguous.
    pub fn window_for_span(self, start_percent: f64, span_percent: f64) -> RoadmapResult<Self> {
        let total = self.duration_ms();
        if total <= 0 {
            return Err(RoadmapError::InvalidData(
                "timeline window duration must be > 0 for percent conversions".to_owned(),
            ));
        }
        if !start_percent.is_finite() || !span_percent.is_finite() || span_percent < 0.0 {
            return Err(RoadmapError::InvalidData(
                "span percentages must be finite and span >= 0".to_owned(),
            ));
        }

        let start_clamped = start_percent.clamp(0.0, 100.0);
        let start_ms = total as f64 * start_clamped / 100.0;
        let end_ms = (start_ms + total as f64 * span_percent / 100.0).min(total as f64);

        let anchor = self.start.and_time(chrono::NaiveTime::MIN);
        let start = (anchor + Duration::milliseconds(start_ms.floor() as i64)).date();
        let end = (anchor + Duration::milliseconds(end_ms.floor() as i64)).date();
        Self::new(start, end)
    }
}
