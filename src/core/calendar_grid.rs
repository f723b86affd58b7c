use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::defaults::DEFAULT_GRID_YEAR;
use crate::core::types::Viewport;
use crate::error::{RoadmapError, RoadmapResult};

/// Month-slot calendar mapping over the grid width.
///
/// Each of the twelve months occupies exactly one twelfth of the width
/// regardless of its day count; the day of month contributes a fractional
/// offset inside the slot. Forward mapping uses the date's own year for
/// month lengths, so records from neighbouring years still land on their
/// month-of-year slot. The inverse builds dates in the configured `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub year: i32,
}

impl Default for CalendarGrid {
    fn default() -> Self {
        Self {
            year: DEFAULT_GRID_YEAR,
        }
    }
}

impl CalendarGrid {
    pub fn new(year: i32) -> RoadmapResult<Self> {
        let grid = Self { year };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(self) -> RoadmapResult<Self> {
        if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none() {
            return Err(RoadmapError::InvalidData(format!(
                "grid year {} is outside the supported calendar range",
                self.year
            )));
        }
        Ok(self)
    }

    /// Maps a date to a pixel X on the grid.
    pub fn date_to_pixel(self, date: NaiveDate, viewport: Viewport) -> RoadmapResult<f64> {
        check_viewport(viewport)?;

        let month_index = f64::from(date.month0());
        let day_count = f64::from(days_in_month(date.year(), date.month())?);
        let day_fraction = f64::from(date.day() - 1) / day_count;

        let normalized = (month_index + day_fraction) / 12.0;
        Ok(normalized * f64::from(viewport.width))
    }

    /// Inverse mapping used when a bubble drag completes.
    ///
    /// The pixel is clamped to the grid, the month index to `0..=11` and the
    /// day to the target month's day count, so month-length variation cannot
    /// produce an invalid date. The right grid edge resolves to December 31.
    pub fn pixel_to_date(self, pixel_x: f64, viewport: Viewport) -> RoadmapResult<NaiveDate> {
        self.validate()?;
        check_viewport(viewport)?;
        if !pixel_x.is_finite() {
            return Err(RoadmapError::InvalidData("pixel must be finite".to_owned()));
        }

        let width = f64::from(viewport.width);
        let normalized = pixel_x.clamp(0.0, width) / width;
        let total_months = normalized * 12.0;

        let month_index = (total_months.floor() as u32).min(11);
        let day_fraction = total_months - f64::from(month_index);
        let month = month_index + 1;

        let day_count = days_in_month(self.year, month)?;
        // The forward mapping encodes day `d` as fraction (d - 1) / day_count.
        let day = ((day_fraction * f64::from(day_count)).round() as u32 + 1).min(day_count);

        NaiveDate::from_ymd_opt(self.year, month, day).ok_or_else(|| {
            RoadmapError::InvalidData(format!(
                "mapped date {}-{month:02}-{day:02} is not a valid calendar date",
                self.year
            ))
        })
    }

    /// Returns the pixel X where a month slot begins (`month_index` 0..=11).
    pub fn slot_start_x(self, month_index: u32, viewport: Viewport) -> RoadmapResult<f64> {
        check_viewport(viewport)?;
        if month_index > 11 {
            return Err(RoadmapError::InvalidData(format!(
                "month index {month_index} must be 0..=11"
            )));
        }

        Ok(f64::from(month_index) / 12.0 * f64::from(viewport.width))
    }

    /// Returns the pixel X at the centre of a month slot (`month_index` 0..=11).
    pub fn slot_center_x(self, month_index: u32, viewport: Viewport) -> RoadmapResult<f64> {
        check_viewport(viewport)?;
        if month_index > 11 {
            return Err(RoadmapError::InvalidData(format!(
                "month index {month_index} must be 0..=11"
            )));
        }

        Ok((f64::from(month_index) + 0.5) / 12.0 * f64::from(viewport.width))
    }
}

/// Day count of a calendar month, leap-year aware.
pub fn days_in_month(year: i32, month: u32) -> RoadmapResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        RoadmapError::InvalidData(format!("invalid calendar month: {year}-{month:02}"))
    })?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| {
        RoadmapError::InvalidData(format!("invalid calendar month: {year}-{month:02}"))
    })?;

    Ok(next.signed_duration_since(first).num_days() as u32)
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
