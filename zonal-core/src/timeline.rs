//! Mapping from a normalized slider position to a calendar date.

use chrono::{Duration, Local, NaiveDate};

/// A fixed date range the slider scrubs across.
///
/// The end is captured once at construction; with
/// [`Timeline::through_today`] that is "now" truncated to day granularity,
/// so every position maps to the same date for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    start: NaiveDate,
    end: NaiveDate,
}

impl Timeline {
    /// A timeline over `[start, end]`. An end before the start collapses the
    /// range to the single day `start`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// A timeline from `start` through the current local date.
    #[must_use]
    pub fn through_today(start: NaiveDate) -> Self {
        Self::new(start, Local::now().date_naive())
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Map a slider position in [0, 100] linearly onto the range, rounded to
    /// whole days. Positions outside the range (or non-finite) clamp.
    #[must_use]
    pub fn instant_at(&self, percent: f64) -> NaiveDate {
        let clamped = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let span = (self.end - self.start).num_days();
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let offset = ((clamped / 100.0) * span as f64).round() as i64;
        self.start + Duration::days(offset)
    }
}
