//! Time slot value object.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::FitbookError;

/// A date-scoped start/end time range in a trainer's schedule.
///
/// Immutable once constructed; `end_time` is strictly after
/// `start_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSlot")]
pub struct TimeSlot {
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

/// Unvalidated wire shape; [`TimeSlot`] deserializes through this so
/// the range invariant holds for every constructed value.
#[derive(Debug, Deserialize)]
struct RawTimeSlot {
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = FitbookError;

    fn try_from(raw: RawTimeSlot) -> Result<Self, Self::Error> {
        Self::new(raw.date, raw.start_time, raw.end_time)
    }
}

impl TimeSlot {
    /// Build a slot, rejecting `end_time <= start_time`.
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, FitbookError> {
        if end_time <= start_time {
            return Err(FitbookError::Validation {
                message: "end_time must be after start_time".into(),
            });
        }
        Ok(Self {
            date,
            start_time,
            end_time,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Whether two slots collide on the calendar.
    ///
    /// Slots on different dates never overlap. On the same date the
    /// intervals are treated as open: a slot ending exactly when the
    /// other starts is compatible.
    pub fn overlaps_with(&self, other: &TimeSlot) -> bool {
        if self.date != other.date {
            return false;
        }
        self.start_time < other.end_time && self.end_time > other.start_time
    }
}
