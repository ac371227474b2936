//! Session duration value object.

use serde::{Deserialize, Serialize};

use crate::error::FitbookError;

/// Shortest bookable session, in minutes.
pub const MIN_SESSION_MINUTES: u32 = 30;
/// Longest bookable session, in minutes.
pub const MAX_SESSION_MINUTES: u32 = 120;

/// Length of a training session in minutes, bounded to 30–120.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDuration")]
pub struct SessionDuration {
    minutes: u32,
}

#[derive(Debug, Deserialize)]
struct RawDuration {
    minutes: u32,
}

impl TryFrom<RawDuration> for SessionDuration {
    type Error = FitbookError;

    fn try_from(raw: RawDuration) -> Result<Self, Self::Error> {
        Self::new(raw.minutes)
    }
}

impl SessionDuration {
    /// Build a duration, rejecting values outside 30–120 minutes.
    pub fn new(minutes: u32) -> Result<Self, FitbookError> {
        if !(MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES).contains(&minutes) {
            return Err(FitbookError::Validation {
                message: format!(
                    "session duration must be between {MIN_SESSION_MINUTES} and \
                     {MAX_SESSION_MINUTES} minutes, got {minutes}"
                ),
            });
        }
        Ok(Self { minutes })
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}
