//! Booking session aggregate — the booking lifecycle state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FitbookError, FitbookResult};
use crate::models::duration::SessionDuration;
use crate::models::slot::TimeSlot;

/// Lifecycle status of a booking session.
///
/// `Pending → Confirmed → Completed`; `Pending`/`Confirmed` →
/// `Cancelled`. `Cancelled` and `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// One reserved training appointment between a client and a trainer.
///
/// References its parties by opaque identifier only; lookups go
/// through the repositories. All transitions validate the current
/// status first and leave the entity untouched on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSession {
    pub booking_id: String,
    pub client_id: String,
    pub trainer_id: String,
    pub time_slot: TimeSlot,
    pub duration: SessionDuration,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
}

impl BookingSession {
    /// New booking in `Pending` with the creation timestamp set to now.
    pub fn new(
        booking_id: String,
        client_id: String,
        trainer_id: String,
        time_slot: TimeSlot,
        duration: SessionDuration,
    ) -> Self {
        Self {
            booking_id,
            client_id,
            trainer_id,
            time_slot,
            duration,
            status: BookingStatus::Pending,
            booked_at: Utc::now(),
            confirmed_at: None,
            cancellation_reason: None,
        }
    }

    /// Confirm a pending booking. Only the booked trainer may confirm.
    pub fn confirm(&mut self, acting_trainer_id: &str) -> FitbookResult<()> {
        if acting_trainer_id != self.trainer_id {
            return Err(FitbookError::AuthorizationDenied {
                reason: "only the booked trainer may confirm".into(),
            });
        }
        if self.status != BookingStatus::Pending {
            return Err(FitbookError::InvalidState {
                message: format!("cannot confirm booking in status {:?}", self.status),
            });
        }
        self.status = BookingStatus::Confirmed;
        self.confirmed_at = Some(Utc::now());
        Ok(())
    }

    /// Reject a pending booking. Collapses into `Cancelled` with a
    /// `"Rejected by trainer: "` reason prefix; there is no separate
    /// rejected status.
    pub fn reject(&mut self, acting_trainer_id: &str, reason: &str) -> FitbookResult<()> {
        if acting_trainer_id != self.trainer_id {
            return Err(FitbookError::AuthorizationDenied {
                reason: "only the booked trainer may reject".into(),
            });
        }
        if self.status != BookingStatus::Pending {
            return Err(FitbookError::InvalidState {
                message: format!("cannot reject booking in status {:?}", self.status),
            });
        }
        self.status = BookingStatus::Cancelled;
        self.cancellation_reason = Some(format!("Rejected by trainer: {reason}"));
        Ok(())
    }

    /// Cancel a pending or confirmed booking.
    ///
    /// The acting user id is not checked against the booking's client
    /// or trainer; any identifier is accepted.
    pub fn cancel(&mut self, _acting_user_id: &str, reason: &str) -> FitbookResult<()> {
        match self.status {
            BookingStatus::Completed => Err(FitbookError::InvalidState {
                message: "completed booking cannot be cancelled".into(),
            }),
            BookingStatus::Cancelled => Err(FitbookError::InvalidState {
                message: "booking is already cancelled".into(),
            }),
            BookingStatus::Pending | BookingStatus::Confirmed => {
                self.status = BookingStatus::Cancelled;
                self.cancellation_reason = Some(reason.to_string());
                Ok(())
            }
        }
    }

    /// Mark a confirmed booking as completed.
    pub fn complete(&mut self) -> FitbookResult<()> {
        if self.status != BookingStatus::Confirmed {
            return Err(FitbookError::InvalidState {
                message: format!("cannot complete booking in status {:?}", self.status),
            });
        }
        self.status = BookingStatus::Completed;
        Ok(())
    }

    /// Whether this booking counts for conflict checks
    /// (`Pending` or `Confirmed`).
    pub fn is_active(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn test_booking() -> BookingSession {
        let slot = TimeSlot::new(
            NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap();
        BookingSession::new(
            "BK1".into(),
            "CL1".into(),
            "TR1".into(),
            slot,
            SessionDuration::new(60).unwrap(),
        )
    }

    #[test]
    fn new_booking_is_pending() {
        let booking = test_booking();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.confirmed_at.is_none());
        assert!(booking.cancellation_reason.is_none());
        assert!(booking.is_active());
    }

    #[test]
    fn confirm_by_booked_trainer() {
        let mut booking = test_booking();
        booking.confirm("TR1").unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(booking.confirmed_at.is_some());
    }

    #[test]
    fn confirm_by_other_trainer_denied() {
        let mut booking = test_booking();
        let err = booking.confirm("TR2").unwrap_err();
        assert!(matches!(err, FitbookError::AuthorizationDenied { .. }));
        // Entity unchanged.
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.confirmed_at.is_none());
    }

    #[test]
    fn confirm_twice_fails_without_touching_timestamp() {
        let mut booking = test_booking();
        booking.confirm("TR1").unwrap();
        let first_confirmed_at = booking.confirmed_at;

        let err = booking.confirm("TR1").unwrap_err();
        assert!(matches!(err, FitbookError::InvalidState { .. }));
        assert_eq!(booking.confirmed_at, first_confirmed_at);
    }

    #[test]
    fn reject_sets_prefixed_reason() {
        let mut booking = test_booking();
        booking.reject("TR1", "fully booked that day").unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert_eq!(
            booking.cancellation_reason.as_deref(),
            Some("Rejected by trainer: fully booked that day")
        );
    }

    #[test]
    fn reject_by_other_trainer_denied() {
        let mut booking = test_booking();
        let err = booking.reject("TR9", "nope").unwrap_err();
        assert!(matches!(err, FitbookError::AuthorizationDenied { .. }));
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn reject_only_legal_from_pending() {
        let mut booking = test_booking();
        booking.confirm("TR1").unwrap();
        let err = booking.reject("TR1", "too late").unwrap_err();
        assert!(matches!(err, FitbookError::InvalidState { .. }));
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn cancel_pending_booking() {
        let mut booking = test_booking();
        booking.cancel("CL1", "schedule change").unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert_eq!(
            booking.cancellation_reason.as_deref(),
            Some("schedule change")
        );
        assert!(!booking.is_active());
    }

    #[test]
    fn cancel_confirmed_booking() {
        let mut booking = test_booking();
        booking.confirm("TR1").unwrap();
        booking.cancel("TR1", "trainer ill").unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);
    }

    // Current behavior: cancel accepts any acting user id, even one
    // unrelated to the booking. See DESIGN.md.
    #[test]
    fn cancel_accepts_unrelated_user_id() {
        let mut booking = test_booking();
        booking.cancel("SOMEBODY-ELSE", "why not").unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);
    }

    #[test]
    fn cancel_completed_fails() {
        let mut booking = test_booking();
        booking.confirm("TR1").unwrap();
        booking.complete().unwrap();
        let err = booking.cancel("CL1", "too late").unwrap_err();
        assert!(matches!(err, FitbookError::InvalidState { .. }));
        assert_eq!(booking.status, BookingStatus::Completed);
    }

    #[test]
    fn cancel_twice_fails() {
        let mut booking = test_booking();
        booking.cancel("CL1", "first").unwrap();
        let err = booking.cancel("CL1", "second").unwrap_err();
        assert!(matches!(err, FitbookError::InvalidState { .. }));
        // Reason from the first cancellation survives.
        assert_eq!(booking.cancellation_reason.as_deref(), Some("first"));
    }

    #[test]
    fn complete_requires_confirmed() {
        let mut booking = test_booking();
        let err = booking.complete().unwrap_err();
        assert!(matches!(err, FitbookError::InvalidState { .. }));
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn completed_is_terminal() {
        let mut booking = test_booking();
        booking.confirm("TR1").unwrap();
        booking.complete().unwrap();

        assert!(booking.confirm("TR1").is_err());
        assert!(booking.reject("TR1", "r").is_err());
        assert!(booking.cancel("CL1", "r").is_err());
        assert!(booking.complete().is_err());
        assert_eq!(booking.status, BookingStatus::Completed);
    }

    #[test]
    fn cancelled_is_terminal() {
        let mut booking = test_booking();
        booking.cancel("CL1", "r").unwrap();

        assert!(booking.confirm("TR1").is_err());
        assert!(booking.reject("TR1", "r").is_err());
        assert!(booking.complete().is_err());
        assert_eq!(booking.status, BookingStatus::Cancelled);
    }

    #[test]
    fn status_serializes_upper_case() {
        let json = serde_json::to_string(&BookingStatus::Pending).unwrap();
        assert_eq!(json, r#""PENDING""#);
    }
}
