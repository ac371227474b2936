//! Booking orchestration service.

use fitbook_core::error::{FitbookError, FitbookResult};
use fitbook_core::id;
use fitbook_core::models::booking::BookingSession;
use fitbook_core::models::duration::SessionDuration;
use fitbook_core::models::slot::TimeSlot;
use fitbook_core::repository::{
    BookingRepository, ClientRepository, SchedulingApi, TrainerRepository,
};
use tracing::info;

/// Orchestrates booking creation and lifecycle transitions.
///
/// Generic over its collaborators so the service layer has no
/// dependency on any storage implementation. The whole dependency
/// graph is injected at construction.
#[derive(Clone)]
pub struct BookingService<B, C, T, S> {
    bookings: B,
    clients: C,
    trainers: T,
    scheduling: S,
}

impl<B, C, T, S> BookingService<B, C, T, S>
where
    B: BookingRepository,
    C: ClientRepository,
    T: TrainerRepository,
    S: SchedulingApi,
{
    pub fn new(bookings: B, clients: C, trainers: T, scheduling: S) -> Self {
        Self {
            bookings,
            clients,
            trainers,
            scheduling,
        }
    }

    /// Create a new booking in `Pending`.
    ///
    /// Validates that both parties exist, that the external
    /// Scheduling Context reports the trainer available, and that the
    /// slot does not overlap any of the trainer's active
    /// (pending/confirmed) bookings. Cancelled and completed bookings
    /// never block a slot.
    pub async fn create_booking(
        &self,
        client_id: &str,
        trainer_id: &str,
        time_slot: TimeSlot,
        duration: SessionDuration,
    ) -> FitbookResult<BookingSession> {
        self.clients
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| FitbookError::NotFound {
                entity: "client".into(),
                id: client_id.to_string(),
            })?;

        self.trainers
            .find_by_id(trainer_id)
            .await?
            .ok_or_else(|| FitbookError::NotFound {
                entity: "trainer".into(),
                id: trainer_id.to_string(),
            })?;

        let available = self
            .scheduling
            .check_availability(trainer_id, &time_slot)
            .await?;
        if !available {
            return Err(FitbookError::TrainerUnavailable {
                trainer_id: trainer_id.to_string(),
            });
        }

        // Any single overlap with an active booking rejects the slot;
        // scan order is irrelevant.
        let existing = self.bookings.find_by_trainer_id(trainer_id).await?;
        for other in &existing {
            if other.is_active() && other.time_slot.overlaps_with(&time_slot) {
                return Err(FitbookError::SlotConflict {
                    booking_id: other.booking_id.clone(),
                });
            }
        }

        let booking = BookingSession::new(
            id::booking_id(),
            client_id.to_string(),
            trainer_id.to_string(),
            time_slot,
            duration,
        );
        info!(booking_id = %booking.booking_id, client_id, trainer_id, "booking created");
        self.bookings.save(booking).await
    }

    /// Confirm a pending booking on behalf of its trainer.
    pub async fn confirm_booking(
        &self,
        booking_id: &str,
        trainer_id: &str,
    ) -> FitbookResult<BookingSession> {
        let mut booking = self.fetch(booking_id).await?;
        booking.confirm(trainer_id)?;
        info!(booking_id, trainer_id, "booking confirmed");
        self.bookings.save(booking).await
    }

    /// Reject a pending booking on behalf of its trainer.
    pub async fn reject_booking(
        &self,
        booking_id: &str,
        trainer_id: &str,
        reason: &str,
    ) -> FitbookResult<BookingSession> {
        let mut booking = self.fetch(booking_id).await?;
        booking.reject(trainer_id, reason)?;
        info!(booking_id, trainer_id, "booking rejected");
        self.bookings.save(booking).await
    }

    /// Cancel a pending or confirmed booking.
    pub async fn cancel_booking(
        &self,
        booking_id: &str,
        user_id: &str,
        reason: &str,
    ) -> FitbookResult<BookingSession> {
        let mut booking = self.fetch(booking_id).await?;
        booking.cancel(user_id, reason)?;
        info!(booking_id, user_id, "booking cancelled");
        self.bookings.save(booking).await
    }

    /// Mark a confirmed booking as completed.
    pub async fn complete_booking(&self, booking_id: &str) -> FitbookResult<BookingSession> {
        let mut booking = self.fetch(booking_id).await?;
        booking.complete()?;
        info!(booking_id, "booking completed");
        self.bookings.save(booking).await
    }

    pub async fn get_booking(&self, booking_id: &str) -> FitbookResult<Option<BookingSession>> {
        self.bookings.find_by_id(booking_id).await
    }

    pub async fn get_all_bookings(&self) -> FitbookResult<Vec<BookingSession>> {
        self.bookings.find_all().await
    }

    pub async fn get_bookings_by_client(
        &self,
        client_id: &str,
    ) -> FitbookResult<Vec<BookingSession>> {
        self.bookings.find_by_client_id(client_id).await
    }

    pub async fn get_bookings_by_trainer(
        &self,
        trainer_id: &str,
    ) -> FitbookResult<Vec<BookingSession>> {
        self.bookings.find_by_trainer_id(trainer_id).await
    }

    async fn fetch(&self, booking_id: &str) -> FitbookResult<BookingSession> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| FitbookError::NotFound {
                entity: "booking".into(),
                id: booking_id.to_string(),
            })
    }
}
