//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. An absent entity is `None`,
//! never an error; the service layer decides whether absence is a
//! `NotFound` failure.

use crate::error::FitbookResult;
use crate::models::booking::BookingSession;
use crate::models::client::Client;
use crate::models::slot::TimeSlot;
use crate::models::trainer::Trainer;
use crate::models::user::User;

// ---------------------------------------------------------------------------
// Booking storage
// ---------------------------------------------------------------------------

pub trait BookingRepository: Send + Sync {
    /// Insert or replace a booking, keyed by its booking id.
    fn save(
        &self,
        booking: BookingSession,
    ) -> impl Future<Output = FitbookResult<BookingSession>> + Send;

    fn find_by_id(
        &self,
        booking_id: &str,
    ) -> impl Future<Output = FitbookResult<Option<BookingSession>>> + Send;

    fn find_all(&self) -> impl Future<Output = FitbookResult<Vec<BookingSession>>> + Send;

    fn find_by_client_id(
        &self,
        client_id: &str,
    ) -> impl Future<Output = FitbookResult<Vec<BookingSession>>> + Send;

    fn find_by_trainer_id(
        &self,
        trainer_id: &str,
    ) -> impl Future<Output = FitbookResult<Vec<BookingSession>>> + Send;

    /// Remove a booking. Returns whether anything was deleted.
    fn delete(&self, booking_id: &str) -> impl Future<Output = FitbookResult<bool>> + Send;
}

// ---------------------------------------------------------------------------
// Profile storage
// ---------------------------------------------------------------------------

pub trait ClientRepository: Send + Sync {
    fn save(&self, client: Client) -> impl Future<Output = FitbookResult<Client>> + Send;

    fn find_by_id(
        &self,
        client_id: &str,
    ) -> impl Future<Output = FitbookResult<Option<Client>>> + Send;

    fn find_all(&self) -> impl Future<Output = FitbookResult<Vec<Client>>> + Send;
}

pub trait TrainerRepository: Send + Sync {
    fn save(&self, trainer: Trainer) -> impl Future<Output = FitbookResult<Trainer>> + Send;

    fn find_by_id(
        &self,
        trainer_id: &str,
    ) -> impl Future<Output = FitbookResult<Option<Trainer>>> + Send;

    fn find_all(&self) -> impl Future<Output = FitbookResult<Vec<Trainer>>> + Send;
}

// ---------------------------------------------------------------------------
// Authentication identities
// ---------------------------------------------------------------------------

pub trait UserRepository: Send + Sync {
    fn save(&self, user: User) -> impl Future<Output = FitbookResult<User>> + Send;

    fn find_by_id(&self, user_id: &str)
    -> impl Future<Output = FitbookResult<Option<User>>> + Send;

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = FitbookResult<Option<User>>> + Send;

    fn find_all(&self) -> impl Future<Output = FitbookResult<Vec<User>>> + Send;
}

// ---------------------------------------------------------------------------
// Scheduling Context (external availability oracle)
// ---------------------------------------------------------------------------

pub trait SchedulingApi: Send + Sync {
    /// Whether the trainer is free for the slot according to the
    /// external Scheduling Context.
    fn check_availability(
        &self,
        trainer_id: &str,
        slot: &TimeSlot,
    ) -> impl Future<Output = FitbookResult<bool>> + Send;
}
