//! Error types for the Fitbook system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitbookError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Authorization denied: {reason}")]
    AuthorizationDenied { reason: String },

    #[error("Invalid state transition: {message}")]
    InvalidState { message: String },

    #[error("Trainer {trainer_id} is not available for the requested slot")]
    TrainerUnavailable { trainer_id: String },

    #[error("Requested slot overlaps booking {booking_id}")]
    SlotConflict { booking_id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type FitbookResult<T> = Result<T, FitbookError>;
