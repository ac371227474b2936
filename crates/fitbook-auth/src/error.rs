//! Authentication error types.

use fitbook_core::error::FitbookError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account is inactive")]
    AccountInactive,

    #[error("email is already registered")]
    EmailTaken,

    #[error("password must be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for FitbookError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => FitbookError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::AccountInactive => FitbookError::AuthorizationDenied {
                reason: err.to_string(),
            },
            AuthError::EmailTaken => FitbookError::AlreadyExists {
                entity: "user".into(),
            },
            AuthError::WeakPassword { .. } => FitbookError::Validation {
                message: err.to_string(),
            },
            AuthError::Crypto(msg) => FitbookError::Internal(msg),
        }
    }
}
