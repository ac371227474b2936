//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fitbook_core::error::FitbookError;
use serde_json::json;

/// Wrapper turning a [`FitbookError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub FitbookError);

impl From<FitbookError> for ApiError {
    fn from(err: FitbookError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            FitbookError::NotFound { .. } => StatusCode::NOT_FOUND,
            FitbookError::Validation { .. } | FitbookError::InvalidState { .. } => {
                StatusCode::BAD_REQUEST
            }
            FitbookError::AlreadyExists { .. }
            | FitbookError::TrainerUnavailable { .. }
            | FitbookError::SlotConflict { .. } => StatusCode::CONFLICT,
            FitbookError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            FitbookError::AuthorizationDenied { .. } => StatusCode::FORBIDDEN,
            FitbookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "internal error");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
