//! Request authentication extractor.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use fitbook_core::error::FitbookError;
use fitbook_core::models::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated user behind the request's bearer token.
///
/// Rejects with 401 when the header is missing or malformed, the
/// token fails verification, or the subject no longer resolves to an
/// active user.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

fn missing_token() -> ApiError {
    ApiError(FitbookError::AuthenticationFailed {
        reason: "missing or malformed Authorization header".into(),
    })
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(missing_token)?;

        let token = header.strip_prefix("Bearer ").ok_or_else(missing_token)?;

        let user = state.auth.authenticate(token).await?;
        Ok(Self(user))
    }
}
