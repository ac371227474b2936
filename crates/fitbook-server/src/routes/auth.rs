//! Authentication routes: register, login, current-user info.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use fitbook_auth::RegisterInput;
use fitbook_core::models::user::{User, UserRole};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    email: String,
    password: String,
    #[serde(default = "default_role")]
    role: UserRole,
}

fn default_role() -> UserRole {
    UserRole::Client
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct TokenResponse {
    access_token: String,
    token_type: &'static str,
    expires_in: u64,
    user_id: String,
    email: String,
    role: UserRole,
}

#[derive(Debug, Serialize)]
struct UserResponse {
    user_id: String,
    email: String,
    role: UserRole,
    is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
        }
    }
}

async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .auth
        .register(RegisterInput {
            email: req.email,
            password: req.password,
            role: req.role,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let output = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(TokenResponse {
        access_token: output.access_token,
        token_type: "bearer",
        expires_in: output.expires_in,
        user_id: output.user.user_id,
        email: output.user.email,
        role: output.user.role,
    }))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}
