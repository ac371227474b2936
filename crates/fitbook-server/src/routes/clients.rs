//! Client profile routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use fitbook_core::error::FitbookError;
use fitbook_core::models::client::{Client, CreateClient};

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:client_id", get(get_one))
}

async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<CreateClient>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let client = state.clients.create_client(req).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<Client>>, ApiError> {
    Ok(Json(state.clients.get_all_clients().await?))
}

async fn get_one(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(client_id): Path<String>,
) -> Result<Json<Client>, ApiError> {
    let client = state
        .clients
        .get_client(&client_id)
        .await?
        .ok_or(FitbookError::NotFound {
            entity: "client".into(),
            id: client_id,
        })?;
    Ok(Json(client))
}
