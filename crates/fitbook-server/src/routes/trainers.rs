//! Trainer profile routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use fitbook_core::error::FitbookError;
use fitbook_core::models::trainer::{CreateTrainer, Trainer};

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:trainer_id", get(get_one))
}

async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<CreateTrainer>,
) -> Result<(StatusCode, Json<Trainer>), ApiError> {
    let trainer = state.trainers.create_trainer(req).await?;
    Ok((StatusCode::CREATED, Json(trainer)))
}

async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<Trainer>>, ApiError> {
    Ok(Json(state.trainers.get_all_trainers().await?))
}

async fn get_one(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(trainer_id): Path<String>,
) -> Result<Json<Trainer>, ApiError> {
    let trainer = state
        .trainers
        .get_trainer(&trainer_id)
        .await?
        .ok_or(FitbookError::NotFound {
            entity: "trainer".into(),
            id: trainer_id,
        })?;
    Ok(Json(trainer))
}
