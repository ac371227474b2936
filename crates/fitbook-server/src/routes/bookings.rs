//! Booking routes: creation, lifecycle actions, and lookups.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fitbook_core::error::FitbookError;
use fitbook_core::models::booking::{BookingSession, BookingStatus};
use fitbook_core::models::duration::SessionDuration;
use fitbook_core::models::slot::TimeSlot;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:booking_id", get(get_one))
        .route("/:booking_id/confirm", post(confirm))
        .route("/:booking_id/reject", post(reject))
        .route("/:booking_id/cancel", post(cancel))
        .route("/:booking_id/complete", post(complete))
        .route("/client/:client_id", get(list_by_client))
        .route("/trainer/:trainer_id", get(list_by_trainer))
}

#[derive(Debug, Serialize, Deserialize)]
struct TimeSlotDto {
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl TimeSlotDto {
    fn into_slot(self) -> Result<TimeSlot, FitbookError> {
        TimeSlot::new(self.date, self.start_time, self.end_time)
    }
}

impl From<&TimeSlot> for TimeSlotDto {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            date: slot.date(),
            start_time: slot.start_time(),
            end_time: slot.end_time(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateBookingRequest {
    client_id: String,
    trainer_id: String,
    time_slot: TimeSlotDto,
    duration_minutes: u32,
}

#[derive(Debug, Deserialize)]
struct ConfirmBookingRequest {
    trainer_id: String,
}

#[derive(Debug, Deserialize)]
struct RejectBookingRequest {
    trainer_id: String,
    reason: String,
}

#[derive(Debug, Deserialize)]
struct CancelBookingRequest {
    user_id: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct BookingResponse {
    booking_id: String,
    client_id: String,
    trainer_id: String,
    time_slot: TimeSlotDto,
    status: BookingStatus,
    duration_minutes: u32,
    booked_at: DateTime<Utc>,
    confirmed_at: Option<DateTime<Utc>>,
    cancellation_reason: Option<String>,
}

impl From<BookingSession> for BookingResponse {
    fn from(booking: BookingSession) -> Self {
        Self {
            booking_id: booking.booking_id,
            client_id: booking.client_id,
            trainer_id: booking.trainer_id,
            time_slot: TimeSlotDto::from(&booking.time_slot),
            status: booking.status,
            duration_minutes: booking.duration.minutes(),
            booked_at: booking.booked_at,
            confirmed_at: booking.confirmed_at,
            cancellation_reason: booking.cancellation_reason,
        }
    }
}

async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let slot = req.time_slot.into_slot()?;
    let duration = SessionDuration::new(req.duration_minutes)?;

    let booking = state
        .bookings
        .create_booking(&req.client_id, &req.trainer_id, slot, duration)
        .await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = state.bookings.get_all_bookings().await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

async fn get_one(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(booking_id): Path<String>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state
        .bookings
        .get_booking(&booking_id)
        .await?
        .ok_or(FitbookError::NotFound {
            entity: "booking".into(),
            id: booking_id,
        })?;
    Ok(Json(booking.into()))
}

async fn confirm(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(booking_id): Path<String>,
    Json(req): Json<ConfirmBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state
        .bookings
        .confirm_booking(&booking_id, &req.trainer_id)
        .await?;
    Ok(Json(booking.into()))
}

async fn reject(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(booking_id): Path<String>,
    Json(req): Json<RejectBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state
        .bookings
        .reject_booking(&booking_id, &req.trainer_id, &req.reason)
        .await?;
    Ok(Json(booking.into()))
}

async fn cancel(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(booking_id): Path<String>,
    Json(req): Json<CancelBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state
        .bookings
        .cancel_booking(&booking_id, &req.user_id, &req.reason)
        .await?;
    Ok(Json(booking.into()))
}

async fn complete(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(booking_id): Path<String>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state.bookings.complete_booking(&booking_id).await?;
    Ok(Json(booking.into()))
}

async fn list_by_client(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(client_id): Path<String>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = state.bookings.get_bookings_by_client(&client_id).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

async fn list_by_trainer(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(trainer_id): Path<String>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = state.bookings.get_bookings_by_trainer(&trainer_id).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}
