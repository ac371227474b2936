//! HTTP route handlers.

pub mod auth;
pub mod bookings;
pub mod clients;
pub mod trainers;

use axum::Json;
use serde_json::{Value, json};

/// Service info.
pub async fn root() -> Json<Value> {
    Json(json!({
        "service": "fitbook",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": {
            "auth": ["/auth/register", "/auth/login", "/auth/me"],
            "bookings": "/bookings",
            "clients": "/clients",
            "trainers": "/trainers",
        },
    }))
}

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "fitbook" }))
}
