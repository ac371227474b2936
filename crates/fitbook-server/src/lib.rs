//! Fitbook Server — HTTP API surface.
//!
//! Thin axum layer over the application services: request/response
//! DTOs, bearer-token authentication, and error-to-status mapping.
//! All domain decisions stay in `fitbook-booking` and `fitbook-auth`.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, build_state};

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .nest("/auth", routes::auth::router())
        .nest("/bookings", routes::bookings::router())
        .nest("/clients", routes::clients::router())
        .nest("/trainers", routes::trainers::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
