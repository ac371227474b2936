//! Fitbook Server — application entry point.

use fitbook_auth::AuthConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let jwt_secret = std::env::var("FITBOOK_JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("FITBOOK_JWT_SECRET not set, using development secret");
        "fitbook-dev-secret-change-in-production".into()
    });

    let state = fitbook_server::build_state(AuthConfig {
        jwt_secret,
        ..AuthConfig::default()
    });
    let app = fitbook_server::app(state);

    let addr = std::env::var("FITBOOK_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Fitbook server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
