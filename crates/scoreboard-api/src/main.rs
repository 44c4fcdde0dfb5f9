//! Scoreboard API server entry point.

use std::sync::Arc;

use scoreboard_api::config::ServerConfig;
use scoreboard_api::error::AppError;
use scoreboard_api::routes;
use scoreboard_api::state::AppState;
use scoreboard_core::clock::SystemClock;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Scoreboard API server");

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    // The store lives exactly as long as the server.
    let app_state = AppState::new(Arc::new(SystemClock));
    let app = routes::app(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Scoreboard API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::warn!("CTRL+C received, shutting down");
}
