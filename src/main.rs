//! stagelink server entry point.
//!
//! Starts the Axum HTTP server with the WebSocket session endpoint and
//! the REST snapshot surface.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use stagelink::api;
use stagelink::app_state::AppState;
use stagelink::config::StagelinkConfig;
use stagelink::service::SessionHub;
use stagelink::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = StagelinkConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting stagelink");

    // Spawn the hub task that owns all session state
    let hub = SessionHub::spawn(config.hub_queue_capacity);

    // Build application state
    let app_state = AppState { hub };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
