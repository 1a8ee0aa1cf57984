//! REST API layer: read-only session visibility and health.
//!
//! All session mutations flow through the WebSocket path; the REST
//! surface only exposes the derived snapshot (moderator catch-up, ops
//! dashboards) under `/api/v1`, plus the root-level health check.

pub mod session;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", session::routes())
        .merge(system::routes())
}
