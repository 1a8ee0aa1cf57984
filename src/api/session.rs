//! Session snapshot endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::SessionSnapshot;
use crate::error::HubError;

/// `GET /api/v1/session` — Current session snapshot.
///
/// Projects the hub state at the moment the request is handled: registered
/// participant count, raised hands in raise order, the round flag, and all
/// active broadcasts. Useful for moderator catch-up and operational
/// dashboards; never cached.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    tag = "Session",
    summary = "Current session snapshot",
    description = "Returns the derived session state: participant count, raised hands, \
                   question round flag, and active broadcasts.",
    responses(
        (status = 200, description = "Consistent session snapshot", body = SessionSnapshot),
        (status = 503, description = "Hub task is not running"),
    )
)]
pub async fn session_handler(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, HubError> {
    let snapshot = state.hub.snapshot().await?;
    Ok(Json(snapshot))
}

/// Session routes mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/session", get(session_handler))
}
