//! Axum WebSocket upgrade handler.

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use super::connection::run_connection;
use crate::app_state::AppState;
use crate::domain::Role;

/// Query parameters accepted on the upgrade request.
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    /// Client type discriminator; `admin` joins the moderator group.
    #[serde(rename = "type")]
    pub client_type: Option<String>,
}

/// `GET /ws?type=admin|audience` — Upgrade HTTP connection to WebSocket.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let role = Role::from_query(query.client_type.as_deref());
    let hub = state.hub.clone();

    ws.on_upgrade(move |socket| run_connection(socket, role, hub))
}
