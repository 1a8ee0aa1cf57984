//! Per-connection WebSocket read/write loop.
//!
//! Each accepted socket gets a fresh [`ConnectionId`] and an unbounded
//! outbound channel registered with the hub. The loop then multiplexes two
//! sources: text frames from the peer (parsed into [`InboundEvent`] and
//! queued to the hub) and pushes from the hub (serialized and written to
//! the socket). The connection itself holds no session state; the hub's
//! disconnect cleanup is triggered exactly once when the loop exits.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::domain::{ConnectionId, InboundEvent, Role};
use crate::service::HubHandle;

/// Runs the read/write loop for a single WebSocket connection.
pub async fn run_connection(socket: WebSocket, role: Role, hub: HubHandle) {
    let conn_id = ConnectionId::new();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel();

    if hub.connect(conn_id, role, out_tx).await.is_err() {
        tracing::warn!(%conn_id, "hub unavailable, dropping connection");
        return;
    }

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Incoming frame from the peer
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<InboundEvent>(&text) {
                            Ok(event) => {
                                if hub.inbound(conn_id, event).await.is_err() {
                                    break;
                                }
                            }
                            Err(err) => {
                                // Unrecognized shapes are ignored, not trusted.
                                tracing::debug!(%conn_id, %err, "ignoring malformed frame");
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(%conn_id, %err, "socket error");
                        break;
                    }
                    _ => {}
                }
            }
            // Push from the hub
            event = out_rx.recv() => {
                match event {
                    Some(event) => {
                        match serde_json::to_string(event.as_ref()) {
                            Ok(json) => {
                                if ws_tx.send(Message::text(json)).await.is_err() {
                                    break;
                                }
                            }
                            Err(err) => {
                                tracing::error!(%conn_id, %err, "outbound event failed to serialize");
                            }
                        }
                    }
                    None => break,
                }
            }
        }
    }

    // The only cancellation signal: triggers registry, hand, and broadcast
    // cleanup in one hub slot.
    let _ = hub.disconnect(conn_id).await;
    tracing::debug!(%conn_id, "ws connection closed");
}
