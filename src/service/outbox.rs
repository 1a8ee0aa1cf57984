//! Fan-out notifier: the hub's only door to the transport layer.
//!
//! [`Outbox`] holds one outbound channel per live connection, tagged with
//! the connection's role. The hub addresses connections only through the
//! three delivery primitives here (`send_to`, `broadcast_to_moderators`,
//! `broadcast_to_all`); it never touches sockets. Membership follows the
//! connect/disconnect events, so group sends are always consistent with
//! the true connection set at the time of the push.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::{ConnectionId, OutboundEvent, Role};

/// Per-connection delivery channels, keyed by connection id.
///
/// Sends are fire-and-forget: a channel whose receiver has gone away is
/// skipped silently, because the corresponding disconnect event is already
/// on its way through the hub queue.
#[derive(Debug, Default)]
pub struct Outbox {
    connections: HashMap<ConnectionId, Member>,
}

#[derive(Debug)]
struct Member {
    role: Role,
    sender: mpsc::UnboundedSender<Arc<OutboundEvent>>,
}

impl Outbox {
    /// Creates an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection with its role and outbound channel.
    pub fn join(
        &mut self,
        conn_id: ConnectionId,
        role: Role,
        sender: mpsc::UnboundedSender<Arc<OutboundEvent>>,
    ) {
        self.connections.insert(conn_id, Member { role, sender });
    }

    /// Removes a connection. Idempotent.
    pub fn leave(&mut self, conn_id: ConnectionId) {
        self.connections.remove(&conn_id);
    }

    /// Returns the role of a connection, if it is still present.
    #[must_use]
    pub fn role_of(&self, conn_id: ConnectionId) -> Option<Role> {
        self.connections.get(&conn_id).map(|m| m.role)
    }

    /// Pushes an event to one connection. A no-op if the connection is
    /// gone or its channel is closed.
    pub fn send_to(&self, conn_id: ConnectionId, event: OutboundEvent) {
        if let Some(member) = self.connections.get(&conn_id) {
            let _ = member.sender.send(Arc::new(event));
        }
    }

    /// Pushes an event to every moderator connection.
    pub fn broadcast_to_moderators(&self, event: OutboundEvent) {
        let event = Arc::new(event);
        for member in self.connections.values() {
            if member.role.is_moderator() {
                let _ = member.sender.send(Arc::clone(&event));
            }
        }
    }

    /// Pushes an event to every connection regardless of role.
    pub fn broadcast_to_all(&self, event: OutboundEvent) {
        let event = Arc::new(event);
        for member in self.connections.values() {
            let _ = member.sender.send(Arc::clone(&event));
        }
    }

    /// Returns the number of live connections (any role).
    #[must_use]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Returns `true` when no connection is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
