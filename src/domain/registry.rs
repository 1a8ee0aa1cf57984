//! Registry of registered audience participants.
//!
//! [`ConnectionRegistry`] tracks presence only: which connections have
//! registered a seat. It owns no business logic beyond insert, lookup, and
//! removal. Unlike a shared map behind a lock, the registry is owned
//! exclusively by the hub task, so all access is plain `&mut self` — the
//! serialized event path is the concurrency discipline.

use std::collections::HashMap;

use super::connection_id::ConnectionId;
use super::participant::Participant;
use super::seat::SeatId;

/// Presence store for registered audience members, keyed by connection id.
///
/// Seat labels are not unique: several connections may register the same
/// seat. [`ConnectionRegistry::lookup_by_seat`] resolves such collisions to
/// the earliest registration, which keeps selection deterministic without
/// changing the reference semantics of first-match lookup.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    participants: HashMap<ConnectionId, Participant>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the participant for a connection. Never fails.
    pub fn register(&mut self, participant: Participant) {
        let conn_id = participant.connection_id;
        let seat = participant.seat.clone();
        let collision = self
            .participants
            .values()
            .any(|p| p.seat == seat && p.connection_id != conn_id);
        if collision {
            tracing::debug!(%seat, %conn_id, "seat already registered by another connection");
        }
        self.participants.insert(conn_id, participant);
    }

    /// Returns the participant for a connection, if registered.
    #[must_use]
    pub fn get(&self, conn_id: ConnectionId) -> Option<&Participant> {
        self.participants.get(&conn_id)
    }

    /// Resolves a seat label to a participant.
    ///
    /// O(n) scan over all registrations; fine at the expected scale of tens
    /// to low hundreds of connections. On seat collision the earliest
    /// registration wins.
    #[must_use]
    pub fn lookup_by_seat(&self, seat: &SeatId) -> Option<&Participant> {
        self.participants
            .values()
            .filter(|p| &p.seat == seat)
            .min_by_key(|p| p.registered_at)
    }

    /// Removes the participant for a connection, returning it if present.
    ///
    /// Idempotent: removing an unknown connection is a no-op.
    pub fn remove(&mut self, conn_id: ConnectionId) -> Option<Participant> {
        self.participants.remove(&conn_id)
    }

    /// Returns the number of registered participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Returns `true` if no participant is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
