//! Broadcast lifecycle records.
//!
//! A broadcast tracks one selected participant's outbound media stream to
//! the moderator: `none → awaiting-media → live → none`. The `none` states
//! are the absence of a record — teardown deletes, it never soft-marks.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::connection_id::ConnectionId;
use super::seat::SeatId;

/// Media status of a broadcast record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BroadcastStatus {
    /// Selected, waiting for the participant's first offer.
    AwaitingMedia,
    /// Offer received; media negotiation under way or established.
    Live,
}

/// One broadcast record, keyed by seat in the [`BroadcastTable`].
#[derive(Debug, Clone)]
pub struct Broadcast {
    /// Seat of the selected participant.
    pub seat: SeatId,
    /// Connection bound to this broadcast at selection time.
    pub connection_id: ConnectionId,
    /// Current media status.
    pub status: BroadcastStatus,
    /// When the participant was selected.
    pub created_at: DateTime<Utc>,
    /// Last-known offer payload, kept verbatim for moderator catch-up.
    pub offer: Option<Value>,
}

impl Broadcast {
    /// Creates an `awaiting-media` record bound to a connection.
    #[must_use]
    pub fn new(seat: SeatId, connection_id: ConnectionId) -> Self {
        Self {
            seat,
            connection_id,
            status: BroadcastStatus::AwaitingMedia,
            created_at: Utc::now(),
            offer: None,
        }
    }
}

/// Serializable view of a broadcast for moderator pushes and snapshots.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastSummary {
    /// Seat of the selected participant.
    pub seat: SeatId,
    /// Current media status.
    pub status: BroadcastStatus,
    /// When the participant was selected.
    pub created_at: DateTime<Utc>,
    /// Last-known offer payload, if one has arrived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<Value>,
}

impl From<&Broadcast> for BroadcastSummary {
    fn from(b: &Broadcast) -> Self {
        Self {
            seat: b.seat.clone(),
            status: b.status,
            created_at: b.created_at,
            offer: b.offer.clone(),
        }
    }
}

/// All active broadcast records, keyed by seat.
///
/// At most one record exists per seat. Selecting an already-broadcasting
/// seat overwrites the record (last-selection-wins); there is no queue of
/// pending broadcasts.
#[derive(Debug, Default)]
pub struct BroadcastTable {
    broadcasts: HashMap<SeatId, Broadcast>,
}

impl BroadcastTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an `awaiting-media` broadcast for a seat, replacing any
    /// record already held for that seat.
    pub fn start(&mut self, seat: SeatId, connection_id: ConnectionId) {
        let broadcast = Broadcast::new(seat.clone(), connection_id);
        if self.broadcasts.insert(seat, broadcast).is_some() {
            tracing::debug!("replaced existing broadcast record for re-selected seat");
        }
    }

    /// Stores an offer payload and flips the record to `live`.
    ///
    /// Returns `false` when no record exists for the seat — the offer is
    /// stale and the caller drops it silently.
    pub fn record_offer(&mut self, seat: &SeatId, payload: Value) -> bool {
        match self.broadcasts.get_mut(seat) {
            Some(broadcast) => {
                broadcast.offer = Some(payload);
                broadcast.status = BroadcastStatus::Live;
                true
            }
            None => false,
        }
    }

    /// Returns the record for a seat, if one exists.
    #[must_use]
    pub fn get(&self, seat: &SeatId) -> Option<&Broadcast> {
        self.broadcasts.get(seat)
    }

    /// Deletes the record for a seat, returning it if present.
    pub fn stop(&mut self, seat: &SeatId) -> Option<Broadcast> {
        self.broadcasts.remove(seat)
    }

    /// Deletes every record bound to a connection, returning the removed
    /// records. Used by disconnect cleanup.
    pub fn purge_connection(&mut self, conn_id: ConnectionId) -> Vec<Broadcast> {
        let seats: Vec<SeatId> = self
            .broadcasts
            .iter()
            .filter(|(_, b)| b.connection_id == conn_id)
            .map(|(seat, _)| seat.clone())
            .collect();
        seats
            .iter()
            .filter_map(|seat| self.broadcasts.remove(seat))
            .collect()
    }

    /// Returns summaries of all records, ordered by seat label for a stable
    /// moderator view.
    #[must_use]
    pub fn summaries(&self) -> Vec<BroadcastSummary> {
        let mut summaries: Vec<BroadcastSummary> =
            self.broadcasts.values().map(BroadcastSummary::from).collect();
        summaries.sort_by(|a, b| a.seat.as_str().cmp(b.seat.as_str()));
        summaries
    }

    /// Returns the number of active records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.broadcasts.len()
    }

    /// Returns `true` when no broadcast is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.broadcasts.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn start_creates_awaiting_media() {
        let mut table = BroadcastTable::new();
        table.start(SeatId::new("A1"), ConnectionId::new());

        let Some(b) = table.get(&SeatId::new("A1")) else {
            panic!("expected broadcast record");
        };
        assert_eq!(b.status, BroadcastStatus::AwaitingMedia);
        assert!(b.offer.is_none());
    }

    #[test]
    fn reselection_overwrites_record() {
        let mut table = BroadcastTable::new();
        let first = ConnectionId::new();
        let second = ConnectionId::new();
        table.start(SeatId::new("A1"), first);
        let _ = table.record_offer(&SeatId::new("A1"), json!({"sdp": "x"}));
        table.start(SeatId::new("A1"), second);

        let Some(b) = table.get(&SeatId::new("A1")) else {
            panic!("expected broadcast record");
        };
        assert_eq!(b.connection_id, second);
        assert_eq!(b.status, BroadcastStatus::AwaitingMedia);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn record_offer_flips_to_live() {
        let mut table = BroadcastTable::new();
        table.start(SeatId::new("A1"), ConnectionId::new());

        assert!(table.record_offer(&SeatId::new("A1"), json!({"sdp": "x"})));
        let Some(b) = table.get(&SeatId::new("A1")) else {
            panic!("expected broadcast record");
        };
        assert_eq!(b.status, BroadcastStatus::Live);
        assert_eq!(b.offer, Some(json!({"sdp": "x"})));
    }

    #[test]
    fn record_offer_without_record_is_rejected() {
        let mut table = BroadcastTable::new();
        assert!(!table.record_offer(&SeatId::new("A1"), json!({})));
    }

    #[test]
    fn stop_deletes_record() {
        let mut table = BroadcastTable::new();
        table.start(SeatId::new("A1"), ConnectionId::new());

        assert!(table.stop(&SeatId::new("A1")).is_some());
        assert!(table.get(&SeatId::new("A1")).is_none());
        assert!(table.stop(&SeatId::new("A1")).is_none());
    }

    #[test]
    fn purge_connection_removes_bound_records() {
        let mut table = BroadcastTable::new();
        let conn = ConnectionId::new();
        table.start(SeatId::new("A1"), conn);
        table.start(SeatId::new("B2"), ConnectionId::new());

        let removed = table.purge_connection(conn);
        assert_eq!(removed.len(), 1);
        assert_eq!(table.len(), 1);
        assert!(table.get(&SeatId::new("B2")).is_some());
    }

    #[test]
    fn summaries_are_seat_ordered() {
        let mut table = BroadcastTable::new();
        table.start(SeatId::new("B2"), ConnectionId::new());
        table.start(SeatId::new("A1"), ConnectionId::new());

        let seats: Vec<String> = table
            .summaries()
            .into_iter()
            .map(|s| s.seat.to_string())
            .collect();
        assert_eq!(seats, vec!["A1", "B2"]);
    }
}
