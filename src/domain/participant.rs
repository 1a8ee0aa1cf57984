//! Connection roles and registered audience participants.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::connection_id::ConnectionId;
use super::seat::SeatId;

/// Role assigned to a connection at upgrade time.
///
/// Distinguished by the `type` query parameter on the WebSocket endpoint
/// (`?type=admin` joins the moderator group; everything else is audience).
/// The role never changes for the lifetime of the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Privileged moderator connection; receives all state pushes.
    Moderator,
    /// Ephemeral audience connection.
    Audience,
}

impl Role {
    /// Maps the `type` query parameter to a role.
    ///
    /// Only the exact value `"admin"` grants moderator membership; any other
    /// value (or absence) yields [`Role::Audience`].
    #[must_use]
    pub fn from_query(client_type: Option<&str>) -> Self {
        match client_type {
            Some("admin") => Self::Moderator,
            _ => Self::Audience,
        }
    }

    /// Returns `true` for moderator connections.
    #[must_use]
    pub const fn is_moderator(self) -> bool {
        matches!(self, Self::Moderator)
    }
}

/// A registered audience member.
///
/// Created by a `register-audience` event and destroyed on connection loss.
/// At most one participant exists per connection id (re-registration
/// overwrites), while several participants may share a seat label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Transport connection identifier.
    pub connection_id: ConnectionId,
    /// Caller-supplied seat label.
    pub seat: SeatId,
    /// When the registration was received.
    pub registered_at: DateTime<Utc>,
}

impl Participant {
    /// Creates a participant registered at the current instant.
    #[must_use]
    pub fn new(connection_id: ConnectionId, seat: SeatId) -> Self {
        Self {
            connection_id,
            seat,
            registered_at: Utc::now(),
        }
    }
}
