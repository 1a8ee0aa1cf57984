//! Type-safe connection identifier.
//!
//! [`ConnectionId`] is a newtype wrapper around [`uuid::Uuid`] (v4) providing
//! type safety so that transport connection identifiers cannot be confused
//! with other UUIDs or with caller-supplied seat labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for one WebSocket connection.
///
/// Wraps a UUID v4. Generated by the transport layer at upgrade time and
/// immutable for the lifetime of the connection. The hub treats it as fully
/// opaque: it is the dictionary key in the connection registry, the binding
/// target of a broadcast, and the address for targeted pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(uuid::Uuid);

impl ConnectionId {
    /// Creates a new random `ConnectionId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `ConnectionId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for ConnectionId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ConnectionId> for uuid::Uuid {
    fn from(id: ConnectionId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        let a = ConnectionId::new();
        let b = ConnectionId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_uuid_format() {
        let id = ConnectionId::new();
        let s = format!("{id}");
        assert_eq!(s.len(), 36); // UUID string length
        assert!(s.contains('-'));
    }

    #[test]
    fn serde_round_trip() {
        let id = ConnectionId::new();
        let json = serde_json::to_string(&id).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        let deserialized: ConnectionId = serde_json::from_str(&json).ok().unwrap_or_else(|| {
            panic!("deserialization failed");
        });
        assert_eq!(id, deserialized);
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let id = ConnectionId::new();
        let mut map = HashMap::new();
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }
}
