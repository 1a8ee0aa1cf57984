//! Caller-supplied seat label.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label identifying a physical or logical audience position (e.g. `"A12"`).
///
/// Supplied by the client on registration and never validated or
/// deduplicated by the hub: multiple connections may register the same seat,
/// and seat lookup resolves collisions to the earliest registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    /// Creates a `SeatId` from any string-like value.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the seat label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SeatId {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for SeatId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_label() {
        let seat = SeatId::new("A12");
        assert_eq!(format!("{seat}"), "A12");
        assert_eq!(seat.as_str(), "A12");
    }

    #[test]
    fn serde_is_transparent() {
        let seat = SeatId::new("B7");
        let json = serde_json::to_string(&seat).ok();
        assert_eq!(json.as_deref(), Some("\"B7\""));
    }

    #[test]
    fn equal_labels_are_equal_seats() {
        assert_eq!(SeatId::new("C3"), SeatId::from("C3"));
    }
}
