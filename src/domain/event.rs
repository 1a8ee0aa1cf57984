//! Wire protocol: closed tagged unions for inbound and outbound events.
//!
//! Every WebSocket text frame is one JSON object with an `event` tag
//! (kebab-case) and camelCase fields. Inbound frames that do not match a
//! known [`InboundEvent`] shape are ignored at the transport layer, never
//! trusted. Signaling payloads (`offer` / `answer` / `ice-candidate`) are
//! carried as raw [`serde_json::Value`] and relayed verbatim — the hub
//! never parses, validates, or mutates them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::broadcast::BroadcastSummary;
use super::question::RaisedHand;
use super::seat::SeatId;

/// Events a client (moderator or audience) may send to the hub.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum InboundEvent {
    /// Audience registers a seat label for this connection.
    RegisterAudience {
        /// Caller-supplied seat label.
        seat: SeatId,
    },
    /// Audience raises a hand in the open round.
    RaiseHand,
    /// Moderator opens a question round.
    OpenQuestion,
    /// Moderator closes the question round.
    CloseQuestion,
    /// Moderator selects the participant registered on a seat.
    SelectAudience {
        /// Seat to select.
        seat: SeatId,
    },
    /// Moderator selects a uniformly random raised hand.
    SelectRandom,
    /// Selected participant sends its media offer.
    Offer {
        /// Seat of the broadcast the offer belongs to.
        seat: SeatId,
        /// Opaque signaling payload, relayed verbatim.
        payload: Value,
    },
    /// Moderator answers a participant's offer.
    Answer {
        /// Seat of the broadcast the answer belongs to.
        seat: SeatId,
        /// Opaque signaling payload, relayed verbatim.
        payload: Value,
    },
    /// ICE candidate from either side; routing is direction-sensitive.
    IceCandidate {
        /// Seat of the broadcast the candidate belongs to.
        seat: SeatId,
        /// Opaque signaling payload, relayed verbatim.
        payload: Value,
    },
    /// Either side tears down the broadcast for a seat.
    StopBroadcast {
        /// Seat of the broadcast to stop.
        seat: SeatId,
    },
}

/// Events the hub pushes to clients.
///
/// Targeting (moderator group, all connections, or a single connection) is
/// decided by the hub per event; the serialized shape carries no addressing.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum OutboundEvent {
    /// Full session snapshot for the moderator group.
    StateUpdate {
        /// Number of currently registered participants.
        participant_count: usize,
        /// Raised hands in raise order.
        raised_hands: Vec<RaisedHand>,
        /// Whether a question round is open.
        question_active: bool,
        /// Active broadcast records.
        broadcasts: Vec<BroadcastSummary>,
    },
    /// A participant registered (moderator group).
    ParticipantRegistered {
        /// Number of currently registered participants.
        participant_count: usize,
    },
    /// A hand was raised (moderator group). The newest entry is last.
    HandRaised {
        /// Raised hands in raise order.
        raised_hands: Vec<RaisedHand>,
        /// Number of raised hands.
        total_raised: usize,
        /// Number of currently registered participants.
        participant_count: usize,
    },
    /// A question round opened (all connections).
    QuestionOpened,
    /// The question round closed (all connections).
    QuestionClosed,
    /// Sent to the one selected participant.
    Selected,
    /// A participant was selected (moderator group).
    ParticipantSelected {
        /// Seat of the selected participant.
        seat: SeatId,
    },
    /// Relayed media offer (moderator group).
    Offer {
        /// Seat of the originating broadcast.
        seat: SeatId,
        /// Opaque signaling payload, relayed verbatim.
        payload: Value,
    },
    /// Relayed answer (single participant connection).
    Answer {
        /// Opaque signaling payload, relayed verbatim.
        payload: Value,
    },
    /// Relayed ICE candidate (direction-resolved target).
    IceCandidate {
        /// Opaque signaling payload, relayed verbatim.
        payload: Value,
    },
    /// Broadcast list changed (moderator group).
    BroadcastStatusUpdate {
        /// Active broadcast records.
        broadcasts: Vec<BroadcastSummary>,
    },
    /// Tear down local media resources (single participant connection).
    StopBroadcasting,
}

impl OutboundEvent {
    /// Returns the wire tag of this event as a static string.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::StateUpdate { .. } => "state-update",
            Self::ParticipantRegistered { .. } => "participant-registered",
            Self::HandRaised { .. } => "hand-raised",
            Self::QuestionOpened => "question-opened",
            Self::QuestionClosed => "question-closed",
            Self::Selected => "selected",
            Self::ParticipantSelected { .. } => "participant-selected",
            Self::Offer { .. } => "offer",
            Self::Answer { .. } => "answer",
            Self::IceCandidate { .. } => "ice-candidate",
            Self::BroadcastStatusUpdate { .. } => "broadcast-status-update",
            Self::StopBroadcasting => "stop-broadcasting",
        }
    }
}
