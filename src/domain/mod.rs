//! Domain layer: core session state and the wire protocol.
//!
//! This module contains the hub's owned state (the connection registry,
//! the question round with its raised-hand list, and the broadcast table)
//! plus the tagged-union wire events and the derived session snapshot.
//! None of these types contain locks: they are owned exclusively by the hub
//! task and mutated through its serialized event path.

pub mod broadcast;
pub mod connection_id;
pub mod event;
pub mod participant;
pub mod question;
pub mod registry;
pub mod seat;
pub mod snapshot;

pub use broadcast::{Broadcast, BroadcastStatus, BroadcastSummary, BroadcastTable};
pub use connection_id::ConnectionId;
pub use event::{InboundEvent, OutboundEvent};
pub use participant::{Participant, Role};
pub use question::{QuestionRound, RaisedHand};
pub use registry::ConnectionRegistry;
pub use seat::SeatId;
pub use snapshot::SessionSnapshot;
