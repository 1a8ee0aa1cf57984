//! # stagelink
//!
//! WebSocket coordination hub for live audience Q&A sessions with WebRTC
//! broadcast hand-off.
//!
//! A moderator ("admin") runs a session against a pool of ephemeral
//! audience connections: audience members register a seat, raise a hand
//! while a question round is open, and a selected member can stream media
//! back to the moderator. The WebRTC negotiation payloads (offer, answer,
//! ICE candidates) are relayed verbatim and never inspected — media
//! semantics belong entirely to the peers.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket, HTTP)
//!     │
//!     ├── WS upgrade + per-connection loop (ws/)
//!     ├── REST snapshot + health (api/)
//!     │
//!     ├── HubHandle ──► SessionHub task (service/)
//!     │                    │  owns all state, one command at a time
//!     │                    ▼
//!     │                 Outbox (fan-out to connections)
//!     │
//!     └── Registry / QuestionRound / BroadcastTable (domain/)
//! ```
//!
//! All state is process-lifetime and in-memory; a restart starts an empty
//! session.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
