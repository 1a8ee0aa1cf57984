//! WebSocket layer: connection upgrade and the per-connection loop.
//!
//! The `/ws` endpoint carries the entire session protocol. The role of a
//! connection (moderator vs audience) is fixed at upgrade time by the
//! `type` query parameter; everything after that is tagged JSON frames.

pub mod connection;
pub mod handler;
