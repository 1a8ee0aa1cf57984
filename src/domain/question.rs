//! Question round state machine and the ordered raised-hand list.
//!
//! A [`QuestionRound`] cycles between closed (initial) and open. Hands
//! accumulate only while the round is open; opening clears the previous
//! list, closing freezes it as history for the moderator view.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use super::connection_id::ConnectionId;
use super::participant::Participant;
use super::seat::SeatId;

/// One raised hand: a participant reference plus the raise timestamp.
///
/// Exists only inside a [`QuestionRound`]. Insertion order is preserved and
/// significant — the moderator view renders hands in raise order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaisedHand {
    /// Connection that raised the hand.
    pub connection_id: ConnectionId,
    /// Seat label of the participant at raise time.
    pub seat: SeatId,
    /// When the hand was raised.
    pub raised_at: DateTime<Utc>,
}

impl RaisedHand {
    /// Creates a raised hand for a participant at the current instant.
    #[must_use]
    pub fn for_participant(participant: &Participant) -> Self {
        Self {
            connection_id: participant.connection_id,
            seat: participant.seat.clone(),
            raised_at: Utc::now(),
        }
    }
}

/// The open/closed question round with its ordered raised-hand list.
///
/// Only one round exists at a time; there is no queue of pending rounds.
#[derive(Debug, Default)]
pub struct QuestionRound {
    active: bool,
    hands: Vec<RaisedHand>,
}

impl QuestionRound {
    /// Creates a closed round with no hands.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the round is open.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Opens the round, clearing any previous hand list.
    ///
    /// Clearing happens even when the round is already open — reopening is
    /// a reset, not a no-op.
    pub fn open(&mut self) {
        self.active = true;
        self.hands.clear();
    }

    /// Closes the round, retaining the hand list as a frozen history.
    pub fn close(&mut self) {
        self.active = false;
    }

    /// Appends a raised hand if the round is open and the connection has not
    /// already raised in this round.
    ///
    /// Returns `true` when the hand was appended. Idempotence is keyed by
    /// connection id, not by seat, so two connections on a colliding seat
    /// can both raise.
    pub fn raise(&mut self, hand: RaisedHand) -> bool {
        if !self.active {
            return false;
        }
        if self
            .hands
            .iter()
            .any(|h| h.connection_id == hand.connection_id)
        {
            return false;
        }
        self.hands.push(hand);
        true
    }

    /// Removes the hand belonging to a connection, regardless of round
    /// state. Used by disconnect cleanup; a no-op if no such hand exists.
    pub fn purge(&mut self, conn_id: ConnectionId) {
        self.hands.retain(|h| h.connection_id != conn_id);
    }

    /// Draws a uniformly random hand from the current list.
    ///
    /// Returns `None` when the list is empty. Valid on retained history
    /// after the round has closed.
    #[must_use]
    pub fn random_hand(&self) -> Option<&RaisedHand> {
        if self.hands.is_empty() {
            return None;
        }
        let index = rand::rng().random_range(0..self.hands.len());
        self.hands.get(index)
    }

    /// Returns the hands in raise order.
    #[must_use]
    pub fn hands(&self) -> &[RaisedHand] {
        &self.hands
    }

    /// Returns the number of raised hands.
    #[must_use]
    pub fn raised_count(&self) -> usize {
        self.hands.len()
    }
}
