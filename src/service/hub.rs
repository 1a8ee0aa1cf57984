//! The session hub: single owner of all shared session state.
//!
//! [`SessionHub`] holds the connection registry, the question round, the
//! broadcast table, and the outbox. It runs as one tokio task consuming
//! [`HubCommand`]s from a bounded queue; every command is handled to
//! completion (state mutation plus fan-out pushes) before the next is
//! accepted, and no handler awaits peer I/O. Caller errors (unknown
//! seats, duplicate raises, stops on missing broadcasts, stale signaling
//! payloads) are silent no-ops per the session protocol; the only event
//! with guaranteed multi-structure cleanup is a disconnect.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::domain::{
    BroadcastTable, ConnectionId, ConnectionRegistry, InboundEvent, OutboundEvent, Participant,
    QuestionRound, RaisedHand, Role, SeatId, SessionSnapshot,
};

use super::handle::{HubCommand, HubHandle};
use super::outbox::Outbox;

/// Authoritative in-memory state machine for one live session.
#[derive(Debug, Default)]
pub struct SessionHub {
    registry: ConnectionRegistry,
    round: QuestionRound,
    broadcasts: BroadcastTable,
    outbox: Outbox,
}

impl SessionHub {
    /// Spawns the hub task and returns the handle for submitting commands.
    ///
    /// `queue_capacity` bounds the command queue; producers await free
    /// slots, which is the hub's only backpressure mechanism.
    #[must_use]
    pub fn spawn(queue_capacity: usize) -> HubHandle {
        let (tx, rx) = mpsc::channel(queue_capacity);
        let hub = Self::default();
        tokio::spawn(hub.run(rx));
        HubHandle::new(tx)
    }

    /// Consumes commands until every handle is dropped.
    async fn run(mut self, mut rx: mpsc::Receiver<HubCommand>) {
        while let Some(command) = rx.recv().await {
            self.handle(command);
        }
        tracing::info!("session hub stopped");
    }

    /// Dispatches one command. Fully synchronous: the mutation and its
    /// fan-out complete before the queue yields the next command.
    fn handle(&mut self, command: HubCommand) {
        match command {
            HubCommand::Connect {
                conn_id,
                role,
                sender,
            } => self.on_connect(conn_id, role, sender),
            HubCommand::Inbound { conn_id, event } => self.on_inbound(conn_id, event),
            HubCommand::Disconnect { conn_id } => self.on_disconnect(conn_id),
            HubCommand::Snapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }
        }
    }

    fn on_inbound(&mut self, conn_id: ConnectionId, event: InboundEvent) {
        match event {
            InboundEvent::RegisterAudience { seat } => self.on_register(conn_id, seat),
            InboundEvent::RaiseHand => self.on_raise_hand(conn_id),
            InboundEvent::OpenQuestion => self.on_open_question(),
            InboundEvent::CloseQuestion => self.on_close_question(),
            InboundEvent::SelectAudience { seat } => self.on_select_audience(&seat),
            InboundEvent::SelectRandom => self.on_select_random(),
            InboundEvent::Offer { seat, payload } => self.on_offer(&seat, payload),
            InboundEvent::Answer { seat, payload } => self.on_answer(&seat, payload),
            InboundEvent::IceCandidate { seat, payload } => {
                self.on_ice_candidate(conn_id, &seat, payload);
            }
            InboundEvent::StopBroadcast { seat } => self.on_stop_broadcast(conn_id, &seat),
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::project(&self.registry, &self.round, &self.broadcasts)
    }

    /// Pushes a fresh snapshot to the moderator group.
    fn push_state_update(&self) {
        self.outbox
            .broadcast_to_moderators(OutboundEvent::from(self.snapshot()));
    }

    fn push_broadcast_status(&self) {
        self.outbox
            .broadcast_to_moderators(OutboundEvent::BroadcastStatusUpdate {
                broadcasts: self.broadcasts.summaries(),
            });
    }

    fn on_connect(
        &mut self,
        conn_id: ConnectionId,
        role: Role,
        sender: mpsc::UnboundedSender<Arc<OutboundEvent>>,
    ) {
        tracing::info!(%conn_id, ?role, "connection attached");
        self.outbox.join(conn_id, role, sender);
        if role.is_moderator() {
            // Catch-up: a late moderator immediately sees the current state.
            self.outbox
                .send_to(conn_id, OutboundEvent::from(self.snapshot()));
        }
    }

    fn on_register(&mut self, conn_id: ConnectionId, seat: SeatId) {
        tracing::info!(%conn_id, %seat, "audience registered");
        self.registry.register(Participant::new(conn_id, seat));
        self.outbox
            .broadcast_to_moderators(OutboundEvent::ParticipantRegistered {
                participant_count: self.registry.len(),
            });
    }

    fn on_raise_hand(&mut self, conn_id: ConnectionId) {
        if !self.round.is_active() {
            return;
        }
        let Some(participant) = self.registry.get(conn_id) else {
            return;
        };
        let hand = RaisedHand::for_participant(participant);
        let seat = hand.seat.clone();
        if !self.round.raise(hand) {
            // Already raised in this round; idempotent by connection id.
            return;
        }
        tracing::info!(%conn_id, %seat, "hand raised");
        self.outbox
            .broadcast_to_moderators(OutboundEvent::HandRaised {
                raised_hands: self.round.hands().to_vec(),
                total_raised: self.round.raised_count(),
                participant_count: self.registry.len(),
            });
    }

    fn on_open_question(&mut self) {
        tracing::info!("question opened");
        self.round.open();
        self.outbox.broadcast_to_all(OutboundEvent::QuestionOpened);
        self.push_state_update();
    }

    fn on_close_question(&mut self) {
        tracing::info!("question closed");
        self.round.close();
        self.outbox.broadcast_to_all(OutboundEvent::QuestionClosed);
        self.push_state_update();
    }

    fn on_select_audience(&mut self, seat: &SeatId) {
        let Some(participant) = self.registry.lookup_by_seat(seat) else {
            // Caller error: seat unknown. Logged, never surfaced.
            tracing::warn!(%seat, "select-audience for unknown seat");
            return;
        };
        let conn_id = participant.connection_id;
        let seat = participant.seat.clone();
        self.promote(conn_id, seat);
    }

    fn on_select_random(&mut self) {
        let Some(hand) = self.round.random_hand() else {
            tracing::debug!("select-random with no raised hands");
            return;
        };
        let conn_id = hand.connection_id;
        let seat = hand.seat.clone();
        self.promote(conn_id, seat);
    }

    /// Promotes a participant: broadcast record, targeted `selected`
    /// signal, and moderator notifications.
    fn promote(&mut self, conn_id: ConnectionId, seat: SeatId) {
        tracing::info!(%conn_id, %seat, "participant selected");
        self.broadcasts.start(seat.clone(), conn_id);
        self.outbox.send_to(conn_id, OutboundEvent::Selected);
        self.outbox
            .broadcast_to_moderators(OutboundEvent::ParticipantSelected { seat });
        self.push_broadcast_status();
    }

    fn on_offer(&mut self, seat: &SeatId, payload: Value) {
        if !self.broadcasts.record_offer(seat, payload.clone()) {
            tracing::debug!(%seat, "offer for unknown broadcast dropped");
            return;
        }
        tracing::info!(%seat, "broadcast live");
        self.outbox.broadcast_to_moderators(OutboundEvent::Offer {
            seat: seat.clone(),
            payload,
        });
        self.push_broadcast_status();
    }

    fn on_answer(&mut self, seat: &SeatId, payload: Value) {
        let Some(broadcast) = self.broadcasts.get(seat) else {
            tracing::debug!(%seat, "answer for unknown broadcast dropped");
            return;
        };
        self.outbox
            .send_to(broadcast.connection_id, OutboundEvent::Answer { payload });
    }

    fn on_ice_candidate(&mut self, conn_id: ConnectionId, seat: &SeatId, payload: Value) {
        let is_moderator = self
            .outbox
            .role_of(conn_id)
            .is_some_and(Role::is_moderator);
        if is_moderator {
            // Moderator side: route to the connection bound to the seat's
            // broadcast. Candidates after teardown are legitimate; drop.
            let Some(broadcast) = self.broadcasts.get(seat) else {
                tracing::debug!(%seat, "ice-candidate for unknown broadcast dropped");
                return;
            };
            self.outbox
                .send_to(broadcast.connection_id, OutboundEvent::IceCandidate { payload });
        } else {
            // Audience side: the sender must resolve through its own
            // registration; the moderator group receives the candidate.
            if self.registry.get(conn_id).is_none() {
                tracing::debug!(%conn_id, "ice-candidate from unregistered connection dropped");
                return;
            }
            self.outbox
                .broadcast_to_moderators(OutboundEvent::IceCandidate { payload });
        }
    }

    fn on_stop_broadcast(&mut self, conn_id: ConnectionId, seat: &SeatId) {
        let Some(broadcast) = self.broadcasts.stop(seat) else {
            tracing::debug!(%seat, "stop-broadcast for unknown broadcast");
            return;
        };
        tracing::info!(%seat, "broadcast stopped");
        if broadcast.connection_id != conn_id {
            // The counterpart participant tears down its local media.
            self.outbox
                .send_to(broadcast.connection_id, OutboundEvent::StopBroadcasting);
        }
        self.push_broadcast_status();
    }

    /// Disconnect is the only cancellation signal. All three removals
    /// (registry entry, raised hand, bound broadcasts) happen inside this
    /// one serialized slot, so moderators observe them through a single
    /// snapshot.
    fn on_disconnect(&mut self, conn_id: ConnectionId) {
        self.outbox.leave(conn_id);
        let Some(participant) = self.registry.remove(conn_id) else {
            tracing::debug!(%conn_id, "connection detached");
            return;
        };
        tracing::info!(%conn_id, seat = %participant.seat, "participant left");
        self.round.purge(conn_id);
        let torn_down = self.broadcasts.purge_connection(conn_id);
        if !torn_down.is_empty() {
            tracing::info!(%conn_id, count = torn_down.len(), "broadcasts torn down");
        }
        self.push_state_update();
    }
}
