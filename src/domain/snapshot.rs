//! Derived session snapshot for moderator pushes and the REST surface.

use serde::Serialize;
use utoipa::ToSchema;

use super::broadcast::{BroadcastSummary, BroadcastTable};
use super::event::OutboundEvent;
use super::question::{QuestionRound, RaisedHand};
use super::registry::ConnectionRegistry;

/// One consistent view of the whole session.
///
/// Recomputed on demand for every fan-out call and REST read — never
/// cached, so an observer can only ever see a snapshot consistent with the
/// true connection set at the moment it was taken.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Number of currently registered participants.
    pub participant_count: usize,
    /// Raised hands in raise order.
    #[schema(value_type = Vec<Object>)]
    pub raised_hands: Vec<RaisedHand>,
    /// Whether a question round is open.
    pub question_active: bool,
    /// Active broadcast records.
    #[schema(value_type = Vec<Object>)]
    pub broadcasts: Vec<BroadcastSummary>,
}

impl SessionSnapshot {
    /// Projects a snapshot from the hub's owned state.
    #[must_use]
    pub fn project(
        registry: &ConnectionRegistry,
        round: &QuestionRound,
        broadcasts: &BroadcastTable,
    ) -> Self {
        Self {
            participant_count: registry.len(),
            raised_hands: round.hands().to_vec(),
            question_active: round.is_active(),
            broadcasts: broadcasts.summaries(),
        }
    }
}

impl From<SessionSnapshot> for OutboundEvent {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self::StateUpdate {
            participant_count: snapshot.participant_count,
            raised_hands: snapshot.raised_hands,
            question_active: snapshot.question_active,
            broadcasts: snapshot.broadcasts,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::connection_id::ConnectionId;
    use crate::domain::participant::Participant;
    use crate::domain::question::RaisedHand;
    use crate::domain::seat::SeatId;

    #[test]
    fn project_reflects_all_three_stores() {
        let mut registry = ConnectionRegistry::new();
        let p = Participant::new(ConnectionId::new(), SeatId::new("A1"));
        let hand = RaisedHand::for_participant(&p);
        registry.register(p);

        let mut round = QuestionRound::new();
        round.open();
        let _ = round.raise(hand);

        let mut table = BroadcastTable::new();
        table.start(SeatId::new("A1"), ConnectionId::new());

        let snapshot = SessionSnapshot::project(&registry, &round, &table);
        assert_eq!(snapshot.participant_count, 1);
        assert_eq!(snapshot.raised_hands.len(), 1);
        assert!(snapshot.question_active);
        assert_eq!(snapshot.broadcasts.len(), 1);
    }

    #[test]
    fn empty_state_projects_empty_snapshot() {
        let snapshot = SessionSnapshot::project(
            &ConnectionRegistry::new(),
            &QuestionRound::new(),
            &BroadcastTable::new(),
        );
        assert_eq!(snapshot.participant_count, 0);
        assert!(snapshot.raised_hands.is_empty());
        assert!(!snapshot.question_active);
        assert!(snapshot.broadcasts.is_empty());
    }

    #[test]
    fn snapshot_converts_to_state_update() {
        let snapshot = SessionSnapshot::project(
            &ConnectionRegistry::new(),
            &QuestionRound::new(),
            &BroadcastTable::new(),
        );
        let event = OutboundEvent::from(snapshot);
        assert_eq!(event.event_name(), "state-update");
    }
}
