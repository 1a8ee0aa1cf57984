//! Commands into the hub task and the cloneable handle around them.
//!
//! All shared session state is owned by a single task (see
//! [`super::hub::SessionHub`]). Connections never touch that state
//! directly: every observable action becomes a [`HubCommand`] pushed
//! through one bounded queue, and the hub handles each command to
//! completion, including its fan-out pushes, before taking the next.
//! That single serialized path is what removes the need for locks on the
//! core maps.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::domain::{ConnectionId, InboundEvent, OutboundEvent, Role, SessionSnapshot};
use crate::error::HubError;

/// One unit of work for the hub task.
#[derive(Debug)]
pub enum HubCommand {
    /// A connection was accepted by the transport.
    Connect {
        /// Transport-assigned connection id.
        conn_id: ConnectionId,
        /// Role from the upgrade query parameter.
        role: Role,
        /// Outbound channel for pushes to this connection.
        sender: mpsc::UnboundedSender<Arc<OutboundEvent>>,
    },
    /// A parsed inbound wire event from a connection.
    Inbound {
        /// Originating connection.
        conn_id: ConnectionId,
        /// The decoded event.
        event: InboundEvent,
    },
    /// A connection went away (close frame, error, or task end).
    Disconnect {
        /// The departed connection.
        conn_id: ConnectionId,
    },
    /// Read-only snapshot request (REST catch-up surface).
    Snapshot {
        /// Reply channel for the projected snapshot.
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Cloneable handle for submitting commands to the hub task.
#[derive(Debug, Clone)]
pub struct HubHandle {
    tx: mpsc::Sender<HubCommand>,
}

impl HubHandle {
    /// Wraps the sending half of the hub queue.
    #[must_use]
    pub(crate) fn new(tx: mpsc::Sender<HubCommand>) -> Self {
        Self { tx }
    }

    /// Announces a new connection with its role and outbound channel.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::HubUnavailable`] if the hub task has stopped.
    pub async fn connect(
        &self,
        conn_id: ConnectionId,
        role: Role,
        sender: mpsc::UnboundedSender<Arc<OutboundEvent>>,
    ) -> Result<(), HubError> {
        self.tx
            .send(HubCommand::Connect {
                conn_id,
                role,
                sender,
            })
            .await
            .map_err(|_| HubError::HubUnavailable)
    }

    /// Submits a parsed inbound event.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::HubUnavailable`] if the hub task has stopped.
    pub async fn inbound(&self, conn_id: ConnectionId, event: InboundEvent) -> Result<(), HubError> {
        self.tx
            .send(HubCommand::Inbound { conn_id, event })
            .await
            .map_err(|_| HubError::HubUnavailable)
    }

    /// Reports a departed connection, triggering full cleanup.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::HubUnavailable`] if the hub task has stopped.
    pub async fn disconnect(&self, conn_id: ConnectionId) -> Result<(), HubError> {
        self.tx
            .send(HubCommand::Disconnect { conn_id })
            .await
            .map_err(|_| HubError::HubUnavailable)
    }

    /// Requests a consistent snapshot of the session.
    ///
    /// Because the hub queue is strictly ordered, the reply also acts as a
    /// barrier: every command submitted before this call has been fully
    /// handled once the snapshot arrives.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::HubUnavailable`] if the hub task has stopped.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, HubError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(HubCommand::Snapshot { reply })
            .await
            .map_err(|_| HubError::HubUnavailable)?;
        rx.await.map_err(|_| HubError::HubUnavailable)
    }
}
