//! Service layer: the hub actor, its command queue, and the fan-out seam.
//!
//! [`SessionHub`] owns all session state and runs as a single task;
//! [`HubHandle`] is the only way in, and [`Outbox`] is the only way out.

pub mod handle;
pub mod hub;
pub mod outbox;

pub use handle::{HubCommand, HubHandle};
pub use hub::SessionHub;
pub use outbox::Outbox;
