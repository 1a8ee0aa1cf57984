//! Shared application state injected into all Axum handlers.

use crate::service::HubHandle;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handle to the session hub task.
    pub hub: HubHandle,
}
