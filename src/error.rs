//! Hub error types with HTTP status code mapping.
//!
//! [`HubError`] is the central error type for the service. It is used on
//! the REST surface and on startup paths; inside the WebSocket event path
//! caller errors are deliberately silent no-ops and never become errors
//! (see the session protocol notes in [`crate::service::hub`]).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "seat not found: A12",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status       |
/// |-----------|------------|-------------------|
/// | 1000–1999 | Validation | 400 Bad Request   |
/// | 2000–2999 | Not Found  | 404 Not Found     |
/// | 3000–3999 | Server     | 500 / 503         |
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No participant is registered on the given seat.
    #[error("seat not found: {0}")]
    SeatNotFound(String),

    /// No broadcast record exists for the given seat.
    #[error("broadcast not found: {0}")]
    BroadcastNotFound(String),

    /// The hub task has stopped; commands cannot be delivered.
    #[error("session hub unavailable")]
    HubUnavailable,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl HubError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::SeatNotFound(_) => 2001,
            Self::BroadcastNotFound(_) => 2002,
            Self::HubUnavailable => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::SeatNotFound(_) | Self::BroadcastNotFound(_) => StatusCode::NOT_FOUND,
            Self::HubUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_by_category() {
        assert_eq!(
            HubError::InvalidRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HubError::SeatNotFound("A1".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            HubError::HubUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            HubError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(HubError::SeatNotFound("A1".into()).error_code(), 2001);
        assert_eq!(HubError::BroadcastNotFound("A1".into()).error_code(), 2002);
        assert_eq!(HubError::HubUnavailable.error_code(), 3001);
    }

    #[test]
    fn display_includes_context() {
        let err = HubError::SeatNotFound("A12".into());
        assert_eq!(err.to_string(), "seat not found: A12");
    }
}
