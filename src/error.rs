//! Gateway error taxonomy.
//!
//! Every failure a handler can surface maps to exactly one variant. HTTP
//! failures are rendered through `IntoResponse`; WebSocket failures are
//! logged by the session loop and end the connection.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors raised while routing or handling a request.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Inbound message is missing a required field (400).
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The WebSocket peer went away before a frame could be sent.
    #[error("Connection closed: {0}")]
    ConnectionClosed(String),

    /// No route table entry matches the path (404).
    #[error("No route matches path '{0}'")]
    RouteNotFound(String),
}

impl GatewayError {
    /// HTTP status this error is surfaced as.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            // Only reachable if a WebSocket failure leaks into an HTTP path.
            GatewayError::ConnectionClosed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = axum::Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type GatewayResult<T> = Result<T, GatewayError>;
