//! Path echo handler and its response type.
//!
//! The body is served as `text/plain`, so the path is embedded verbatim
//! and never escaped.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::request::PathRequest;

/// Greeting every echoed path is appended to.
pub const GREETING: &str = "Hello world! You asked for ";

/// An HTTP response body produced by the path echo handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoResponse {
    pub body: String,
}

impl IntoResponse for EchoResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body,
        )
            .into_response()
    }
}

/// Build the greeting for a request path.
pub fn path_echo(request: &PathRequest) -> EchoResponse {
    EchoResponse {
        body: format!("{GREETING}{}", request.path),
    }
}
