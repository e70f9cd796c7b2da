//! Inbound message types and request identification.
//!
//! # Responsibilities
//! - Extract the typed `PathRequest` from a request target
//! - Generate a unique request ID (UUID v4) for every request
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A request target without any path (authority-form) is malformed;
//!   an empty path is not

use axum::http::{HeaderName, Request, Uri};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::error::{GatewayError, GatewayResult};

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// An HTTP request as seen by the path echo handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRequest {
    pub path: String,
}

impl PathRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Extract the path from a request target.
    pub fn from_uri(uri: &Uri) -> GatewayResult<Self> {
        match uri.path_and_query() {
            Some(pq) => Ok(Self::new(pq.path())),
            None => Err(GatewayError::MalformedRequest(format!(
                "request target '{uri}' has no path"
            ))),
        }
    }
}

/// A received WebSocket text frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    pub text: String,
}

impl TextFrame {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

/// Read the request ID header, if the ID layer has set one.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_path_from_origin_form() {
        let uri: Uri = "/foo/bar?x=1".parse().unwrap();
        assert_eq!(PathRequest::from_uri(&uri).unwrap(), PathRequest::new("/foo/bar"));
    }

    #[test]
    fn test_authority_form_is_malformed() {
        let uri: Uri = "example.com:443".parse().unwrap();
        let err = PathRequest::from_uri(&uri).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedRequest(_)));
    }

    #[test]
    fn test_make_request_id_is_uuid() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let id = MakeRequestUuid.make_request_id(&req).unwrap();
        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }

    #[test]
    fn test_request_id_fallback() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        assert_eq!(request_id(&req), "unknown");

        let req = Request::builder()
            .uri("/")
            .header("x-request-id", "abc")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id(&req), "abc");
    }
}
