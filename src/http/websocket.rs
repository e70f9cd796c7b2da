//! WebSocket echo handling.
//!
//! # Responsibilities
//! - Complete the upgrade handshake with the client
//! - Echo every text frame back to the same connection
//! - End the session on close, receive error, or failed send
//!
//! # Data Flow
//! ```text
//! Client ──── text frame T ────→ Gateway
//! Client ←─── text frame T ───── Gateway
//! ```
//!
//! # Design Decisions
//! - One outbound frame per inbound text frame, content unchanged
//! - Binary frames are not echoed
//! - Ping/pong handled by the framework
//! - A failed send is `ConnectionClosed`: logged, never retried

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tracing::{debug, warn};

use crate::error::{GatewayError, GatewayResult};
use crate::http::request::TextFrame;
use crate::observability::metrics;

/// The frame to send back for a received text frame.
pub fn echo_frame(frame: &TextFrame) -> TextFrame {
    TextFrame::new(frame.text.as_str())
}

/// Accept the upgrade and run an echo session on the socket.
pub fn upgrade(ws: WebSocketUpgrade, request_id: String) -> Response {
    ws.on_upgrade(move |socket| echo_session(socket, request_id))
}

/// Echo text frames until the peer goes away.
pub async fn echo_session(mut socket: WebSocket, request_id: String) {
    metrics::ws_connected();
    debug!(request_id = %request_id, "WebSocket client connected");

    while let Some(msg) = socket.recv().await {
        match msg {
            Ok(Message::Text(text)) => {
                let reply = echo_frame(&TextFrame::new(text.as_str()));
                if let Err(e) = send_frame(&mut socket, reply).await {
                    metrics::ws_send_failed();
                    warn!(request_id = %request_id, error = %e, "Dropping WebSocket session");
                    break;
                }
                metrics::ws_frame_echoed();
            }
            Ok(Message::Binary(data)) => {
                debug!(request_id = %request_id, len = data.len(), "Ignoring binary frame");
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {} // Ping/pong
            Err(e) => {
                debug!(request_id = %request_id, error = %e, "WebSocket receive failed");
                break;
            }
        }
    }

    metrics::ws_disconnected();
    debug!(request_id = %request_id, "WebSocket client disconnected");
}

async fn send_frame(socket: &mut WebSocket, frame: TextFrame) -> GatewayResult<()> {
    socket
        .send(Message::Text(frame.text.into()))
        .await
        .map_err(|e| GatewayError::ConnectionClosed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_frame_is_identical() {
        for text in ["ping", "", "héllo wörld ✓", "日本語のテキスト", "\u{0}\u{10FFFF}"] {
            let frame = TextFrame::new(text);
            let reply = echo_frame(&frame);
            assert_eq!(reply.text.as_bytes(), text.as_bytes());
        }
    }

    #[test]
    fn test_echo_not_cumulative() {
        let first = echo_frame(&TextFrame::new("a"));
        let second = echo_frame(&TextFrame::new("b"));
        let again = echo_frame(&TextFrame::new("a"));

        assert_eq!(first.text, "a");
        assert_eq!(second.text, "b");
        assert_eq!(first, again);
    }
}
