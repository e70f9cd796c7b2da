//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, dispatch)
//!     → request.rs (request ID, typed PathRequest)
//!     → routing layer resolves the path
//!     → response.rs (path echo) | websocket.rs (echo session) | admin
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod websocket;

pub use request::{MakeRequestUuid, PathRequest, TextFrame, X_REQUEST_ID};
pub use response::{path_echo, EchoResponse};
pub use server::GatewayServer;
pub use websocket::echo_frame;
