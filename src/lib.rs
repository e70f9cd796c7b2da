//! BORIS gateway library: path echo, WebSocket echo, and the route table
//! that mounts them next to a read-only admin interface.

pub mod admin;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
pub use routing::RouteTable;
