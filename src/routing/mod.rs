//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (mount lookup, registration patterns)
//!     → matcher.rs (evaluate prefix / exact patterns)
//!     → Return: Handler, Admin, or RouteNotFound
//!
//! Route Compilation (at startup):
//!     GatewayConfig
//!     → registration mount ("") then admin mount ("secret-backend/")
//!     → Freeze as immutable RouteTable, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (table order)

pub mod matcher;
pub mod router;

pub use router::{Resolution, RouteTable};
