//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Administrative interface mount.
    pub admin: AdminConfig,

    /// Registration route set, in resolution order.
    pub registration: Vec<RegistrationRouteConfig>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            admin: AdminConfig::default(),
            registration: default_registration_routes(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Administrative interface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Mount the admin interface.
    pub enabled: bool,

    /// Path prefix the admin interface is mounted under (no leading slash).
    pub prefix: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prefix: "secret-backend/".to_string(),
        }
    }
}

/// Handler a registration pattern dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// Plain-text greeting that echoes the request path.
    PathEcho,
    /// WebSocket session echoing text frames.
    WebsocketEcho,
}

/// A single pattern in the registration route set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationRouteConfig {
    /// Route identifier for logging/metrics.
    pub name: String,

    /// Path pattern, relative to the mount (no leading slash).
    pub pattern: String,

    /// Require the whole remaining path to equal the pattern.
    #[serde(default)]
    pub exact: bool,

    /// Handler to dispatch to.
    pub handler: HandlerKind,
}

impl RegistrationRouteConfig {
    fn new(name: &str, pattern: &str, exact: bool, handler: HandlerKind) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            exact,
            handler,
        }
    }
}

/// Registration pages of the web frontend plus the echo endpoints.
pub fn default_registration_routes() -> Vec<RegistrationRouteConfig> {
    use HandlerKind::{PathEcho, WebsocketEcho};

    vec![
        RegistrationRouteConfig::new("home", "", true, PathEcho),
        RegistrationRouteConfig::new("register", "register/", true, PathEcho),
        RegistrationRouteConfig::new("login", "login/", true, PathEcho),
        RegistrationRouteConfig::new("logout", "logout/", true, PathEcho),
        RegistrationRouteConfig::new("join-team", "join-team/", true, PathEcho),
        RegistrationRouteConfig::new("create-team", "create-team/", true, PathEcho),
        RegistrationRouteConfig::new("choose-scenario", "choose-scenario/", true, PathEcho),
        RegistrationRouteConfig::new("echo", "echo/", false, PathEcho),
        RegistrationRouteConfig::new("websocket", "ws/", false, WebsocketEcho),
    ]
}
