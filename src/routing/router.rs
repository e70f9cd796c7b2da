//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled mounts and their route sets
//! - Resolve a request path to a handler or the admin interface
//! - Return the matched target or an explicit `RouteNotFound`
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) prefix scan (acceptable for typical route counts)
//! - A registration mount that matches none of its patterns falls through
//!   to the next mount

use serde::Serialize;

use crate::config::{GatewayConfig, HandlerKind, RegistrationRouteConfig};
use crate::error::{GatewayError, GatewayResult};
use crate::routing::matcher::{ExactPathMatcher, Matcher, PathPrefixMatcher};

/// A compiled registration pattern.
#[derive(Debug)]
pub struct RegistrationRoute {
    name: String,
    matcher: Box<dyn Matcher>,
    handler: HandlerKind,
}

impl RegistrationRoute {
    pub fn from_config(config: &RegistrationRouteConfig) -> Self {
        let matcher: Box<dyn Matcher> = if config.exact {
            Box::new(ExactPathMatcher::new(config.pattern.clone()))
        } else {
            Box::new(PathPrefixMatcher::new(config.pattern.clone()))
        };

        Self {
            name: config.name.clone(),
            matcher,
            handler: config.handler,
        }
    }
}

/// What a mount delegates to.
#[derive(Debug)]
pub enum MountTarget {
    /// Ordered registration route set.
    Registration(Vec<RegistrationRoute>),
    /// Administrative interface; claims every path under the mount.
    Admin,
}

/// A top-level route table entry.
#[derive(Debug)]
pub struct Mount {
    prefix: PathPrefixMatcher,
    target: MountTarget,
}

impl Mount {
    pub fn new(prefix: impl Into<String>, target: MountTarget) -> Self {
        Self {
            prefix: PathPrefixMatcher::new(prefix),
            target,
        }
    }
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// A registration pattern matched.
    Handler { route: &'a str, handler: HandlerKind },
    /// The path belongs to the admin interface; `rest` is relative to its mount.
    Admin { rest: &'a str },
}

impl Resolution<'_> {
    /// Label used for logs and metrics.
    pub fn target_label(&self) -> &str {
        match self {
            Resolution::Handler { route, .. } => route,
            Resolution::Admin { .. } => "admin",
        }
    }
}

/// Serializable view of one mount, in resolution order.
#[derive(Debug, Clone, Serialize)]
pub struct MountDescription {
    pub prefix: String,
    pub target: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteDescription>,
}

/// Serializable view of one registration pattern.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDescription {
    pub name: String,
    pub pattern: String,
    pub exact: bool,
    pub handler: HandlerKind,
}

/// Immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    mounts: Vec<Mount>,
}

impl RouteTable {
    /// Build a table from mounts in resolution order.
    pub fn new(mounts: Vec<Mount>) -> Self {
        Self { mounts }
    }

    /// Compile the gateway's table: registration under `""`, then admin.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let registration = config
            .registration
            .iter()
            .map(RegistrationRoute::from_config)
            .collect();

        let mut mounts = vec![Mount::new("", MountTarget::Registration(registration))];
        if config.admin.enabled {
            mounts.push(Mount::new(config.admin.prefix.clone(), MountTarget::Admin));
        }

        Self::new(mounts)
    }

    /// Resolve a request path (with or without its leading slash).
    pub fn resolve<'a>(&'a self, path: &'a str) -> GatewayResult<Resolution<'a>> {
        let relative = relative_path(path);

        for mount in &self.mounts {
            let Some(rest) = mount.prefix.strip(relative) else {
                continue;
            };

            match &mount.target {
                MountTarget::Admin => return Ok(Resolution::Admin { rest }),
                MountTarget::Registration(routes) => {
                    let hit = routes.iter().find(|r| r.matcher.strip(rest).is_some());
                    if let Some(route) = hit {
                        return Ok(Resolution::Handler {
                            route: &route.name,
                            handler: route.handler,
                        });
                    }
                }
            }
        }

        Err(GatewayError::RouteNotFound(path.to_string()))
    }

    /// Describe the table for the admin interface.
    pub fn describe(&self) -> Vec<MountDescription> {
        self.mounts
            .iter()
            .map(|mount| match &mount.target {
                MountTarget::Admin => MountDescription {
                    prefix: mount.prefix.pattern().to_string(),
                    target: "admin",
                    routes: Vec::new(),
                },
                MountTarget::Registration(routes) => MountDescription {
                    prefix: mount.prefix.pattern().to_string(),
                    target: "registration",
                    routes: routes
                        .iter()
                        .map(|r| RouteDescription {
                            name: r.name.clone(),
                            pattern: r.matcher.pattern().to_string(),
                            exact: r.matcher.is_exact(),
                            handler: r.handler,
                        })
                        .collect(),
                },
            })
            .collect()
    }

    /// Number of mounts.
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

/// Drop the single leading slash routes are written without.
pub fn relative_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table() -> RouteTable {
        RouteTable::from_config(&GatewayConfig::default())
    }

    #[test]
    fn test_admin_reached_behind_empty_prefix() {
        let table = default_table();

        assert_eq!(
            table.resolve("secret-backend/anything").unwrap(),
            Resolution::Admin { rest: "anything" }
        );
        assert_eq!(
            table.resolve("/secret-backend/status").unwrap(),
            Resolution::Admin { rest: "status" }
        );
    }

    #[test]
    fn test_registration_routes() {
        let table = default_table();

        assert_eq!(
            table.resolve("/").unwrap(),
            Resolution::Handler { route: "home", handler: HandlerKind::PathEcho }
        );
        assert_eq!(
            table.resolve("").unwrap(),
            Resolution::Handler { route: "home", handler: HandlerKind::PathEcho }
        );
        assert_eq!(
            table.resolve("/login/").unwrap(),
            Resolution::Handler { route: "login", handler: HandlerKind::PathEcho }
        );
        assert_eq!(
            table.resolve("/echo/foo/bar").unwrap(),
            Resolution::Handler { route: "echo", handler: HandlerKind::PathEcho }
        );
        assert_eq!(
            table.resolve("/ws/").unwrap(),
            Resolution::Handler { route: "websocket", handler: HandlerKind::WebsocketEcho }
        );
    }

    #[test]
    fn test_unmatched_path() {
        let table = default_table();

        let err = table.resolve("/login/extra").unwrap_err();
        assert!(matches!(err, GatewayError::RouteNotFound(ref p) if p == "/login/extra"));
        assert!(table.resolve("/secret-backend").is_err());
    }

    #[test]
    fn test_first_match_wins() {
        let mut config = GatewayConfig::default();
        config.registration = vec![
            RegistrationRouteConfig {
                name: "first".into(),
                pattern: "foo/".into(),
                exact: false,
                handler: HandlerKind::PathEcho,
            },
            RegistrationRouteConfig {
                name: "second".into(),
                pattern: "foo/bar".into(),
                exact: true,
                handler: HandlerKind::WebsocketEcho,
            },
        ];
        let table = RouteTable::from_config(&config);

        assert_eq!(table.resolve("/foo/bar").unwrap().target_label(), "first");
    }

    #[test]
    fn test_registration_shadows_admin_when_it_matches() {
        let mut config = GatewayConfig::default();
        config.registration = vec![RegistrationRouteConfig {
            name: "everything".into(),
            pattern: String::new(),
            exact: false,
            handler: HandlerKind::PathEcho,
        }];
        let table = RouteTable::from_config(&config);

        assert_eq!(
            table.resolve("/secret-backend/status").unwrap().target_label(),
            "everything"
        );
    }

    #[test]
    fn test_admin_disabled() {
        let mut config = GatewayConfig::default();
        config.admin.enabled = false;
        let table = RouteTable::from_config(&config);

        assert_eq!(table.len(), 1);
        assert!(matches!(
            table.resolve("/secret-backend/status"),
            Err(GatewayError::RouteNotFound(_))
        ));
    }

    #[test]
    fn test_describe_lists_mounts_in_order() {
        let described = default_table().describe();

        assert_eq!(described.len(), 2);
        assert_eq!(described[0].target, "registration");
        assert_eq!(described[0].routes[0].name, "home");
        assert_eq!(described[1].target, "admin");
        assert_eq!(described[1].prefix, "secret-backend/");

        let json = serde_json::to_value(&described).unwrap();
        assert!(json[1].get("routes").is_none());
        assert_eq!(json[0]["routes"][8]["handler"], "websocket_echo");
    }
}
