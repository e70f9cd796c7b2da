//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with a single dispatch entry point
//! - Wire up middleware (request ID, tracing, timeout)
//! - Resolve every request against the shared route table
//! - Hand off to the path echo handler, the WebSocket echo session,
//!   or the admin sub-router
//! - Record per-request metrics

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ws::WebSocketUpgrade, FromRequestParts, State},
    http::{Request, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceExt;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{debug, warn};

use crate::admin::setup_admin_router;
use crate::config::{GatewayConfig, HandlerKind};
use crate::error::{GatewayError, GatewayResult};
use crate::http::request::{request_id, MakeRequestUuid, PathRequest, X_REQUEST_ID};
use crate::http::response::path_echo;
use crate::http::websocket;
use crate::lifecycle::signals::wait_for_signal;
use crate::observability::metrics;
use crate::routing::{Resolution, RouteTable};

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub admin: Router,
}

impl AppState {
    pub fn new(routes: Arc<RouteTable>) -> Self {
        let admin = setup_admin_router(routes.clone());
        Self { routes, admin }
    }
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
    routes: Arc<RouteTable>,
}

impl GatewayServer {
    /// Create a new server, compiling the route table from `config`.
    pub fn new(config: GatewayConfig) -> Self {
        let routes = Arc::new(RouteTable::from_config(&config));
        let state = AppState::new(routes.clone());
        let router = Self::build_router(&config, state);

        Self {
            router,
            config,
            routes,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// Run the server until Ctrl+C, SIGTERM, or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mounts = self.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = wait_for_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get the compiled route table.
    pub fn routes(&self) -> &Arc<RouteTable> {
        &self.routes
    }
}

/// Entry point for every request.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&request).to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let (response, target) = match route_request(&state, request, &request_id).await {
        Ok(routed) => routed,
        Err(e) => {
            warn!(request_id = %request_id, path = %path, error = %e, "Request rejected");
            (e.into_response(), "none".to_string())
        }
    };

    metrics::record_request(&method, response.status().as_u16(), &target, start_time);
    response
}

/// Resolve and handle one request. Returns the response and the target label.
async fn route_request(
    state: &AppState,
    request: Request<Body>,
    request_id: &str,
) -> GatewayResult<(Response, String)> {
    let path_request = PathRequest::from_uri(request.uri())?;
    let resolution = state.routes.resolve(&path_request.path)?;
    let target = resolution.target_label().to_string();

    debug!(
        request_id = %request_id,
        path = %path_request.path,
        target = %target,
        "Dispatching request"
    );

    let response = match resolution {
        Resolution::Handler {
            handler: HandlerKind::PathEcho,
            ..
        } => path_echo(&path_request).into_response(),
        Resolution::Handler {
            handler: HandlerKind::WebsocketEcho,
            ..
        } => {
            let (mut parts, _body) = request.into_parts();
            match WebSocketUpgrade::from_request_parts(&mut parts, state).await {
                Ok(ws) => websocket::upgrade(ws, request_id.to_string()),
                Err(rejection) => rejection.into_response(),
            }
        }
        Resolution::Admin { rest } => forward_to_admin(state.admin.clone(), request, rest).await?,
    };

    Ok((response, target))
}

/// Hand a request to the admin sub-router with its path made mount-relative.
async fn forward_to_admin(
    admin: Router,
    request: Request<Body>,
    rest: &str,
) -> GatewayResult<Response> {
    let (mut parts, body) = request.into_parts();
    let relative = match parts.uri.query() {
        Some(query) => format!("/{rest}?{query}"),
        None => format!("/{rest}"),
    };
    parts.uri = relative
        .parse::<Uri>()
        .map_err(|e| GatewayError::MalformedRequest(e.to_string()))?;

    let response = admin
        .oneshot(Request::from_parts(parts, body))
        .await
        .unwrap_or_else(|never| match never {});
    Ok(response)
}
