//! Read-only administrative interface mounted under the admin prefix.
//!
//! Paths reaching this router are relative to the mount, so
//! `/secret-backend/status` arrives as `/status`.

pub mod handlers;

use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};

use self::handlers::*;
use crate::routing::RouteTable;

pub fn setup_admin_router(routes: Arc<RouteTable>) -> Router {
    let state = AdminState {
        routes,
        started_at: Instant::now(),
    };

    Router::new()
        .route("/status", get(get_status))
        .route("/routes", get(get_routes))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::GatewayConfig;

    fn admin() -> Router {
        setup_admin_router(Arc::new(RouteTable::from_config(&GatewayConfig::default())))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status() {
        let (status, json) = get_json(admin(), "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "operational");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_routes() {
        let (status, json) = get_json(admin(), "/routes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["target"], "registration");
        assert_eq!(json[1]["prefix"], "secret-backend/");
    }

    #[tokio::test]
    async fn test_unknown_endpoint() {
        let (status, json) = get_json(admin(), "/anything").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["interface"], "admin");
    }
}
