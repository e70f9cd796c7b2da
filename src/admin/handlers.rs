use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;

use crate::routing::router::MountDescription;
use crate::routing::RouteTable;

/// State shared by the admin handlers.
#[derive(Clone)]
pub struct AdminState {
    pub routes: Arc<RouteTable>,
    pub started_at: Instant,
}

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub uptime_secs: u64,
}

pub async fn get_status(State(state): State<AdminState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

pub async fn get_routes(State(state): State<AdminState>) -> Json<Vec<MountDescription>> {
    Json(state.routes.describe())
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Unknown admin endpoint",
            "status": 404,
            "interface": "admin",
        })),
    )
}
