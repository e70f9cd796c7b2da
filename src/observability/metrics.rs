//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method, status, target
//! - `gateway_request_duration_seconds` (histogram): latency by target
//! - `gateway_ws_connections_active` (gauge): open WebSocket sessions
//! - `gateway_ws_frames_echoed_total` (counter)
//! - `gateway_ws_send_failures_total` (counter)
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a completed HTTP request.
pub fn record_request(method: &str, status: u16, target: &str, start: Instant) {
    counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "target" => target.to_string()
    )
    .increment(1);

    histogram!("gateway_request_duration_seconds", "target" => target.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn ws_connected() {
    gauge!("gateway_ws_connections_active").increment(1.0);
}

pub fn ws_disconnected() {
    gauge!("gateway_ws_connections_active").decrement(1.0);
}

pub fn ws_frame_echoed() {
    counter!("gateway_ws_frames_echoed_total").increment(1);
}

pub fn ws_send_failed() {
    counter!("gateway_ws_send_failures_total").increment(1);
}
