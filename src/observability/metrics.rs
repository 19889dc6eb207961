//! Metrics collection and exposition.
//!
//! # Metrics
//! - `flip_server_requests_total` (counter): requests by method, status
//! - `flip_server_request_duration_seconds` (histogram): request latency
//!
//! # Design Decisions
//! - Recording works without an exporter installed (updates are no-ops),
//!   so the middleware is always wired and only the exporter is optional

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics exporter"),
    }
}

/// Axum middleware recording one count and one latency sample per request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    counter!(
        "flip_server_requests_total",
        "method" => method.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "flip_server_request_duration_seconds",
        "method" => method,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());

    response
}
