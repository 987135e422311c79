//! Metrics collection and exposition.
//!
//! # Metrics
//! - `portfolio_requests_total` (counter): inbound requests by method, status
//! - `portfolio_request_duration_seconds` (histogram): inbound latency
//! - `portfolio_upstream_fetch_total` (counter): upstream calls by outcome
//! - `portfolio_upstream_fetch_duration_seconds` (histogram): upstream latency
//!
//! Recording is a no-op until an exporter is installed.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "portfolio_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("portfolio_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_fetch(outcome: &'static str, start: Instant) {
    metrics::counter!("portfolio_upstream_fetch_total", "outcome" => outcome).increment(1);
    metrics::histogram!("portfolio_upstream_fetch_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}

/// Middleware recording every inbound request.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let response = next.run(request).await;
    record_request(&method, response.status().as_u16(), start);
    response
}
