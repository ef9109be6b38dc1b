//! Metrics collection and exposition.
//!
//! # Metrics
//! - `header_lab_requests_total` (counter): requests by method, status
//! - `header_lab_request_duration_seconds` (histogram): latency distribution
//! - `header_lab_header_findings_total` (counter): response header findings
//!   by header, status
//!
//! Recording is a no-op until `init_metrics` installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("header_lab_requests_total", &labels).increment(1);
    metrics::histogram!("header_lab_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_finding(header: &'static str, status: &'static str) {
    metrics::counter!(
        "header_lab_header_findings_total",
        "header" => header,
        "status" => status
    )
    .increment(1);
}
