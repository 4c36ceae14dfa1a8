//! Prometheus metrics for accident-search-service.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Must be called once at startup; without
/// it the recording helpers are no-ops.
pub fn init_metrics() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record a finished search by topic and outcome.
pub fn record_search(topic: &'static str, outcome: &'static str) {
    counter!("search_requests_total", "topic" => topic, "outcome" => outcome).increment(1);
}

pub fn record_inference_duration(model: &str, elapsed: Duration) {
    histogram!("inference_duration_seconds", "model" => model.to_string())
        .record(elapsed.as_secs_f64());
}

pub fn record_inference_error(kind: &'static str) {
    counter!("inference_errors_total", "kind" => kind).increment(1);
}
