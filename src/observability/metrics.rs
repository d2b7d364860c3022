//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_request_total` (counter): `/fact` requests by `status` ("200" | "400")
//!
//! # Design Decisions
//! - One `MetricsRegistry` per process, shared through `AppState`
//! - Recording goes through `metrics::with_local_recorder`, so no global
//!   recorder is installed and independent registries never mix
//! - Increments are atomic inside the Prometheus recorder

use metrics::{counter, describe_counter, with_local_recorder};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

/// Name of the request counter.
pub const HTTP_REQUEST_TOTAL: &str = "http_request_total";

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Status class a request ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Factorial computed and returned.
    Ok,
    /// `n` missing or invalid.
    BadRequest,
}

impl Outcome {
    /// Value of the `status` label.
    pub fn status_label(self) -> &'static str {
        match self {
            Outcome::Ok => "200",
            Outcome::BadRequest => "400",
        }
    }
}

/// Prometheus registry holding the per-status request counters.
pub struct MetricsRegistry {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl MetricsRegistry {
    /// Create an empty registry and describe the request counter.
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        with_local_recorder(&recorder, || {
            describe_counter!(HTTP_REQUEST_TOTAL, "Total number of requests");
        });

        Self { recorder, handle }
    }

    /// Count one finished request.
    pub fn record_outcome(&self, outcome: Outcome) {
        with_local_recorder(&self.recorder, || {
            counter!(HTTP_REQUEST_TOTAL, "status" => outcome.status_label()).increment(1);
        });
    }

    /// Render all metrics in Prometheus text format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MetricsRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRegistry").finish_non_exhaustive()
    }
}
