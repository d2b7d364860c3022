//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handling produces:
//!     → logging.rs (structured log events with request fields)
//!     → metrics.rs (http_request_total by status)
//!     → tracing.rs (handle/fact spans exported over OTLP)
//!
//! Consumers:
//!     → stdout (JSON log lines)
//!     → GET /metrics (Prometheus scrape)
//!     → OTLP collector (batched, 100% sampled)
//! ```
//!
//! # Design Decisions
//! - Request ID flows into every log line and the handle span
//! - The metrics registry is an injected object, not a global recorder
//! - Tracing exporter failure at startup is fatal; there is no no-tracing mode

pub mod logging;
pub mod metrics;
pub mod tracing;

use thiserror::Error;

use crate::config::ObservabilityConfig;

pub use self::metrics::{MetricsRegistry, Outcome};
pub use self::tracing::TelemetryGuard;

/// Errors raised while bringing up logging and tracing.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The OTLP span exporter could not be constructed.
    #[error("failed to initialize trace exporter: {0}")]
    TracingInit(String),

    /// A global subscriber was already installed, or the filter was invalid.
    #[error("failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Initialize the tracer provider and the global subscriber stack.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes pending spans.
pub fn init(config: &ObservabilityConfig) -> Result<TelemetryGuard, TelemetryError> {
    let provider = self::tracing::init_tracer_provider(config)?;
    logging::init_subscriber(config, &provider)?;

    ::tracing::debug!(
        endpoint = %config.otlp_endpoint,
        service_name = %config.service_name,
        "Tracer provider initialized"
    );

    Ok(TelemetryGuard::new(provider))
}
