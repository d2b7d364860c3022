//! Structured logging.
//!
//! # Responsibilities
//! - Install the global `tracing` subscriber
//! - Route spans to OpenTelemetry alongside log output
//!
//! # Design Decisions
//! - JSON lines on stdout by default, pretty text when `json_logs` is off
//! - `RUST_LOG` wins over the configured level

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::TelemetryError;
use crate::config::ObservabilityConfig;

/// Install the global subscriber: env filter, fmt layer and OpenTelemetry bridge.
pub fn init_subscriber(
    config: &ObservabilityConfig,
    provider: &TracerProvider,
) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?,
    };

    let tracer = provider.tracer(config.service_name.clone());

    let json = config.json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
    });
    let text = (!config.json_logs).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))
}
