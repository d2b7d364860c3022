//! Distributed tracing support.
//!
//! # Responsibilities
//! - Build the OTLP/gRPC span exporter and tracer provider
//! - Extract W3C trace context from incoming requests
//! - Flush and shut down the provider on exit
//!
//! # Design Decisions
//! - Every trace is sampled (`Sampler::AlwaysOn`)
//! - Spans are exported in batches on the Tokio runtime
//! - `tracing` spans are bridged to OpenTelemetry by `tracing-opentelemetry`

use axum::http::{HeaderMap, HeaderName};
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{RandomIdGenerator, Sampler, TracerProvider};
use opentelemetry_sdk::{runtime, Resource};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};

use super::TelemetryError;
use crate::config::ObservabilityConfig;

/// Build the tracer provider and register it (and the W3C propagator) globally.
pub fn init_tracer_provider(config: &ObservabilityConfig) -> Result<TracerProvider, TelemetryError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .build()
        .map_err(|e| TelemetryError::TracingInit(e.to_string()))?;

    let resource = Resource::new([
        KeyValue::new(SERVICE_NAME, config.service_name.clone()),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
    ]);

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_sampler(Sampler::AlwaysOn)
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource)
        .build();

    global::set_text_map_propagator(TraceContextPropagator::new());
    global::set_tracer_provider(provider.clone());

    Ok(provider)
}

/// Extract the remote parent context (if any) from request headers.
pub fn extract_context(headers: &HeaderMap) -> opentelemetry::Context {
    global::get_text_map_propagator(|propagator| propagator.extract(&HeaderExtractor(headers)))
}

/// Adapts `http::HeaderMap` to the OpenTelemetry propagation API.
pub struct HeaderExtractor<'a>(pub &'a HeaderMap);

impl opentelemetry::propagation::Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

/// Owns the tracer provider; flushes and shuts it down on drop.
pub struct TelemetryGuard {
    provider: Option<TracerProvider>,
}

impl TelemetryGuard {
    pub(crate) fn new(provider: TracerProvider) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Flush pending spans and shut the provider down now.
    pub fn shutdown(mut self) {
        self.shutdown_provider();
    }

    fn shutdown_provider(&mut self) {
        // Shutting down the batch processor exports whatever is still queued.
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("Error shutting down tracer provider: {e}");
            }
        }
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        self.shutdown_provider();
    }
}
