//! Configuration schema definitions.
//!
//! Every section has a `Default` matching the production service, so
//! `ServiceConfig::default()` is a complete, runnable configuration.

use std::time::Duration;

/// Root configuration for the factorial service.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Factorial computation settings.
    pub compute: ComputeConfig,

    /// Logging and tracing settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Factorial computation settings.
#[derive(Debug, Clone)]
pub struct ComputeConfig {
    /// Synthetic delay after each multiplication step, in milliseconds.
    pub step_delay_ms: u64,
}

impl ComputeConfig {
    /// The per-step delay as a `Duration`.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self { step_delay_ms: 10 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level used when `RUST_LOG` is not set (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit log lines as JSON objects instead of human-readable text.
    pub json_logs: bool,

    /// Service name reported on every exported span.
    pub service_name: String,

    /// OTLP/gRPC collector endpoint.
    pub otlp_endpoint: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: true,
            service_name: "fact-service".to_string(),
            otlp_endpoint: "http://localhost:4317".to_string(),
        }
    }
}
