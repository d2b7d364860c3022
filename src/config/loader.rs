//! Configuration loading from the process environment.
//!
//! Only the standard OpenTelemetry variables are honored; everything else
//! keeps its built-in default.

use crate::config::schema::ServiceConfig;

/// Collector endpoint override.
pub const OTEL_EXPORTER_OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// Service name override.
pub const OTEL_SERVICE_NAME: &str = "OTEL_SERVICE_NAME";

impl ServiceConfig {
    /// Build the configuration from defaults plus `OTEL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration using `lookup` in place of the environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = non_empty(OTEL_EXPORTER_OTLP_ENDPOINT) {
            config.observability.otlp_endpoint = endpoint;
        }
        if let Some(name) = non_empty(OTEL_SERVICE_NAME) {
            config.observability.service_name = name;
        }

        config
    }
}
