//! Factorial HTTP service with structured logging, OpenTelemetry tracing
//! and Prometheus request counters.

pub mod config;
pub mod factorial;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use observability::MetricsRegistry;
