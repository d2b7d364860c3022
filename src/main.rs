//! Factorial service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ RequestIdLayer ──▶ /fact handler ──▶ factorial (n × 10ms)
//!                                           │
//!                                           ├──▶ log lines  (tracing → JSON stdout)
//!                                           ├──▶ spans      (tracing-opentelemetry → OTLP)
//!                                           └──▶ counter    (http_request_total{status})
//!
//!     Prometheus ───▶ /metrics ──▶ MetricsRegistry::render
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;

use fact_service::lifecycle::signals::spawn_signal_handler;
use fact_service::{observability, HttpServer, MetricsRegistry, ServiceConfig, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env();

    // No degraded mode: a tracer that cannot be built stops the process.
    let telemetry = observability::init(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        otlp_endpoint = %config.observability.otlp_endpoint,
        step_delay_ms = config.compute.step_delay_ms,
        "fact-service starting"
    );

    let metrics = Arc::new(MetricsRegistry::new());

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening on port {}", local_addr.port());

    let shutdown = Arc::new(Shutdown::new());
    let shutdown_rx = shutdown.subscribe();
    spawn_signal_handler(shutdown);

    let server = HttpServer::new(&config, metrics);
    server.run(listener, shutdown_rx).await?;

    telemetry.shutdown();
    tracing::info!("Shutdown complete");
    Ok(())
}
