//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router (`/fact`, `/metrics`)
//! - Wire up middleware (request ID resolution and echo)
//! - Serve on a bound listener until shutdown is signalled

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tower_http::request_id::PropagateRequestIdLayer;

use crate::config::ServiceConfig;
use crate::http::fact::fact_handler;
use crate::http::request::RequestIdLayer;
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics::PROMETHEUS_CONTENT_TYPE;
use crate::observability::MetricsRegistry;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Process-wide request counters.
    pub metrics: Arc<MetricsRegistry>,
    /// Synthetic delay per factorial step.
    pub step_delay: Duration,
}

/// HTTP server for the factorial service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server recording into `metrics`.
    pub fn new(config: &ServiceConfig, metrics: Arc<MetricsRegistry>) -> Self {
        let state = AppState {
            metrics,
            step_delay: config.compute.step_delay(),
        };

        Self {
            router: build_router(state),
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// `PropagateRequestIdLayer` sits inside `RequestIdLayer` so it sees the
/// resolved header and echoes it on the response.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/fact", any(fact_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestIdLayer)
}

/// Prometheus scrape endpoint.
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.metrics.render(),
    )
}
