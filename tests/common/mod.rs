//! Shared utilities for integration tests: start the service on an
//! ephemeral port and stop it by triggering its `Shutdown` watch channel.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use fact_service::{HttpServer, MetricsRegistry, ServiceConfig, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service with the production step delay on 127.0.0.1:0.
pub async fn start_server() -> TestServer {
    start_server_with(ServiceConfig::default()).await
}

/// Start the service with `config` (its bind address is ignored).
pub async fn start_server_with(config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, Arc::new(MetricsRegistry::new()));
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    TestServer {
        addr,
        shutdown,
        client,
    }
}

/// Value of `http_request_total{status="<status>"}` in a scrape, 0 when absent.
pub fn request_total(scrape: &str, status: &str) -> u64 {
    let prefix = format!("http_request_total{{status=\"{status}\"}} ");
    scrape
        .lines()
        .find_map(|line| line.strip_prefix(&prefix))
        .map(|v| v.trim().parse().unwrap())
        .unwrap_or(0)
}
