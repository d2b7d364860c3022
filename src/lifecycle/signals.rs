//! OS signal handling.
//!
//! Ctrl+C everywhere, plus SIGTERM on Unix. Either one triggers a graceful
//! shutdown; there is no reload signal.

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;

use super::Shutdown;

/// Resolve when the process is asked to stop.
pub async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Spawn a task that triggers `shutdown` on the first stop signal.
pub fn spawn_signal_handler(shutdown: Arc<Shutdown>) {
    trigger_on(wait_for_signal(), shutdown);
}

/// Spawn a task that triggers `shutdown` once `stop` resolves.
fn trigger_on<F>(stop: F, shutdown: Arc<Shutdown>) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        stop.await;
        if shutdown.is_triggered() {
            tracing::info!("Stop signal received, shutdown already in progress");
            return;
        }
        tracing::info!("Stop signal received");
        shutdown.trigger();
    })
}
