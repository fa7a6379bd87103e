use std::future::Future;
use std::io;

/// Resolve once `signal` fires.
///
/// If the signal handler cannot be installed the error is logged and this
/// never resolves, so the server keeps running instead of shutting down
/// immediately.
pub async fn wait_for<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to install shutdown signal handler");
            std::future::pending::<()>().await;
        }
    }
}
