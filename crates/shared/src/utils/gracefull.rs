use tracing::{error, info};

/// Resolves once Ctrl+C is received, letting axum drain in-flight requests.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("🛑 Shutdown signal received.");
        }
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
