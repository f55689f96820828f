//! HTTP server lifecycle: bind, serve, shut down gracefully.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use super::routes::router;
use crate::calculator::{BasicCalculator, SharedCalculator};
use crate::config::ServerConfig;
use crate::error::Result;

/// Binds the configured address and serves until `shutdown` resolves.
///
/// ## Errors
/// Returns an error if the address is invalid, cannot be bound, or the
/// server fails while running.
pub async fn serve<F>(config: &ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    serve_listener(listener, Arc::new(BasicCalculator::new()), shutdown).await
}

/// Serves the calculator API on an already bound listener.
///
/// ## Errors
/// Returns an error if the server fails while running.
pub async fn serve_listener<F>(
    listener: TcpListener,
    calculator: SharedCalculator,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    info!(%local_addr, "HTTP server listening");

    axum::serve(listener, router(calculator))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server shut down gracefully");
    Ok(())
}
