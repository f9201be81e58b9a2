//! HTTP server startup logic.

use std::io::ErrorKind;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl From<ConfigError> for ServerError {
    fn from(err: ConfigError) -> Self {
        ServerError::InvalidAddress(err.to_string())
    }
}

/// Start the HTTP server based on configuration, with signal-driven
/// graceful shutdown.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.http.shutdown_timeout_seconds),
    );

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is shut down.
///
/// The bound address (useful with port 0) is available from
/// `Handle::listening` once the listener is up.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::AddrInUse | ErrorKind::AddrNotAvailable | ErrorKind::PermissionDenied => {
                ServerError::Bind(e)
            }
            _ => ServerError::Server(e.to_string()),
        })?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
