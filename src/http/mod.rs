//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP listener driven by `axum-server`
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
