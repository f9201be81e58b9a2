//! jenkkuber: a minimal greeting service.
//!
//! Serves `GET /hello` with the fixed body `hello world`, plus a `/health`
//! liveness probe, on an axum server with graceful shutdown.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::{Error, Result};
pub use routes::create_router;
