//! HTTP route table.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request. Unmatched paths and methods fall through to the
//! framework defaults (404 and 405).

pub mod health;
pub mod hello;

use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::{middleware, routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    let hello_routes = Router::new().route("/hello", get(hello::hello));

    // Health check - never cached, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    Router::new()
        .merge(hello_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
