//! Charkha Bazaar storefront library.
//!
//! This crate provides the storefront JSON API as a library, allowing it to
//! be tested and reused. The binary in `main.rs` wires it to real backends.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod config;
pub mod error;
pub mod middleware;
pub mod payments;
pub mod routes;
pub mod state;
pub mod store;

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    routing::get,
};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the full application router.
///
/// Health endpoints, the API routes, the session layer, and the request ID
/// middleware are all attached; the caller adds process-level layers
/// (Sentry, tracing) on top.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    // The request span declares request_id empty; the request ID middleware
    // fills it in once the ID is known.
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = tracing::field::Empty,
        )
    });

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(session_layer)
        .layer(trace_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// The stores are in-process, so readiness is a catalog read: if the seeded
/// catalog is reachable the service can answer traffic.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.products().list().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
