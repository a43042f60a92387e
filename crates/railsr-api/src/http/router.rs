//! Axum router for the webhook receiver.
//!
//! Routes: `POST {path}` for deliveries, `GET /health` for liveness.
//! Middleware: tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::ReceiverState;

/// Build the receiver router with the delivery endpoint mounted at `path`.
pub fn build_router(state: ReceiverState, path: &str) -> Router {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    Router::new()
        .route(&path, post(handlers::webhook::receive_event))
        .route("/health", get(handlers::webhook::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
