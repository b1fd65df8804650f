//! Axum router wiring for the two HTTP surfaces.
//!
//! Both routers share the same middleware stack (outermost first): request
//! logging, panic recovery, per-request deadline. Wrong-method requests get
//! 405 from axum's method routing.

use std::time::Duration;

use axum::extract::Request;
use axum::middleware::{from_fn, Next};
use axum::routing::{get, post};
use axum::Router;

use crate::{app_state::AppState, middleware, ops};

/// Surface A: log ingestion plus liveness.
pub fn ingest_router(state: AppState, request_deadline: Duration) -> Router {
    Router::new()
        .route("/logs", post(ops::ingest_log))
        .route("/health", get(ops::health))
        .layer(from_fn(move |req: Request, next: Next| {
            middleware::deadline(request_deadline, req, next)
        }))
        .layer(from_fn(middleware::recover_panics))
        .layer(from_fn(middleware::trace_requests))
        .with_state(state)
}

/// Surface B: metrics exposition plus liveness.
pub fn metrics_router(state: AppState, request_deadline: Duration) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics))
        .route("/health", get(ops::health))
        .layer(from_fn(move |req: Request, next: Next| {
            middleware::deadline(request_deadline, req, next)
        }))
        .layer(from_fn(middleware::recover_panics))
        .layer(from_fn(middleware::trace_requests))
        .with_state(state)
}
