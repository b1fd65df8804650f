//! Request middleware shared by both HTTP surfaces.
//!
//! Three layers wrap every route: structured start/completion logging, a
//! panic-to-500 boundary so a faulting handler never takes the listener
//! down, and a per-request deadline derived from the surface's write
//! timeout. Handlers and the tracker have no awareness of any of them.

use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures_util::FutureExt;

/// Log request start and completion with method, path, and duration.
pub async fn trace_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tracing::info!(%method, %path, "request started");
    let start = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = res.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );
    res
}

/// Convert a panicking handler into a generic 500 response.
///
/// The downstream future is the unit of containment: whatever unwinds out
/// of it is logged with its payload and swallowed, and the listener keeps
/// serving.
pub async fn recover_panics(req: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(res) => res,
        Err(panic) => {
            tracing::error!(error = %panic_message(&panic), "panic recovered in request handler");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

/// Abandon a request that exceeds the surface's deadline.
///
/// The tracker lock is never held across an await point, so cutting the
/// handler future off here cannot leave shared state locked or torn.
pub async fn deadline(limit: Duration, req: Request, next: Next) -> Response {
    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(res) => res,
        Err(_) => {
            tracing::warn!(
                timeout_ms = limit.as_millis() as u64,
                "request exceeded deadline"
            );
            (StatusCode::REQUEST_TIMEOUT, "request timeout").into_response()
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
