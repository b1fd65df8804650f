//! HTTP handlers for both surfaces.
//!
//! - `POST /logs`  : ingest one log event (surface A)
//! - `GET /metrics`: Prometheus text exposition (surface B)
//! - `GET /health` : liveness (both surfaces)

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use iptrack_core::model::LogEntry;

use crate::app_state::AppState;

/// Decode a log event and feed its IP to the tracker.
///
/// Fire-and-forget from the caller's perspective: a well-formed body always
/// gets 202, whether or not the IP was already known. The `ip` field is not
/// validated as an address literal; whatever string arrives is tracked.
///
/// The raw body is decoded directly so a missing `Content-Type` header does
/// not reject an otherwise valid event; only an actual decode failure is a
/// client error.
pub async fn ingest_log(State(state): State<AppState>, body: Bytes) -> Response {
    let entry: LogEntry = match serde_json::from_slice(&body) {
        Ok(entry) => entry,
        Err(e) => {
            tracing::debug!(error = %e, "invalid JSON payload");
            return (StatusCode::BAD_REQUEST, "invalid JSON").into_response();
        }
    };

    state.tracker().add(&entry.ip);

    (StatusCode::ACCEPTED, Json(json!({ "status": "accepted" }))).into_response()
}

/// Render the unique-IP gauge in Prometheus text exposition format.
///
/// The count is read fresh on every scrape; nothing is cached.
pub async fn metrics(State(state): State<AppState>) -> Response {
    let count = state.tracker().count();

    let body = format!(
        "# HELP unique_ip_addresses Total number of unique IP addresses seen\n\
         # TYPE unique_ip_addresses gauge\n\
         unique_ip_addresses {count}\n"
    );

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
        .into_response()
}

/// Liveness probe. Consults nothing; present on both surfaces.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}
