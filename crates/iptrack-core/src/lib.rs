//! iptrack core: the unique-IP tracker, the ingested log model, and error types.
//!
//! This crate defines the concurrency-safe tracking state and the data
//! contracts shared by the HTTP server and tooling. It intentionally carries
//! no transport or runtime dependencies so it can be reused in multiple
//! contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `IpTrackError`/`Result` so production
//! processes do not crash on malformed input or bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod tracker;

/// Shared result type.
pub use error::{IpTrackError, Result};
pub use model::LogEntry;
pub use tracker::IpTracker;
