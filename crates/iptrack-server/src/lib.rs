//! iptrack server library entry.
//!
//! This crate wires the env config, shared tracker state, routers for the
//! two HTTP surfaces (log ingestion and metrics), and the request
//! middleware into a runnable stack. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod middleware;
pub mod ops;
pub mod router;
