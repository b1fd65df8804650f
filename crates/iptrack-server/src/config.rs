//! Server config loader (environment-sourced, strict validation).
//!
//! Every knob has a documented default so the process runs with an empty
//! environment. Timeout values are whole seconds, with or without a
//! trailing `s` (`10` and `10s` are equivalent). Values that fail to parse
//! fall back to the default rather than aborting startup; values that parse
//! but are out of range (port 0, zero timeouts) are rejected by `validate`.
//!
//! | variable | default |
//! |---|---|
//! | `LOG_SERVER_PORT` | 5000 |
//! | `LOG_SERVER_READ_TIMEOUT` (secs) | 10 |
//! | `LOG_SERVER_WRITE_TIMEOUT` (secs) | 10 |
//! | `LOG_SERVER_IDLE_TIMEOUT` (secs) | 60 |
//! | `METRICS_SERVER_PORT` | 9102 |
//! | `METRICS_SERVER_READ_TIMEOUT` (secs) | 5 |
//! | `METRICS_SERVER_WRITE_TIMEOUT` (secs) | 5 |
//! | `METRICS_SERVER_IDLE_TIMEOUT` (secs) | 60 |
//! | `SHUTDOWN_GRACE_TIMEOUT` (secs) | 30 |
//!
//! The read and write timeouts are enforced as a whole-request deadline on
//! the surface they belong to; the idle timeout is accepted for interface
//! compatibility with existing deployments.

use std::time::Duration;

use iptrack_core::error::{IpTrackError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub ingest: ServerConfig,
    pub metrics: ServerConfig,
    pub shutdown_grace: Duration,
}

/// Per-surface listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an injected lookup so tests never mutate the real env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let cfg = Self {
            ingest: ServerConfig {
                port: env_u16(&lookup, "LOG_SERVER_PORT", 5000),
                read_timeout: env_secs(&lookup, "LOG_SERVER_READ_TIMEOUT", 10),
                write_timeout: env_secs(&lookup, "LOG_SERVER_WRITE_TIMEOUT", 10),
                idle_timeout: env_secs(&lookup, "LOG_SERVER_IDLE_TIMEOUT", 60),
            },
            metrics: ServerConfig {
                port: env_u16(&lookup, "METRICS_SERVER_PORT", 9102),
                read_timeout: env_secs(&lookup, "METRICS_SERVER_READ_TIMEOUT", 5),
                write_timeout: env_secs(&lookup, "METRICS_SERVER_WRITE_TIMEOUT", 5),
                idle_timeout: env_secs(&lookup, "METRICS_SERVER_IDLE_TIMEOUT", 60),
            },
            shutdown_grace: env_secs(&lookup, "SHUTDOWN_GRACE_TIMEOUT", 30),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.ingest.validate("log server")?;
        self.metrics.validate("metrics server")?;
        if self.shutdown_grace.is_zero() {
            return Err(IpTrackError::BadRequest(
                "SHUTDOWN_GRACE_TIMEOUT must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl ServerConfig {
    fn validate(&self, surface: &str) -> Result<()> {
        if self.port == 0 {
            return Err(IpTrackError::BadRequest(format!(
                "{surface} port must not be 0"
            )));
        }
        for (name, d) in [
            ("read timeout", self.read_timeout),
            ("write timeout", self.write_timeout),
            ("idle timeout", self.idle_timeout),
        ] {
            if d.is_zero() {
                return Err(IpTrackError::BadRequest(format!(
                    "{surface} {name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }
}

fn env_u16(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u16) -> u16 {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

// Timeout values are whole seconds; a trailing `s` is tolerated so the
// original deployments' `10s`-style values keep working.
fn env_secs(lookup: &impl Fn(&str) -> Option<String>, key: &str, default_secs: u64) -> Duration {
    let secs = lookup(key)
        .and_then(|v| {
            let v = v.trim();
            v.strip_suffix('s').unwrap_or(v).trim().parse().ok()
        })
        .unwrap_or(default_secs);
    Duration::from_secs(secs)
}
