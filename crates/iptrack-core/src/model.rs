//! Data contracts for ingested log events.

use serde::{Deserialize, Serialize};

/// One incoming log event.
///
/// Only `ip` drives tracker state; `timestamp` and `url` are informational
/// and not retained. Missing fields decode to empty strings rather than
/// failing, so a partial event still reaches the tracker with whatever `ip`
/// value it carried (including the empty string).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub url: String,
}
