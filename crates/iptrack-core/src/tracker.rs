//! Concurrency-safe registry of distinct IP addresses.
//!
//! A single `RwLock<HashMap>` gives the single-writer / multiple-reader
//! discipline the server relies on: `add` and `clear` take the write lock,
//! `count` and `snapshot` take the read lock, so readers never observe a
//! half-applied write. No method is async and no lock is held across an
//! await point.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

/// Thread-safe registry of unique IP addresses with last-seen timestamps.
///
/// Constructed once at process start and shared via `Arc` by every HTTP
/// surface. Cardinality grows monotonically; nothing evicts entries, only
/// [`IpTracker::clear`] empties the map.
#[derive(Default)]
pub struct IpTracker {
    ips: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl IpTracker {
    pub fn new() -> Self {
        Self {
            ips: RwLock::new(HashMap::new()),
        }
    }

    /// Record that `ip` was observed now.
    ///
    /// New addresses are inserted, known ones get their timestamp refreshed
    /// (last-seen, not first-seen). Any string is accepted as-is; the tracker
    /// does not validate address syntax.
    pub fn add(&self, ip: &str) {
        let mut ips = self.ips.write().unwrap_or_else(PoisonError::into_inner);
        if !ips.contains_key(ip) {
            tracing::debug!(%ip, "new unique IP tracked");
        }
        ips.insert(ip.to_string(), Utc::now());
    }

    /// Number of distinct addresses, as a consistent point-in-time value.
    pub fn count(&self) -> usize {
        self.ips
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Independent copy of the current address -> last-seen mapping.
    ///
    /// Mutations on either side after the call are invisible to the other.
    pub fn snapshot(&self) -> HashMap<String, DateTime<Utc>> {
        self.ips
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically drop every tracked address. Test isolation helper; not
    /// part of the steady-state request flow.
    pub fn clear(&self) {
        self.ips
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        tracing::info!("tracker cleared");
    }
}
