//! Shared application state for the iptrack server.

use std::sync::Arc;

use iptrack_core::tracker::IpTracker;

/// One tracker instance shared by both HTTP surfaces.
///
/// Constructed explicitly in `main` and handed by reference into each
/// router; neither surface owns it exclusively.
#[derive(Clone)]
pub struct AppState {
    tracker: Arc<IpTracker>,
}

impl AppState {
    pub fn new(tracker: Arc<IpTracker>) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &IpTracker {
        &self.tracker
    }
}
