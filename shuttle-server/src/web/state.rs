//! Application state for the web layer.

use std::sync::Arc;

use crate::shuttle::ShuttleClient;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shuttle site client
    pub shuttle: Arc<ShuttleClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(shuttle: ShuttleClient) -> Self {
        Self {
            shuttle: Arc::new(shuttle),
        }
    }
}
