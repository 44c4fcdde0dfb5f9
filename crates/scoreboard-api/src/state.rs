//! Shared application state.

use std::sync::Arc;

use scoreboard_core::clock::Clock;
use scoreboard_core::store::ScoreStore;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The process-wide score registry.
    pub store: Arc<ScoreStore>,
}

impl AppState {
    /// Create application state around an empty store stamped by `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(ScoreStore::new(clock)),
        }
    }
}
