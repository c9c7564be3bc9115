//! Application state shared across handlers.

use roster_core::config::AppConfig;
use roster_store::RecordStore;
use std::sync::Arc;

/// Shared application state.
///
/// Holds no per-request data: every handler reads its inputs from the
/// request and its rows from the store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Record store backed by a connection pool.
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
