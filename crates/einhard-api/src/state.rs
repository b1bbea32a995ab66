//! Shared application state for the dataset API.

use std::sync::Arc;

use einhard_dataset::DatasetRegistry;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// registry starts empty and lives as long as the server.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Every dataset created through the API.
    pub registry: Arc<RwLock<DatasetRegistry>>,
}

impl AppState {
    /// Create a new application state with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state around an existing registry.
    pub fn with_registry(registry: DatasetRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }
}
