//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::{InMemoryReceiptStore, ReceiptStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// receipt store and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Arc<dyn ReceiptStore>,
}

impl AppState {
    /// Create application state over any receipt store.
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn ReceiptStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Create application state backed by a fresh in-memory store.
    #[must_use]
    pub fn in_memory(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(InMemoryReceiptStore::new()))
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the receipt store.
    #[must_use]
    pub fn store(&self) -> &dyn ReceiptStore {
        self.inner.store.as_ref()
    }
}
