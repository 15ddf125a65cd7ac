//! Receipt storage.
//!
//! Handlers only see the [`ReceiptStore`] trait, so the in-memory map can be
//! replaced by a persistent backend without touching the routes.
//!
//! # Backends
//!
//! - [`memory::InMemoryReceiptStore`] - process-lifetime `HashMap` behind a
//!   single mutex; entries are never updated, evicted or deleted

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use receipt_points_core::{Points, ReceiptId};

pub use memory::InMemoryReceiptStore;

/// Errors a storage backend can report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached or failed mid-operation.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Create-and-lookup storage for scored receipts.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Store `points` under a freshly generated, never-before-used ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    async fn create(&self, points: Points) -> Result<ReceiptId, StoreError>;

    /// Get the points stored under `id`, or `None` if there are none.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    async fn lookup(&self, id: &ReceiptId) -> Result<Option<Points>, StoreError>;
}
