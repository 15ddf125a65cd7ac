//! In-memory receipt store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::instrument;

use receipt_points_core::{Points, ReceiptId, ScoredReceipt};

use super::{ReceiptStore, StoreError};

/// Receipt store backed by a mutex-guarded `HashMap`.
///
/// Every `create` and `lookup` takes the lock exactly once. Contents live
/// until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: Mutex<HashMap<ReceiptId, ScoredReceipt>>,
}

impl InMemoryReceiptStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.receipts.lock().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.receipts.lock().await.is_empty()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    #[instrument(skip(self))]
    async fn create(&self, points: Points) -> Result<ReceiptId, StoreError> {
        let mut receipts = self.receipts.lock().await;

        // Redraw on collision so IDs stay unique.
        loop {
            let id = ReceiptId::new();
            if let Entry::Vacant(slot) = receipts.entry(id) {
                slot.insert(ScoredReceipt { id, points });
                return Ok(id);
            }
            tracing::warn!(%id, "Receipt ID collision, generating another");
        }
    }

    #[instrument(skip(self))]
    async fn lookup(&self, id: &ReceiptId) -> Result<Option<Points>, StoreError> {
        let receipts = self.receipts.lock().await;
        Ok(receipts.get(id).map(|receipt| receipt.points))
    }
}
