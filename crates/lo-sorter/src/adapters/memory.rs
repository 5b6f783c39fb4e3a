//! In-Memory Sort Order Store Adapter
//!
//! Implements `SortOrderStore` on top of a map guarded by an async lock.
//! Entries and persisted positions are kept apart, so replacing the entries
//! of a sort order leaves its last persisted positions untouched.

use crate::domain::entities::{SortIndex, SortKey, SortOrderId, SortableEntry};
use crate::domain::errors::StoreError;
use crate::ports::outbound::SortOrderStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

struct StoredOrder<Id> {
    entries: Vec<SortableEntry<Id>>,
    indices: Vec<(Id, SortIndex)>,
}

pub struct InMemorySortOrderStore<Id> {
    orders: RwLock<HashMap<SortOrderId, StoredOrder<Id>>>,
}

impl<Id: SortKey> InMemorySortOrderStore<Id> {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the entries of `sort_order`, creating it if needed.
    pub async fn insert_entries(&self, sort_order: SortOrderId, entries: Vec<SortableEntry<Id>>) {
        let mut orders = self.orders.write().await;
        match orders.get_mut(&sort_order) {
            Some(stored) => stored.entries = entries,
            None => {
                orders.insert(
                    sort_order,
                    StoredOrder {
                        entries,
                        indices: Vec::new(),
                    },
                );
            }
        }
    }

    /// Drop `sort_order` and everything persisted for it.
    pub async fn remove(&self, sort_order: SortOrderId) -> bool {
        self.orders.write().await.remove(&sort_order).is_some()
    }
}

impl<Id: SortKey> Default for InMemorySortOrderStore<Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<Id: SortKey + 'static> SortOrderStore<Id> for InMemorySortOrderStore<Id> {
    async fn load_entries(
        &self,
        sort_order: SortOrderId,
    ) -> Result<Vec<SortableEntry<Id>>, StoreError> {
        let orders = self.orders.read().await;
        orders
            .get(&sort_order)
            .map(|stored| stored.entries.clone())
            .ok_or(StoreError::NotFound(sort_order))
    }

    async fn persist_sort_order(
        &self,
        sort_order: SortOrderId,
        indices: Vec<(Id, SortIndex)>,
    ) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        let stored = orders
            .get_mut(&sort_order)
            .ok_or(StoreError::NotFound(sort_order))?;

        debug!(sort_order = sort_order.0, count = indices.len(), "Persisting sort order");
        stored.indices = indices;
        Ok(())
    }

    async fn load_sort_order(
        &self,
        sort_order: SortOrderId,
    ) -> Result<Vec<(Id, SortIndex)>, StoreError> {
        let orders = self.orders.read().await;
        orders
            .get(&sort_order)
            .map(|stored| stored.indices.clone())
            .ok_or(StoreError::NotFound(sort_order))
    }
}
