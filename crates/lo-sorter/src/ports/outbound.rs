//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::{SortIndex, SortKey, SortOrderId, SortableEntry};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Persistent home of sortable entries and their computed positions.
///
/// Implemented by whatever transactional store backs a sort order.
#[async_trait]
pub trait SortOrderStore<Id: SortKey + 'static>: Send + Sync {
    /// Load every entry that takes part in `sort_order`, with its rules.
    async fn load_entries(
        &self,
        sort_order: SortOrderId,
    ) -> Result<Vec<SortableEntry<Id>>, StoreError>;

    /// Replace the persisted positions of `sort_order`.
    async fn persist_sort_order(
        &self,
        sort_order: SortOrderId,
        indices: Vec<(Id, SortIndex)>,
    ) -> Result<(), StoreError>;

    /// Load the persisted positions of `sort_order`, in no particular order.
    async fn load_sort_order(
        &self,
        sort_order: SortOrderId,
    ) -> Result<Vec<(Id, SortIndex)>, StoreError>;
}
