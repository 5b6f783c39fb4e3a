//! Sort Order Provider
//!
//! Recomputes a persisted sort order: loads the participating entries and
//! their rules from the store, sorts them, and writes every entry's
//! `SortIndex` back. Refreshes of one provider are serialised so two
//! concurrent recomputations never interleave their writes.

use crate::algorithms::ascending;
use crate::application::sorter::{assign_sort_indices, Sorter};
use crate::domain::entities::{SortIndex, SortKey, SortOrderId};
use crate::domain::errors::ProviderError;
use crate::ports::inbound::SortApi;
use crate::ports::outbound::SortOrderStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct SortOrderProvider<S, A = Sorter> {
    store: Arc<S>,
    sorter: A,
    refresh_lock: Mutex<()>,
}

impl<S> SortOrderProvider<S, Sorter> {
    /// Create a provider backed by a default sorter
    pub fn new(store: Arc<S>) -> Self {
        Self::with_sorter(store, Sorter::new())
    }
}

impl<S, A: SortApi> SortOrderProvider<S, A> {
    pub fn with_sorter(store: Arc<S>, sorter: A) -> Self {
        Self {
            store,
            sorter,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Sorts the entries of `sort_order` and persists their positions.
    ///
    /// Simultaneously ready entries are ordered by ascending id. On failure
    /// nothing is persisted and the previous order stays in place.
    pub async fn refresh_sort_order<Id>(
        &self,
        sort_order: SortOrderId,
    ) -> Result<Vec<(Id, SortIndex)>, ProviderError<Id>>
    where
        Id: SortKey + Ord + 'static,
        S: SortOrderStore<Id>,
    {
        let _guard = self.refresh_lock.lock().await;

        let entries = self.store.load_entries(sort_order).await?;
        info!(
            sort_order = sort_order.0,
            entries = entries.len(),
            "Refreshing sort order"
        );

        let sorted = self
            .sorter
            .sort(
                entries,
                |e| e.id.clone(),
                |e| e.rules.clone(),
                Some(&ascending::<Id>),
            )
            .inspect_err(|err| {
                warn!(sort_order = sort_order.0, error = %err, "Sort order refresh failed")
            })?;

        let indices = assign_sort_indices(&sorted, |e| e.id.clone());
        self.store
            .persist_sort_order(sort_order, indices.clone())
            .await?;

        Ok(indices)
    }

    /// Persisted ids of `sort_order`, ordered by `SortIndex`.
    pub async fn current_sorting<Id>(
        &self,
        sort_order: SortOrderId,
    ) -> Result<Vec<Id>, ProviderError<Id>>
    where
        Id: SortKey + 'static,
        S: SortOrderStore<Id>,
    {
        let mut indices = self.store.load_sort_order(sort_order).await?;
        indices.sort_by_key(|(_, index)| *index);
        Ok(indices.into_iter().map(|(id, _)| id).collect())
    }
}
