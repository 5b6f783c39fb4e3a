//! Error types for load order sorting

use super::entities::{SortOrderId, Unplaced};
use std::fmt::Debug;
use thiserror::Error;

/// Result type for sort operations
pub type SortResult<T, Id> = Result<T, SortError<Id>>;

/// All errors that can occur while sorting
#[derive(Debug, Error)]
pub enum SortError<Id: Debug> {
    /// A placement level came up empty while items remained.
    ///
    /// Either a genuine rule cycle or a rule naming an id outside the input.
    #[error("Cyclic dependency: {} item(s) could not be placed", .unplaced.len())]
    CyclicDependency { unplaced: Vec<Unplaced<Id>> },

    /// A rule references an id that is not part of the input
    #[error("Item {item:?} references unknown item {missing:?}")]
    UnknownDependency { item: Id, missing: Id },

    /// The cancel flag was raised between placement levels
    #[error("Sort cancelled after placing {placed} of {total} items")]
    Cancelled { placed: usize, total: usize },

    /// Input exceeded the configured item limit
    #[error("Too many items: {count} > {max}")]
    TooManyItems { count: usize, max: usize },
}

impl<Id: Debug> SortError<Id> {
    /// Ids that could not be placed, for cycle errors.
    pub fn unplaced_ids(&self) -> Vec<&Id> {
        match self {
            SortError::CyclicDependency { unplaced } => unplaced.iter().map(|u| &u.id).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, SortError::CyclicDependency { .. })
    }
}

/// Errors from a sort order store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Sort order not found: {0:?}")]
    NotFound(SortOrderId),

    #[error("Store backend failed: {0}")]
    Backend(String),
}

/// Errors from refreshing a persisted sort order
#[derive(Debug, Error)]
pub enum ProviderError<Id: Debug + 'static> {
    #[error(transparent)]
    Sort(#[from] SortError<Id>),

    #[error(transparent)]
    Store(#[from] StoreError),
}
