//! Application layer: sort orchestration and sort order refresh.

pub mod provider;
pub mod sorter;

pub use provider::SortOrderProvider;
pub use sorter::{assign_sort_indices, Sorter};
