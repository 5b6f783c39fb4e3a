//! # LO-Sorter: Rule-Based Load Order Engine
//!
//! Computes a deterministic total order over items that only carry partial,
//! declarative ordering rules (`First`, `Before(x)`, `After(x)`).
//! Placement is level-order: every item whose dependencies are already placed
//! is placed in the same iteration, ordered by an optional tie-breaker.
//!
//! ## Architecture
//!
//! - **Domain**: Rules, dependency sets, placement state, errors, invariants
//! - **Algorithms**: Dependency resolution, ready-set extraction, tie-breaking,
//!   parallel partitioning
//! - **Ports**: Inbound (`SortApi`) and Outbound (`SortOrderStore`)
//! - **Application**: `Sorter` orchestration and `SortOrderProvider`
//! - **Adapters**: In-memory sort order store
//!
//! ## Example
//!
//! ```
//! use lo_sorter::algorithms::ascending;
//! use lo_sorter::{Rule, SortApi, Sorter};
//!
//! let items = vec![
//!     ("c", vec![Rule::After("a")]),
//!     ("b", vec![Rule::After("a")]),
//!     ("a", vec![]),
//! ];
//! let sorted = Sorter::new()
//!     .sort(items, |i| i.0, |i| i.1.clone(), Some(&ascending::<&str>))
//!     .unwrap();
//!
//! let ids: Vec<_> = sorted.iter().map(|i| i.0).collect();
//! assert_eq!(ids, vec!["a", "b", "c"]);
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::InMemorySortOrderStore;
pub use application::provider::SortOrderProvider;
pub use application::sorter::{assign_sort_indices, Sorter};
pub use config::SorterConfig;
pub use domain::entities::*;
pub use domain::errors::{ProviderError, SortError, SortResult, StoreError};
pub use domain::rules::Rule;
pub use ports::inbound::SortApi;
pub use ports::outbound::SortOrderStore;
