//! Algorithms module for load order sorting
//!
//! Contains:
//! - Parallel partitioner
//! - Dependency resolver
//! - Ready-set extractor
//! - Tie-breaker

pub mod partition;
pub mod ready_set;
pub mod resolver;
pub mod tie_break;

pub use partition::{Partitioner, Strategy};
pub use ready_set::extract_ready;
pub use resolver::{resolve_all, resolve_dependencies};
pub use tie_break::{ascending, order_ready, Comparer};
