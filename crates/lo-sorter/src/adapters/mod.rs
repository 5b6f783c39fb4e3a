//! Adapters for load order sorting
//!
//! Implementations of outbound ports.

pub mod memory;

pub use memory::InMemorySortOrderStore;
