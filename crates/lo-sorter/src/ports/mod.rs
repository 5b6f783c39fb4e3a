//! Ports module for load order sorting
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::SortApi;
pub use outbound::SortOrderStore;
