//! # Integration Flows
//!
//! - `plugin_order`: master-file style rules, as a game plugin provider
//!   would declare them
//! - `provider_flow`: store-backed refresh of persisted sort orders

pub mod plugin_order;
pub mod provider_flow;
