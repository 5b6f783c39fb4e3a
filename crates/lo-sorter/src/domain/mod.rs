//! Domain module for load order sorting
//!
//! Contains rules, entities, errors, and invariants.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod rules;

pub use entities::*;
pub use errors::*;
pub use rules::*;
