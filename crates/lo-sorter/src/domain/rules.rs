//! Ordering rules attached to sortable items

use serde::{Deserialize, Serialize};

/// A declarative constraint an item holds about its position.
///
/// Rules only ever name other items by id. An item referencing an id that is
/// not part of the sorted set can never become ready.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule<Id> {
    /// No predecessor except other `First` items.
    First,
    /// The holder must be placed before `other`.
    Before(Id),
    /// The holder must be placed after `other`.
    After(Id),
}

impl<Id> Rule<Id> {
    /// Returns the id this rule references, if any.
    pub fn other(&self) -> Option<&Id> {
        match self {
            Rule::First => None,
            Rule::Before(other) | Rule::After(other) => Some(other),
        }
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Rule::First)
    }
}

/// Returns true if any rule in `rules` is `First`.
pub fn declares_first<Id>(rules: &[Rule<Id>]) -> bool {
    rules.iter().any(Rule::is_first)
}
