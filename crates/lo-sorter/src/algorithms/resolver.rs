//! Dependency Resolver
//!
//! Folds an item's own `After` rules together with the rules other items
//! declare about it into the set of ids it must follow:
//! - `target.After(x)` adds `x`
//! - `other.Before(target)` adds `other`
//! - `other.First` adds `other`, unless `target` is `First` itself
//!
//! `target.Before(x)` only constrains `x` and is picked up when `x` is
//! resolved. Each resolution is O(n) and independent of every other one.

use super::partition::Partitioner;
use crate::domain::entities::{DependencySet, SortKey};
use crate::domain::rules::{declares_first, Rule};
use std::collections::HashSet;

/// Resolves the dependency set of the item at input index `target`.
///
/// `ids` and `rules` are indexed by input position.
pub fn resolve_dependencies<Id: SortKey>(
    target: usize,
    ids: &[Id],
    rules: &[Vec<Rule<Id>>],
) -> DependencySet<Id> {
    let first_flags: Vec<bool> = rules.iter().map(|r| declares_first(r)).collect();
    let mut scratch = HashSet::new();
    resolve_with(target, ids, rules, &first_flags, &mut scratch)
}

/// Resolves every item, partitioned across workers for large inputs.
///
/// Every partition owns its scratch set, so workers share nothing mutable.
pub fn resolve_all<Id: SortKey>(
    ids: &[Id],
    rules: &[Vec<Rule<Id>>],
    partitioner: &Partitioner,
) -> Vec<DependencySet<Id>> {
    let first_flags: Vec<bool> = rules.iter().map(|r| declares_first(r)).collect();

    partitioner.map_ranges(ids.len(), |range| {
        let mut scratch = HashSet::new();
        range
            .map(|target| {
                scratch.clear();
                resolve_with(target, ids, rules, &first_flags, &mut scratch)
            })
            .collect()
    })
}

fn resolve_with<Id: SortKey>(
    target: usize,
    ids: &[Id],
    rules: &[Vec<Rule<Id>>],
    first_flags: &[bool],
    scratch: &mut HashSet<Id>,
) -> DependencySet<Id> {
    let mut set = DependencySet::new();
    let target_id = &ids[target];
    let target_first = first_flags[target];

    for rule in &rules[target] {
        if let Rule::After(other) = rule {
            set.insert_with(other.clone(), scratch);
        }
    }

    for (index, other_rules) in rules.iter().enumerate() {
        if index == target {
            continue;
        }

        let other_id = &ids[index];
        if first_flags[index] && !target_first {
            set.insert_with(other_id.clone(), scratch);
            continue;
        }

        let claims_before = other_rules
            .iter()
            .any(|rule| matches!(rule, Rule::Before(x) if x == target_id));
        if claims_before {
            set.insert_with(other_id.clone(), scratch);
        }
    }

    set
}
