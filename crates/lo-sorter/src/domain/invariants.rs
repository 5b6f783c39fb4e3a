//! Domain invariants for load order sorting
//!
//! Each check takes the input entries and the ids of a successful result in
//! placement order.

use super::entities::{SortKey, SortableEntry};
use super::rules::{declares_first, Rule};
use std::collections::HashMap;

fn positions<Id: SortKey>(order: &[Id]) -> HashMap<&Id, usize> {
    order.iter().enumerate().map(|(i, id)| (id, i)).collect()
}

/// INVARIANT-1: Permutation
/// The result holds every input id exactly once.
pub fn invariant_permutation<Id: SortKey>(entries: &[SortableEntry<Id>], order: &[Id]) -> bool {
    if entries.len() != order.len() {
        return false;
    }

    let index = positions(order);
    index.len() == order.len() && entries.iter().all(|e| index.contains_key(&e.id))
}

/// INVARIANT-2: After law
/// `A.After(B)` with `B` present implies `index(A) > index(B)`.
pub fn invariant_after_law<Id: SortKey>(entries: &[SortableEntry<Id>], order: &[Id]) -> bool {
    let index = positions(order);

    entries.iter().all(|entry| {
        entry.rules.iter().all(|rule| match rule {
            Rule::After(other) => match (index.get(&entry.id), index.get(other)) {
                (Some(me), Some(them)) => me > them,
                _ => true,
            },
            _ => true,
        })
    })
}

/// INVARIANT-3: Before law
/// `A.Before(B)` with `B` present implies `index(A) < index(B)`.
pub fn invariant_before_law<Id: SortKey>(entries: &[SortableEntry<Id>], order: &[Id]) -> bool {
    let index = positions(order);

    entries.iter().all(|entry| {
        entry.rules.iter().all(|rule| match rule {
            Rule::Before(other) if *other != entry.id => {
                match (index.get(&entry.id), index.get(other)) {
                    (Some(me), Some(them)) => me < them,
                    _ => true,
                }
            }
            _ => true,
        })
    })
}

/// INVARIANT-4: First block
/// Every `First` item precedes every item that does not declare `First`.
/// With a single `First` item this places it at index 0.
pub fn invariant_first_block<Id: SortKey>(entries: &[SortableEntry<Id>], order: &[Id]) -> bool {
    let firsts: Vec<&Id> = entries
        .iter()
        .filter(|e| declares_first(&e.rules))
        .map(|e| &e.id)
        .collect();

    order
        .iter()
        .take(firsts.len())
        .all(|id| firsts.contains(&id))
}
