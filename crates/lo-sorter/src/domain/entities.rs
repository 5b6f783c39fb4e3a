//! Core entities for load order sorting

use super::rules::Rule;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Bounds every item id must satisfy.
///
/// Ids are hash keys, are shared between rayon workers, and show up in
/// error diagnostics.
pub trait SortKey: Eq + Hash + Clone + Debug + Send + Sync {}

impl<T> SortKey for T where T: Eq + Hash + Clone + Debug + Send + Sync {}

/// Ids an item must follow, deduplicated, in discovery order.
///
/// Computed once per sort and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencySet<Id> {
    ids: Vec<Id>,
}

impl<Id: SortKey> DependencySet<Id> {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Builds a set from `ids`, dropping repeats while keeping first-seen order.
    pub fn from_ids(ids: impl IntoIterator<Item = Id>) -> Self {
        let mut scratch = HashSet::new();
        let mut set = Self::new();
        for id in ids {
            set.insert_with(id, &mut scratch);
        }
        set
    }

    /// Inserts `id` unless `scratch` has already seen it.
    ///
    /// `scratch` is owned by the caller so one allocation can serve a whole
    /// resolution partition.
    pub(crate) fn insert_with(&mut self, id: Id, scratch: &mut HashSet<Id>) {
        if scratch.insert(id.clone()) {
            self.ids.push(id);
        }
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when every dependency is already placed.
    pub fn is_satisfied_by(&self, used: &HashSet<Id>) -> bool {
        self.ids.iter().all(|id| used.contains(id))
    }

    /// Dependencies not yet placed, in discovery order.
    pub fn missing_from(&self, used: &HashSet<Id>) -> Vec<Id> {
        self.ids
            .iter()
            .filter(|id| !used.contains(id))
            .cloned()
            .collect()
    }
}

impl<Id: SortKey> Default for DependencySet<Id> {
    fn default() -> Self {
        Self::new()
    }
}

/// Working state of a single sort call.
///
/// Items are addressed by their input index; `remaining` is kept in input
/// order so every derived ready set is too.
#[derive(Debug)]
pub struct PlacementState<Id> {
    /// Item ids by input index
    pub ids: Vec<Id>,
    /// Dependency sets by input index
    pub dependencies: Vec<DependencySet<Id>>,
    /// Input indices not yet placed, ascending
    pub remaining: Vec<usize>,
    /// Ids already placed
    pub used: HashSet<Id>,
}

impl<Id: SortKey> PlacementState<Id> {
    pub fn new(ids: Vec<Id>, dependencies: Vec<DependencySet<Id>>) -> Self {
        let remaining = (0..ids.len()).collect();
        let used = HashSet::with_capacity(ids.len());
        Self {
            ids,
            dependencies,
            remaining,
            used,
        }
    }

    pub fn is_done(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn placed_count(&self) -> usize {
        self.used.len()
    }

    /// Marks `ready` as placed and drops them from `remaining`.
    ///
    /// `ready` must be a subset of `remaining`.
    pub fn place(&mut self, ready: &[usize]) {
        let placed: HashSet<usize> = ready.iter().copied().collect();
        for &index in ready {
            self.used.insert(self.ids[index].clone());
        }
        self.remaining.retain(|index| !placed.contains(index));
    }

    /// Diagnostics for every item still waiting, in input order.
    pub fn unplaced(&self) -> Vec<Unplaced<Id>> {
        self.remaining
            .iter()
            .map(|&index| Unplaced {
                id: self.ids[index].clone(),
                waiting_on: self.dependencies[index].missing_from(&self.used),
            })
            .collect()
    }
}

/// An item that could not be placed, with the dependencies it still waits on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unplaced<Id> {
    pub id: Id,
    pub waiting_on: Vec<Id>,
}

/// Zero-based position of an item in a computed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SortIndex(pub usize);

impl SortIndex {
    pub fn value(&self) -> usize {
        self.0
    }
}

/// Identifies one persisted sort order (e.g. the plugin order of a loadout).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrderId(pub u64);

/// A stored item together with the rules it declares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortableEntry<Id> {
    pub id: Id,
    pub rules: Vec<Rule<Id>>,
}

impl<Id> SortableEntry<Id> {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            rules: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: Vec<Rule<Id>>) -> Self {
        self.rules = rules;
        self
    }
}

/// Shared cancellation signal checked between placement levels.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
