//! Load Order Sorter
//!
//! Orchestrates one sort:
//! 1. Validate input size (and optionally rule references)
//! 2. Resolve every item's dependency set
//! 3. Repeatedly extract the ready set, tie-break it, and place it
//! 4. Fail atomically when a level comes up empty

use crate::algorithms::{extract_ready, order_ready, resolve_all, Comparer, Partitioner};
use crate::config::SorterConfig;
use crate::domain::entities::{CancelFlag, PlacementState, SortIndex, SortKey};
use crate::domain::errors::{SortError, SortResult};
use crate::domain::rules::Rule;
use crate::ports::inbound::SortApi;
use std::collections::HashSet;
use tracing::{debug, info, info_span, warn};

/// Rule-based load order sorter
///
/// Holds no state between calls; one instance can serve concurrent callers.
#[derive(Clone, Debug)]
pub struct Sorter {
    config: SorterConfig,
    partitioner: Partitioner,
}

impl Sorter {
    /// Create a new sorter with default config
    pub fn new() -> Self {
        Self::with_config(SorterConfig::default())
    }

    /// Create a new sorter with custom config
    pub fn with_config(config: SorterConfig) -> Self {
        let partitioner = Partitioner::from_config(&config);
        Self { config, partitioner }
    }

    fn validate_input<Id: SortKey>(
        &self,
        ids: &[Id],
        rules: &[Vec<Rule<Id>>],
    ) -> SortResult<(), Id> {
        if let Some(max) = self.config.max_items {
            if ids.len() > max {
                return Err(SortError::TooManyItems {
                    count: ids.len(),
                    max,
                });
            }
        }

        if !self.config.validate_references {
            return Ok(());
        }

        let known: HashSet<&Id> = ids.iter().collect();
        for (id, item_rules) in ids.iter().zip(rules) {
            let unknown = item_rules
                .iter()
                .filter_map(Rule::other)
                .find(|other| !known.contains(other));

            if let Some(missing) = unknown {
                warn!(item = ?id, missing = ?missing, "Rule references unknown item");
                return Err(SortError::UnknownDependency {
                    item: id.clone(),
                    missing: missing.clone(),
                });
            }
        }

        Ok(())
    }

    /// Computes placement levels as input indices.
    fn place_levels<Id: SortKey>(
        &self,
        ids: Vec<Id>,
        rules: Vec<Vec<Rule<Id>>>,
        comparer: Option<Comparer<'_, Id>>,
        cancel: Option<&CancelFlag>,
    ) -> SortResult<Vec<Vec<usize>>, Id> {
        let total = ids.len();
        let span = info_span!("lo_sort", items = total);
        let _entered = span.enter();

        self.validate_input(&ids, &rules)?;

        let strategy = self.partitioner.plan(total);
        let dependencies = resolve_all(&ids, &rules, &self.partitioner);
        let mut state = PlacementState::new(ids, dependencies);
        let mut levels: Vec<Vec<usize>> = Vec::new();

        while !state.is_done() {
            if cancel.is_some_and(CancelFlag::is_cancelled) {
                warn!(placed = state.placed_count(), total, "Sort cancelled");
                return Err(SortError::Cancelled {
                    placed: state.placed_count(),
                    total,
                });
            }

            let mut ready = extract_ready(&state, &self.partitioner);
            if ready.is_empty() {
                let unplaced = state.unplaced();
                warn!(
                    unplaced = unplaced.len(),
                    placed = state.placed_count(),
                    "Cyclic dependency, no item can be placed"
                );
                return Err(SortError::CyclicDependency { unplaced });
            }

            order_ready(&mut ready, &state.ids, comparer);
            state.place(&ready);

            debug!(
                level = levels.len(),
                ready = ready.len(),
                remaining = state.remaining.len(),
                "Placed level"
            );
            levels.push(ready);
        }

        info!(
            items = total,
            levels = levels.len(),
            parallel = strategy.is_parallel(),
            "Sort complete"
        );

        Ok(levels)
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits items into the id and rule snapshots the engine works on.
fn snapshot<T, Id, FI, FR>(
    items: &[T],
    id_selector: FI,
    rule_selector: FR,
) -> (Vec<Id>, Vec<Vec<Rule<Id>>>)
where
    FI: Fn(&T) -> Id,
    FR: Fn(&T) -> Vec<Rule<Id>>,
{
    let ids = items.iter().map(&id_selector).collect();
    let rules = items.iter().map(&rule_selector).collect();
    (ids, rules)
}

impl SortApi for Sorter {
    fn sort_with_cancel<T, Id, FI, FR>(
        &self,
        items: Vec<T>,
        id_selector: FI,
        rule_selector: FR,
        comparer: Option<Comparer<'_, Id>>,
        cancel: Option<&CancelFlag>,
    ) -> SortResult<Vec<T>, Id>
    where
        Id: SortKey,
        FI: Fn(&T) -> Id,
        FR: Fn(&T) -> Vec<Rule<Id>>,
    {
        let (ids, rules) = snapshot(&items, id_selector, rule_selector);
        let levels = self.place_levels(ids, rules, comparer, cancel)?;

        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        Ok(levels
            .iter()
            .flatten()
            .filter_map(|&index| slots[index].take())
            .collect())
    }

    fn sort_levels<T, Id, FI, FR>(
        &self,
        items: Vec<T>,
        id_selector: FI,
        rule_selector: FR,
        comparer: Option<Comparer<'_, Id>>,
    ) -> SortResult<Vec<Vec<T>>, Id>
    where
        Id: SortKey,
        FI: Fn(&T) -> Id,
        FR: Fn(&T) -> Vec<Rule<Id>>,
    {
        let (ids, rules) = snapshot(&items, id_selector, rule_selector);
        let levels = self.place_levels(ids, rules, comparer, None)?;

        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        Ok(levels
            .iter()
            .map(|level| level.iter().filter_map(|&index| slots[index].take()).collect())
            .collect())
    }
}

/// Pairs every sorted item's id with its position.
pub fn assign_sort_indices<T, Id, FI>(sorted: &[T], id_selector: FI) -> Vec<(Id, SortIndex)>
where
    FI: Fn(&T) -> Id,
{
    sorted
        .iter()
        .enumerate()
        .map(|(position, item)| (id_selector(item), SortIndex(position)))
        .collect()
}
