//! Inbound Ports (Driving Ports / API)

use crate::algorithms::Comparer;
use crate::domain::entities::{CancelFlag, SortKey};
use crate::domain::errors::SortResult;
use crate::domain::rules::Rule;

/// Primary sorting API
pub trait SortApi: Send + Sync {
    /// Orders `items` so every rule holds, or fails atomically.
    ///
    /// `id_selector` and `rule_selector` are each called once per item.
    /// Items that become ready in the same iteration are ordered by
    /// `comparer` over their ids, or kept in input order without one.
    /// `cancel` is polled between iterations.
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
        FR: Fn(&T) -> Vec<Rule<Id>>;

    /// Orders `items` so every rule holds, or fails atomically.
    fn sort<T, Id, FI, FR>(
        &self,
        items: Vec<T>,
        id_selector: FI,
        rule_selector: FR,
        comparer: Option<Comparer<'_, Id>>,
    ) -> SortResult<Vec<T>, Id>
    where
        Id: SortKey,
        FI: Fn(&T) -> Id,
        FR: Fn(&T) -> Vec<Rule<Id>>,
    {
        self.sort_with_cancel(items, id_selector, rule_selector, comparer, None)
    }

    /// Like `sort`, but keeps the placement levels apart.
    ///
    /// Level `n` holds the items that became ready in iteration `n`.
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
        FR: Fn(&T) -> Vec<Rule<Id>>;
}
