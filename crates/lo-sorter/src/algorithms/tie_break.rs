//! Tie-Breaker
//!
//! Orders one ready set before it is appended to the output. Ready sets
//! arrive in input order; with no comparer that order is kept, otherwise a
//! stable sort by the comparer leaves input order deciding only exact ties.

use std::cmp::Ordering;

/// Caller-supplied total order over ids.
pub type Comparer<'a, Id> = &'a dyn Fn(&Id, &Id) -> Ordering;

/// Orders `ready` (input indices) in place.
pub fn order_ready<Id>(ready: &mut [usize], ids: &[Id], comparer: Option<Comparer<'_, Id>>) {
    if let Some(compare) = comparer {
        ready.sort_by(|&a, &b| compare(&ids[a], &ids[b]));
    }
}

/// Ascending comparer for ids with a natural order.
pub fn ascending<Id: Ord>(a: &Id, b: &Id) -> Ordering {
    a.cmp(b)
}
