//! Ready-Set Extractor
//!
//! An item is ready once its whole dependency set is placed.

use super::partition::Partitioner;
use crate::domain::entities::{PlacementState, SortKey};

/// Returns the input indices of every ready item, in input order.
///
/// Large remaining sets are filtered per partition into private buffers
/// and concatenated in partition order.
pub fn extract_ready<Id: SortKey>(
    state: &PlacementState<Id>,
    partitioner: &Partitioner,
) -> Vec<usize> {
    let remaining = &state.remaining;

    partitioner.map_ranges(remaining.len(), |range| {
        remaining[range]
            .iter()
            .copied()
            .filter(|&index| state.dependencies[index].is_satisfied_by(&state.used))
            .collect()
    })
}
