//! Configuration for the load order sorter

use serde::{Deserialize, Serialize};
use std::env;

/// Sorter configuration
///
/// Thresholds only affect how the work is split, never the resulting order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SorterConfig {
    /// Item count at which resolution and ready-set filtering go parallel
    pub parallel_threshold: usize,
    /// Smallest partition handed to a worker
    pub min_chunk_size: usize,
    /// Reject rules naming ids outside the input instead of reporting a cycle
    pub validate_references: bool,
    /// Optional upper bound on input size
    pub max_items: Option<usize>,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            min_chunk_size: 64,
            validate_references: false,
            max_items: None,
        }
    }
}

impl SorterConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LO_SORT_PARALLEL_THRESHOLD`: parallel cut-over (default: 256)
    /// - `LO_SORT_MIN_CHUNK`: minimum partition size (default: 64)
    /// - `LO_SORT_VALIDATE_REFERENCES`: reject unknown rule targets (default: false)
    /// - `LO_SORT_MAX_ITEMS`: input size limit (default: unlimited)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            parallel_threshold: env::var("LO_SORT_PARALLEL_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.parallel_threshold),

            min_chunk_size: env::var("LO_SORT_MIN_CHUNK")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_chunk_size),

            validate_references: env::var("LO_SORT_VALIDATE_REFERENCES")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.validate_references),

            max_items: env::var("LO_SORT_MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Forces every phase onto the sequential path.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Forces every phase onto the parallel path, even for tiny inputs.
    pub fn always_parallel() -> Self {
        Self {
            parallel_threshold: 0,
            min_chunk_size: 1,
            ..Self::default()
        }
    }
}
