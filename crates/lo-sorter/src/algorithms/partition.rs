//! Parallel Partitioner
//!
//! Decides whether an O(n) pass runs sequentially or split across rayon
//! workers, and runs it. Each partition covers a contiguous index range and
//! fills a private buffer; buffers are concatenated in partition order, so
//! the output never depends on worker completion timing.

use crate::config::SorterConfig;
use rayon::prelude::*;
use std::ops::Range;

/// How a pass over `len` elements is executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Parallel { chunk_size: usize },
}

impl Strategy {
    pub fn is_parallel(&self) -> bool {
        matches!(self, Strategy::Parallel { .. })
    }
}

/// Sizing heuristic shared by resolution and ready-set filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partitioner {
    parallel_threshold: usize,
    min_chunk_size: usize,
}

impl Partitioner {
    pub fn new(parallel_threshold: usize, min_chunk_size: usize) -> Self {
        Self {
            parallel_threshold,
            min_chunk_size: min_chunk_size.max(1),
        }
    }

    pub fn from_config(config: &SorterConfig) -> Self {
        Self::new(config.parallel_threshold, config.min_chunk_size)
    }

    /// Picks a strategy for `len` elements.
    ///
    /// Chunks are sized so every rayon thread gets roughly one partition,
    /// but never smaller than `min_chunk_size`.
    pub fn plan(&self, len: usize) -> Strategy {
        if len == 0 || len < self.parallel_threshold {
            return Strategy::Sequential;
        }

        let workers = rayon::current_num_threads().max(1);
        let chunk_size = len.div_ceil(workers).max(self.min_chunk_size);
        Strategy::Parallel { chunk_size }
    }

    /// Runs `work` over `0..len` and concatenates the per-partition buffers.
    pub fn map_ranges<R, F>(&self, len: usize, work: F) -> Vec<R>
    where
        R: Send,
        F: Fn(Range<usize>) -> Vec<R> + Sync + Send,
    {
        match self.plan(len) {
            Strategy::Sequential => work(0..len),
            Strategy::Parallel { chunk_size } => {
                let partitions = len.div_ceil(chunk_size);
                let buffers: Vec<Vec<R>> = (0..partitions)
                    .into_par_iter()
                    .map(|p| {
                        let start = p * chunk_size;
                        work(start..(start + chunk_size).min(len))
                    })
                    .collect();

                let mut merged = Vec::with_capacity(buffers.iter().map(Vec::len).sum());
                for buffer in buffers {
                    merged.extend(buffer);
                }
                merged
            }
        }
    }
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::from_config(&SorterConfig::default())
    }
}
