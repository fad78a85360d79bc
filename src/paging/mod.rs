//! Page replacement engine.
//!
//! Computes per-reference frame snapshots and hit/fault statistics for
//! FIFO, LRU, and Optimal replacement over a fixed number of frames.
//!
//! # Usage
//!
//! ```
//! use os_sim::paging::{self, ReplacementPolicy};
//!
//! let run = paging::run(&[1, 2, 1], 2, ReplacementPolicy::Fifo).unwrap();
//! assert_eq!(run.stats.hits, 1);
//! assert_eq!(run.stats.faults, 2);
//! assert_eq!(run.snapshots.len(), 4); // initial state plus one per reference
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 10.4
//! - Belady (1966), "A study of replacement algorithms for virtual-storage
//!   computers"

mod engine;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, SimResult};
use crate::models::FrameSnapshot;

/// Replacement policy selector.
///
/// Serialized with the lowercase tokens `fifo`, `lru`, `optimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplacementPolicy {
    /// Evict the oldest-inserted resident page.
    Fifo,
    /// Evict the least recently used resident page.
    Lru,
    /// Evict the page referenced furthest in the future (Belady).
    Optimal,
}

/// Hit/fault totals for one run.
///
/// `hits + faults` always equals the number of references processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingStats {
    /// References that found their page resident.
    pub hits: usize,
    /// References that required a fill or a replacement.
    pub faults: usize,
}

impl PagingStats {
    /// Fraction of references that hit, in `0.0..=1.0`. Zero references
    /// yield `0.0`.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.faults;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64
    }
}

/// Snapshots and statistics from one page replacement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingRun {
    /// Frame contents over time: the initial all-empty state, then one
    /// snapshot per processed reference.
    pub snapshots: Vec<FrameSnapshot>,
    /// Hit/fault totals.
    pub stats: PagingStats,
}

/// Runs one replacement policy over the given reference string.
///
/// # Errors
///
/// [`ConfigError::InvalidFrameCount`] when `frame_count` is zero; there are
/// no slots to fill and the run is refused rather than degenerating.
pub fn run(
    references: &[u32],
    frame_count: usize,
    policy: ReplacementPolicy,
) -> SimResult<PagingRun> {
    if frame_count == 0 {
        return Err(ConfigError::InvalidFrameCount);
    }
    debug!(?policy, frames = frame_count, refs = references.len(), "page replacement run");
    Ok(match policy {
        ReplacementPolicy::Fifo => engine::fifo(references, frame_count),
        ReplacementPolicy::Lru => engine::lru(references, frame_count),
        ReplacementPolicy::Optimal => engine::optimal(references, frame_count),
    })
}
