//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the resident page that has gone unreferenced the longest.
//! The engine keeps a recency track (oldest first, one entry per resident page);
//! the victim is the frame holding the first page on that track.
//!
//! # Performance
//!
//! - **Time Complexity:** `select_victim()` is O(R × F) in the worst case, where R is
//!   the recency length and F the frame count; since the track mirrors the frames,
//!   the first entry always matches and the scan stops after one frame lookup.
//! - **Best Case:** Workloads with strong temporal locality.
//! - **Worst Case:** Cyclic scans one page larger than the frame count (every reference faults).

use super::{ReplacementPolicy, VictimQuery};

/// LRU victim selector. Stateless: recency lives in the simulation state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    /// Scans the recency track oldest to newest and returns the frame of the
    /// first page that is still resident.
    fn select_victim(&self, query: &VictimQuery<'_>) -> Option<usize> {
        let victim = query
            .recency
            .iter()
            .find_map(|page| query.frames.iter().position(|resident| resident == page));
        if let Some(frame) = victim {
            tracing::trace!(frame, page = %query.frames[frame], "lru victim");
        }
        victim
    }
}
