//! Page Replacement Policies.
//!
//! Implements the algorithms that choose a victim frame when a fault occurs and
//! every frame is occupied.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, driven by the recency track.
//! - `Optimal`: Belady's algorithm, driven by lookahead into the reference sequence.

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (Belady) replacement policy.
pub mod optimal;

pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

use crate::common::PageId;
use crate::config::Policy;

/// Everything a policy may look at when choosing a victim.
///
/// Borrowed from the engine state and config for the duration of one
/// selection; policies never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct VictimQuery<'a> {
    /// Resident pages in frame-index order.
    pub frames: &'a [PageId],
    /// Access order of resident pages, oldest first (empty under Optimal).
    pub recency: &'a [PageId],
    /// The full reference sequence.
    pub references: &'a [PageId],
    /// Index of the reference currently being serviced.
    pub cursor: usize,
}

/// Trait for page replacement policies.
pub trait ReplacementPolicy: Send + Sync {
    /// Selects the frame to evict.
    ///
    /// # Arguments
    ///
    /// * `query` - A full frame set and the context around it.
    ///
    /// # Returns
    ///
    /// The index of the frame to evict, or `None` if no resident page is a
    /// candidate (an engine defect; a consistent full frame set always yields one).
    fn select_victim(&self, query: &VictimQuery<'_>) -> Option<usize>;
}

impl Policy {
    /// Returns the victim selector implementing this policy.
    pub fn selector(self) -> &'static dyn ReplacementPolicy {
        match self {
            Self::Lru => &LruPolicy,
            Self::Optimal => &OptimalPolicy,
        }
    }
}
