//! Optimal (Belady) Replacement Policy.
//!
//! This policy looks ahead in the reference sequence and evicts the resident
//! page whose next reference is farthest away. A page that is never referenced
//! again is the ideal victim and is chosen immediately.
//!
//! Ties are broken toward the lowest frame index: frames are scanned from index 0
//! and the incumbent is only replaced by a strictly farther next use.
//!
//! # Performance
//!
//! - **Time Complexity:** `select_victim()` is O(F × N), F frames and N remaining references.
//! - **Fault Count:** Minimal for a fully known sequence; a lower bound for every other policy.

use super::{ReplacementPolicy, VictimQuery};
use crate::common::PageId;

/// Optimal victim selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalPolicy;

/// Index of the next reference to `page` strictly after `cursor`, if any.
fn next_use(references: &[PageId], cursor: usize, page: PageId) -> Option<usize> {
    let start = cursor + 1;
    references
        .get(start..)?
        .iter()
        .position(|&p| p == page)
        .map(|offset| start + offset)
}

impl ReplacementPolicy for OptimalPolicy {
    fn select_victim(&self, query: &VictimQuery<'_>) -> Option<usize> {
        let mut victim = None;
        let mut farthest = 0;

        for (frame, &page) in query.frames.iter().enumerate() {
            match next_use(query.references, query.cursor, page) {
                None => {
                    tracing::trace!(frame, %page, "optimal victim: never used again");
                    return Some(frame);
                }
                Some(at) if victim.is_none() || at > farthest => {
                    farthest = at;
                    victim = Some(frame);
                }
                Some(_) => {}
            }
        }

        if let Some(frame) = victim {
            tracing::trace!(frame, next_use = farthest, "optimal victim: farthest next use");
        }
        victim
    }
}
