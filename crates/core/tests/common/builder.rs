//! Builders for expected events.

use pagesim_core::{FaultDetail, Outcome, PageId, StepEvent};

/// Converts raw page numbers into page identifiers.
pub fn pages(raw: &[u32]) -> Vec<PageId> {
    raw.iter().copied().map(PageId).collect()
}

/// Expected hit at 1-based `step`.
pub const fn hit(step: usize, page: u32) -> StepEvent {
    StepEvent {
        step,
        page: PageId(page),
        outcome: Outcome::Hit,
    }
}

/// Expected fault serviced by free `frame`.
pub const fn load(step: usize, page: u32, frame: usize) -> StepEvent {
    StepEvent {
        step,
        page: PageId(page),
        outcome: Outcome::Fault(FaultDetail::Loaded { frame }),
    }
}

/// Expected fault that evicted `victim` from `frame`.
pub const fn replace(step: usize, page: u32, victim: u32, frame: usize) -> StepEvent {
    StepEvent {
        step,
        page: PageId(page),
        outcome: Outcome::Fault(FaultDetail::Replaced {
            victim: PageId(victim),
            frame,
        }),
    }
}
