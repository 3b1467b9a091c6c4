//! Step events.
//!
//! The engine reports each processed reference as a `StepEvent` instead of
//! touching any display. A driver renders events however it likes; the
//! `Display` impls produce the classic simulator log lines.

use std::fmt;

use serde::Serialize;

use crate::common::PageId;

/// How a fault was serviced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FaultDetail {
    /// The page went into a free frame.
    Loaded {
        /// Index of the frame the page now occupies.
        frame: usize,
    },
    /// Every frame was occupied; `victim` was evicted and the page took its frame.
    Replaced {
        /// The evicted page.
        victim: PageId,
        /// Index of the frame both pages occupied (victim before, new page after).
        frame: usize,
    },
}

impl FaultDetail {
    /// The frame the faulting page was placed in.
    pub const fn frame(self) -> usize {
        match self {
            Self::Loaded { frame } | Self::Replaced { frame, .. } => frame,
        }
    }

    /// The evicted page, if the fault required a replacement.
    pub const fn victim(self) -> Option<PageId> {
        match self {
            Self::Loaded { .. } => None,
            Self::Replaced { victim, .. } => Some(victim),
        }
    }
}

/// Result of one reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The page was already resident.
    Hit,
    /// The page was not resident and had to be loaded.
    Fault(FaultDetail),
}

/// One processed reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepEvent {
    /// 1-based step number (cursor before the step, plus one).
    pub step: usize,
    /// The referenced page.
    pub page: PageId,
    /// Hit, or fault with how it was serviced.
    pub outcome: Outcome,
}

impl StepEvent {
    /// Whether this reference faulted.
    pub const fn is_fault(&self) -> bool {
        matches!(self.outcome, Outcome::Fault(_))
    }

    /// Whether this reference hit.
    pub const fn is_hit(&self) -> bool {
        matches!(self.outcome, Outcome::Hit)
    }

    /// The fault detail, if this reference faulted.
    pub const fn fault(&self) -> Option<FaultDetail> {
        match self.outcome {
            Outcome::Hit => None,
            Outcome::Fault(detail) => Some(detail),
        }
    }
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: Page {} - ", self.step, self.page)?;
        match self.outcome {
            Outcome::Hit => f.write_str("HIT"),
            Outcome::Fault(FaultDetail::Loaded { frame }) => {
                write!(f, "FAULT (loaded into frame {frame})")
            }
            Outcome::Fault(FaultDetail::Replaced { victim, frame }) => {
                write!(f, "FAULT (replaced page {victim} in frame {frame})")
            }
        }
    }
}
