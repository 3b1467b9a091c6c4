//! Read-only state snapshots.

use std::fmt;

use serde::Serialize;

use crate::common::PageId;
use crate::config::{Policy, SimulationConfig};
use crate::engine::SimulationState;

/// An owned copy of a run's state, for rendering the frame display.
///
/// Taking a snapshot never affects the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    /// Resident pages in frame-index order.
    pub frames: Vec<PageId>,
    /// Total number of frames, occupied or not.
    pub frame_capacity: usize,
    /// LRU access order, oldest first (empty under Optimal).
    pub recency: Vec<PageId>,
    /// Index of the next reference to process.
    pub cursor: usize,
    /// Length of the reference sequence.
    pub total_references: usize,
    /// Faults so far.
    pub fault_count: usize,
    /// Hits so far.
    pub hit_count: usize,
    /// Active policy.
    pub policy: Policy,
}

impl StateSnapshot {
    /// Copies the displayable parts of `state`.
    pub fn capture(state: &SimulationState, config: &SimulationConfig) -> Self {
        Self {
            frames: state.frames().to_vec(),
            frame_capacity: config.frame_capacity(),
            recency: state.recency().to_vec(),
            cursor: state.cursor(),
            total_references: config.len(),
            fault_count: state.fault_count(),
            hit_count: state.hit_count(),
            policy: config.policy(),
        }
    }

    /// The page in `frame`, or `None` if the frame is empty.
    pub fn frame(&self, frame: usize) -> Option<PageId> {
        self.frames.get(frame).copied()
    }

    /// Whether every reference has been processed.
    pub const fn is_complete(&self) -> bool {
        self.cursor >= self.total_references
    }
}

/// Trailing empty frames drawn one by one before the row is abbreviated.
const MAX_EMPTY_SHOWN: usize = 8;

impl fmt::Display for StateSnapshot {
    /// Renders the frame row, e.g. `[ 7 | 0 | - ]`, empty frames as `-`.
    ///
    /// More than eight trailing empty frames collapse into one cell, e.g.
    /// `[ 1 | - ×1000 ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let empty = self.frame_capacity.saturating_sub(self.frames.len());

        f.write_str("[")?;
        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>| {
            if first {
                first = false;
                Ok(())
            } else {
                f.write_str(" |")
            }
        };
        for page in &self.frames {
            sep(f)?;
            write!(f, " {page}")?;
        }
        if empty > MAX_EMPTY_SHOWN {
            sep(f)?;
            write!(f, " - ×{empty}")?;
        } else {
            for _ in 0..empty {
                sep(f)?;
                f.write_str(" -")?;
            }
        }
        f.write_str(" ]")
    }
}
