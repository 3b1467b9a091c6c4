//! Replacement Engine.
//!
//! This module implements the page replacement state machine. It provides:
//! 1. **State:** `SimulationState`, the frame set, recency track, cursor, and fault count of one run.
//! 2. **Step Function:** `step`, which services exactly one reference and reports it.
//! 3. **Policies:** Victim selection for LRU and Optimal.
//! 4. **Events:** `StepEvent` records describing each serviced reference.
//!
//! The engine holds no global state. Every run owns its `SimulationState`, and
//! `step` is the only way that state changes.

/// Step event records.
pub mod event;

/// Victim selection policies.
pub mod policies;

pub use event::{FaultDetail, Outcome, StepEvent};
pub use policies::{ReplacementPolicy, VictimQuery};

use serde::Serialize;

use crate::common::{PageId, SimError, SimResult};
use crate::config::SimulationConfig;

/// Mutable state of one simulation run.
///
/// Created with [`SimulationState::new`] and advanced only by [`step`]. The
/// fields are private; readers use the accessors.
///
/// Invariants maintained by `step`:
/// - `frames.len() <= frame_capacity`, with no duplicate pages.
/// - `fault_count` equals the number of faults reported so far.
/// - Under LRU, `recency` holds exactly the resident pages, each once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SimulationState {
    frames: Vec<PageId>,
    recency: Vec<PageId>,
    cursor: usize,
    fault_count: usize,
}

impl SimulationState {
    /// Creates the empty state a run starts from: no resident pages, cursor 0.
    pub fn new(config: &SimulationConfig) -> Self {
        // A run never holds more distinct pages than it has references.
        let capacity = config.frame_capacity().min(config.len());
        Self {
            frames: Vec::with_capacity(capacity),
            recency: if config.policy().tracks_recency() {
                Vec::with_capacity(capacity)
            } else {
                Vec::new()
            },
            cursor: 0,
            fault_count: 0,
        }
    }

    /// Resident pages in frame-index order.
    pub fn frames(&self) -> &[PageId] {
        &self.frames
    }

    /// Access order of resident pages, oldest first. Empty under Optimal.
    pub fn recency(&self) -> &[PageId] {
        &self.recency
    }

    /// Index of the next reference to process.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Faults reported so far.
    pub const fn fault_count(&self) -> usize {
        self.fault_count
    }

    /// Hits reported so far.
    pub const fn hit_count(&self) -> usize {
        self.cursor - self.fault_count
    }

    /// Whether every reference of `config` has been processed.
    pub fn is_complete(&self, config: &SimulationConfig) -> bool {
        self.cursor >= config.len()
    }

    /// Moves `page` to the most-recently-used end of the recency track.
    fn touch(&mut self, page: PageId) {
        if let Some(pos) = self.recency.iter().position(|&p| p == page) {
            let _ = self.recency.remove(pos);
        }
        self.recency.push(page);
    }

    /// Drops `page` from the recency track.
    fn forget(&mut self, page: PageId) {
        self.recency.retain(|&p| p != page);
    }
}

/// Services the reference at `state.cursor()` and reports it.
///
/// A resident page is a hit; under LRU it becomes most recently used. A
/// missing page is a fault: it goes into the next free frame if one exists,
/// otherwise it takes over the frame of the victim chosen by the configured
/// policy.
///
/// # Errors
///
/// - [`SimError::SequenceExhausted`] if every reference has been processed.
/// - [`SimError::NoVictim`] if the policy finds no victim in a full frame set
///   (an engine defect).
///
/// In both cases `state` is left unchanged.
pub fn step(state: &mut SimulationState, config: &SimulationConfig) -> SimResult<StepEvent> {
    let references = config.reference_sequence();
    let Some(&page) = references.get(state.cursor) else {
        tracing::warn!(
            cursor = state.cursor,
            len = references.len(),
            "step called on an exhausted reference sequence"
        );
        return Err(SimError::SequenceExhausted {
            cursor: state.cursor,
            len: references.len(),
        });
    };
    let policy = config.policy();
    let lru = policy.tracks_recency();

    let outcome = if state.frames.contains(&page) {
        if lru {
            state.touch(page);
        }
        Outcome::Hit
    } else if state.frames.len() < config.frame_capacity() {
        state.frames.push(page);
        if lru {
            state.recency.push(page);
        }
        state.fault_count += 1;
        Outcome::Fault(FaultDetail::Loaded {
            frame: state.frames.len() - 1,
        })
    } else {
        let query = VictimQuery {
            frames: &state.frames,
            recency: &state.recency,
            references,
            cursor: state.cursor,
        };
        let frame = policy
            .selector()
            .select_victim(&query)
            .ok_or(SimError::NoVictim { page, policy })?;

        let victim = std::mem::replace(&mut state.frames[frame], page);
        if lru {
            state.forget(victim);
            state.recency.push(page);
        }
        state.fault_count += 1;
        Outcome::Fault(FaultDetail::Replaced { victim, frame })
    };

    state.cursor += 1;
    let event = StepEvent {
        step: state.cursor,
        page,
        outcome,
    };
    tracing::debug!(
        step = event.step,
        %page,
        fault = event.is_fault(),
        faults = state.fault_count,
        "reference serviced"
    );
    Ok(event)
}

/// Runs a fresh simulation of `config` to completion.
///
/// Equivalent to creating a new [`SimulationState`] and calling [`step`] until
/// the sequence is exhausted; there is no other code path.
///
/// # Errors
///
/// Propagates any error of [`step`].
pub fn run(config: &SimulationConfig) -> SimResult<(SimulationState, Vec<StepEvent>)> {
    let mut state = SimulationState::new(config);
    let mut events = Vec::with_capacity(config.len());
    while !state.is_complete(config) {
        events.push(step(&mut state, config)?);
    }
    Ok((state, events))
}
