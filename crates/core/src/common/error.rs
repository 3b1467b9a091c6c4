//! Error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Configuration Errors:** Problems detected while building a run, before any step executes.
//! 2. **Runtime Errors:** Driver misuse (stepping past the end) and engine invariant violations.
//! 3. **Result Alias:** `SimResult<T>` for the crate's fallible operations.

use thiserror::Error;

use super::page::PageId;
use crate::config::Policy;

/// Reasons a [`SimulationConfig`](crate::config::SimulationConfig) cannot be built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The frame capacity is zero.
    #[error("frame capacity must be a positive integer")]
    ZeroFrames,

    /// The reference sequence contains no page identifiers.
    #[error("reference sequence is empty")]
    EmptySequence,

    /// A numeric token does not fit the page identifier range (`0..=u32::MAX`).
    #[error("page identifier `{token}` is outside the range 0..={max}", max = u32::MAX)]
    PageOutOfRange {
        /// The offending token as written by the user.
        token: String,
    },

    /// The policy selector names no known policy.
    #[error("unknown replacement policy `{0}` (expected `lru` or `optimal`)")]
    UnknownPolicy(String),

    /// A configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document is not valid JSON for this schema.
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configuration was rejected; no run was started.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// `step` was called after the last reference had been processed.
    ///
    /// This is a driver bug, distinct from normal completion: the driver should
    /// check [`Simulation::is_complete`](crate::sim::Simulation::is_complete) first.
    #[error("reference sequence exhausted: cursor {cursor} is at the end of {len} references")]
    SequenceExhausted {
        /// Cursor at the time of the call.
        cursor: usize,
        /// Length of the reference sequence.
        len: usize,
    },

    /// Victim selection found no resident candidate while every frame is full.
    ///
    /// Under LRU the recency track always mirrors the frame set, so this indicates
    /// a defect in the engine rather than a reachable state of a valid run.
    #[error("{policy} victim selection found no resident page while loading page {page}")]
    NoVictim {
        /// The page whose fault triggered victim selection.
        page: PageId,
        /// The policy that was asked for a victim.
        policy: Policy,
    },
}

/// Result alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
