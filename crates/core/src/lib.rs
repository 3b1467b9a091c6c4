//! Page replacement simulator library.
//!
//! This crate drives a fixed set of physical frames through a page reference
//! sequence and reports, per reference, whether it hit or faulted. It provides:
//! 1. **Common:** Page identifiers, error types, and shared result aliases.
//! 2. **Configuration:** Frame capacity, reference sequence, and policy selection.
//! 3. **Engine:** The replacement state machine and its LRU and Optimal victim policies.
//! 4. **Simulation:** An owned run that single-steps or runs to completion.
//! 5. **Statistics:** Hit/fault counters and a printable report.
//!
//! # Examples
//!
//! ```
//! use pagesim_core::{Policy, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::from_reference_str(3, "7, 0, 1, 2, 0", Policy::Lru).unwrap();
//! let mut sim = Simulation::new(config);
//! let events = sim.run_to_completion().unwrap();
//!
//! assert_eq!(events.len(), 5);
//! assert_eq!(sim.fault_count(), 4);
//! assert_eq!(events[3].to_string(), "Step 4: Page 2 - FAULT (replaced page 7 in frame 0)");
//! ```

/// Common types (page identifiers, errors).
pub mod common;
/// Simulation configuration (frame capacity, reference sequence, policy).
pub mod config;
/// Replacement engine (state, step function, victim policies, events).
pub mod engine;
/// Owned simulation runs (single-step, run-to-completion, reset, snapshots).
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Error type for every fallible operation in the crate.
pub use crate::common::{ConfigError, PageId, SimError, SimResult};
/// Replacement policy selector and the immutable run configuration.
pub use crate::config::{Policy, SimulationConfig};
/// Step outcome records produced by the engine.
pub use crate::engine::{FaultDetail, Outcome, SimulationState, StepEvent};
/// Owned simulation run; construct with `Simulation::new`.
pub use crate::sim::{Simulation, StateSnapshot};
/// Hit/fault counters for a run.
pub use crate::stats::SimStats;
