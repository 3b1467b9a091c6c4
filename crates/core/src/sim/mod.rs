//! Simulation runs.
//!
//! Provides the owned, driver-facing wrapper around the replacement engine:
//! construction from a validated config, single-stepping, running to
//! completion, reset, and read-only snapshots for display.

/// The `Simulation` type.
pub mod simulator;

/// Read-only state snapshots.
pub mod snapshot;

pub use simulator::Simulation;
pub use snapshot::StateSnapshot;
