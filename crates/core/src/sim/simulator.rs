//! Simulation: owns the configuration and engine state of one run.
//!
//! Each `Simulation` is independent. Drivers either call [`Simulation::step`]
//! once per user action or [`Simulation::run_to_completion`]; the latter is a
//! loop over `step` and produces exactly the events single-stepping would.

use crate::common::SimResult;
use crate::config::SimulationConfig;
use crate::engine::{self, SimulationState, StepEvent};
use crate::sim::snapshot::StateSnapshot;
use crate::stats::SimStats;

/// One page replacement run.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    state: SimulationState,
    stats: SimStats,
    log: Vec<StepEvent>,
}

impl Simulation {
    /// Creates a run in its initial state: empty frames, cursor 0, no faults.
    pub fn new(config: SimulationConfig) -> Self {
        let state = SimulationState::new(&config);
        let log = Vec::with_capacity(config.len());
        Self {
            config,
            state,
            stats: SimStats::default(),
            log,
        }
    }

    /// Services the next reference.
    ///
    /// # Errors
    ///
    /// [`SimError::SequenceExhausted`](crate::SimError::SequenceExhausted) once
    /// every reference has been processed; check [`Simulation::is_complete`] first.
    pub fn step(&mut self) -> SimResult<StepEvent> {
        let event = engine::step(&mut self.state, &self.config)?;
        self.stats.record(&event);
        self.log.push(event);
        Ok(event)
    }

    /// Steps until the reference sequence is exhausted.
    ///
    /// Returns the events produced by this call only; on a fresh run that is
    /// the whole trace. Calling it on a completed run returns an empty list
    /// and logs nothing.
    ///
    /// # Errors
    ///
    /// Propagates any error of [`Simulation::step`].
    pub fn run_to_completion(&mut self) -> SimResult<Vec<StepEvent>> {
        let mut events = Vec::with_capacity(self.remaining());
        while !self.is_complete() {
            events.push(self.step()?);
        }
        if events.is_empty() {
            return Ok(events);
        }
        tracing::info!(
            policy = %self.config.policy(),
            references = self.config.len(),
            faults = self.state.fault_count(),
            "simulation complete"
        );
        Ok(events)
    }

    /// Returns the run to its freshly constructed state with the same config.
    pub fn reset(&mut self) {
        self.state = SimulationState::new(&self.config);
        self.stats = SimStats::default();
        self.log.clear();
        tracing::debug!("simulation reset");
    }

    /// Whether every reference has been processed.
    pub fn is_complete(&self) -> bool {
        self.state.is_complete(&self.config)
    }

    /// Number of references not yet processed.
    pub fn remaining(&self) -> usize {
        self.config.len().saturating_sub(self.state.cursor())
    }

    /// Cumulative fault count.
    pub const fn fault_count(&self) -> usize {
        self.state.fault_count()
    }

    /// The run's configuration.
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Borrowed view of the engine state.
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Counters accumulated so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Every event produced since construction or the last reset, in order.
    pub fn events(&self) -> &[StepEvent] {
        &self.log
    }

    /// Owned copy of the state for display.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.state, &self.config)
    }
}
