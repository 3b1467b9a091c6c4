//! # Simulation Tests
//!
//! Stepping, run-to-completion, reset, and the event log of `Simulation`.

use pretty_assertions::assert_eq;

use pagesim_core::{PageId, Policy, SimError, Simulation, SimulationConfig};

use crate::common::builder::{hit, load, pages};
use crate::common::fixtures::{self, BELADY, TEXTBOOK_PREFIX};
use crate::common::harness::{capture_logs, config, init_tracing};

#[test]
fn new_simulation_is_at_start() {
    let sim = Simulation::new(config(3, &[1, 2, 3], Policy::Lru));
    assert_eq!(sim.state().cursor(), 0);
    assert_eq!(sim.fault_count(), 0);
    assert_eq!(sim.remaining(), 3);
    assert!(!sim.is_complete());
    assert!(sim.events().is_empty());
}

#[test]
fn run_to_completion_produces_frozen_trace() {
    init_tracing();
    let mut sim = Simulation::new(config(3, &BELADY, Policy::Lru));
    let events = sim.run_to_completion().unwrap();
    assert_eq!(events, fixtures::lru_belady_3());
    assert_eq!(sim.fault_count(), 10);
    assert!(sim.is_complete());
    assert_eq!(sim.remaining(), 0);
    assert_eq!(sim.state().frames(), pages(&[3, 4, 5]).as_slice());
}

#[test]
fn run_to_completion_after_partial_stepping_returns_the_rest() {
    let mut sim = Simulation::new(config(3, &TEXTBOOK_PREFIX, Policy::Optimal));
    let first = sim.step().unwrap();
    let second = sim.step().unwrap();
    let rest = sim.run_to_completion().unwrap();

    let mut all = vec![first, second];
    all.extend(rest);
    assert_eq!(all, fixtures::optimal_textbook_prefix_3());
    assert_eq!(sim.events(), all.as_slice());
}

#[test]
fn run_to_completion_on_finished_run_is_empty() {
    let mut sim = Simulation::new(config(2, &[1, 2], Policy::Lru));
    let _ = sim.run_to_completion().unwrap();
    assert!(sim.run_to_completion().unwrap().is_empty());
    assert_eq!(sim.events().len(), 2);
}

#[test]
fn run_to_completion_logs_only_when_it_advances() {
    let mut sim = Simulation::new(config(2, &[1, 2, 1], Policy::Lru));
    let (events, logs) = capture_logs(|| sim.run_to_completion().unwrap());
    assert_eq!(events.len(), 3);
    assert!(logs.contains("simulation complete"), "{logs}");

    let (events, logs) = capture_logs(|| sim.run_to_completion().unwrap());
    assert!(events.is_empty());
    assert!(!logs.contains("simulation complete"), "{logs}");
}

#[test]
fn huge_frame_capacity_runs_without_preallocating() {
    let cfg = SimulationConfig::from_json_str(
        r#"{"frame_capacity": 18446744073709551615, "reference_sequence": [1, 2, 1]}"#,
    )
    .unwrap();
    assert_eq!(cfg.frame_capacity(), usize::MAX);

    let mut sim = Simulation::new(cfg);
    let events = sim.run_to_completion().unwrap();
    assert_eq!(events, vec![load(1, 1, 0), load(2, 2, 1), hit(3, 1)]);
    assert_eq!(sim.fault_count(), 2);

    let half = SimulationConfig::new(usize::MAX / 2, vec![PageId(1)], Policy::Optimal).unwrap();
    let mut sim = Simulation::new(half);
    assert_eq!(sim.run_to_completion().unwrap(), vec![load(1, 1, 0)]);
    assert_eq!(sim.snapshot().to_string(), format!("[ 1 | - ×{} ]", usize::MAX / 2 - 1));
}

#[test]
fn step_after_completion_errors_and_keeps_log() {
    let mut sim = Simulation::new(config(2, &[1], Policy::Optimal));
    assert_eq!(sim.step().unwrap(), load(1, 1, 0));

    let err = sim.step().unwrap_err();
    assert!(matches!(err, SimError::SequenceExhausted { cursor: 1, len: 1 }));
    assert_eq!(sim.events().len(), 1);
    assert_eq!(sim.stats().references, 1);
}

#[test]
fn reset_returns_to_initial_state() {
    let mut sim = Simulation::new(config(3, &BELADY, Policy::Lru));
    let first_run = sim.run_to_completion().unwrap();

    sim.reset();
    assert_eq!(sim.state().cursor(), 0);
    assert_eq!(sim.fault_count(), 0);
    assert!(sim.state().frames().is_empty());
    assert!(sim.state().recency().is_empty());
    assert!(sim.events().is_empty());
    assert_eq!(sim.stats().references, 0);

    assert_eq!(sim.run_to_completion().unwrap(), first_run);
}

/// Independent runs share nothing.
#[test]
fn simulations_are_independent() {
    let cfg = config(2, &[1, 2, 3, 1], Policy::Lru);
    let mut a = Simulation::new(cfg.clone());
    let mut b = Simulation::new(cfg);

    let _ = a.run_to_completion().unwrap();
    assert_eq!(b.state().cursor(), 0);
    let _ = b.step().unwrap();
    assert_eq!(b.state().cursor(), 1);
    assert!(a.is_complete());
}

#[test]
fn stats_track_events() {
    let mut sim = Simulation::new(config(3, &TEXTBOOK_PREFIX, Policy::Lru));
    let _ = sim.run_to_completion().unwrap();
    let stats = sim.stats();
    assert_eq!(stats.references, 13);
    assert_eq!(stats.faults, 9);
    assert_eq!(stats.hits, 4);
    assert_eq!(stats.cold_loads, 3);
    assert_eq!(stats.replacements, 6);
}
