//! # Statistics Tests
//!
//! Counter accumulation, derived ratios, and report sections.

use pagesim_core::stats::STATS_SECTIONS;
use pagesim_core::{Policy, SimStats};

use crate::common::builder::{hit, load, replace};
use crate::common::fixtures::BELADY;
use crate::common::harness::trace;

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.references, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.faults, 0);
    assert_eq!(stats.cold_loads, 0);
    assert_eq!(stats.replacements, 0);
    assert!(stats.hit_ratio().abs() < f64::EPSILON);
    assert!(stats.fault_ratio().abs() < f64::EPSILON);
}

#[test]
fn record_classifies_events() {
    let mut stats = SimStats::default();
    stats.record(&load(1, 1, 0));
    stats.record(&hit(2, 1));
    stats.record(&replace(3, 2, 1, 0));
    stats.record(&hit(4, 2));

    assert_eq!(stats.references, 4);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.faults, 2);
    assert_eq!(stats.cold_loads, 1);
    assert_eq!(stats.replacements, 1);
    assert!((stats.hit_ratio() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn from_events_matches_trace() {
    let events = trace(3, &BELADY, Policy::Lru);
    let stats = SimStats::from_events(&events);
    assert_eq!(stats.faults, 10);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.faults + stats.hits, stats.references);
    assert_eq!(stats.cold_loads + stats.replacements, stats.faults);
}

#[test]
fn report_includes_all_sections_by_default() {
    let stats = SimStats::from_events(&trace(3, &BELADY, Policy::Lru));
    let report = stats.report(&[]);
    assert!(report.contains("sim_faults               10"));
    assert!(report.contains("sim_hit_ratio            16.67%"));
    assert!(report.contains("FAULT BREAKDOWN"));
    assert!(report.contains("faults.replacement     7 (70.00%)"));
}

#[test]
fn report_selects_sections() {
    let stats = SimStats::from_events(&trace(3, &BELADY, Policy::Optimal));
    let only_faults = stats.report(&["faults".to_string()]);
    assert!(only_faults.contains("FAULT BREAKDOWN"));
    assert!(!only_faults.contains("sim_references"));

    let only_summary = stats.report(&["summary".to_string()]);
    assert!(only_summary.contains("sim_faults               7"));
    assert!(!only_summary.contains("FAULT BREAKDOWN"));
}

#[test]
fn section_names_are_known() {
    assert_eq!(STATS_SECTIONS, &["summary", "faults"]);
}
