//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome counters of a run. It provides:
//! 1. **Counters:** References, hits, faults, and how faults were serviced.
//! 2. **Ratios:** Hit and fault ratios over the references processed so far.
//! 3. **Report:** A plain-text report in selectable sections.

use std::fmt::Write as _;

use serde::Serialize;

use crate::engine::{FaultDetail, Outcome, StepEvent};

/// Outcome counters of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// References processed.
    pub references: u64,
    /// References that found their page resident.
    pub hits: u64,
    /// References that faulted.
    pub faults: u64,
    /// Faults serviced by a free frame.
    pub cold_loads: u64,
    /// Faults that evicted a resident page.
    pub replacements: u64,
}

/// Section names for selective report output.
///
/// Pass an empty slice to [`SimStats::report`] to include all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "faults"];

impl SimStats {
    /// Folds one event into the counters.
    pub fn record(&mut self, event: &StepEvent) {
        self.references += 1;
        match event.outcome {
            Outcome::Hit => self.hits += 1,
            Outcome::Fault(FaultDetail::Loaded { .. }) => {
                self.faults += 1;
                self.cold_loads += 1;
            }
            Outcome::Fault(FaultDetail::Replaced { .. }) => {
                self.faults += 1;
                self.replacements += 1;
            }
        }
    }

    /// Builds counters from a complete event list.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a StepEvent>) -> Self {
        let mut stats = Self::default();
        for event in events {
            stats.record(event);
        }
        stats
    }

    /// Fraction of references that hit, or 0.0 before any reference.
    pub fn hit_ratio(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted, or 0.0 before any reference.
    pub fn fault_ratio(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }

    /// Renders the requested sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Unknown
    /// names are ignored; an empty slice selects every section.
    pub fn report(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "PAGE REPLACEMENT STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let _ = writeln!(out, "sim_references           {}", self.references);
            let _ = writeln!(out, "sim_hits                 {}", self.hits);
            let _ = writeln!(out, "sim_faults               {}", self.faults);
            let _ = writeln!(out, "sim_hit_ratio            {:.2}%", self.hit_ratio() * 100.0);
            let _ = writeln!(out, "sim_fault_ratio          {:.2}%", self.fault_ratio() * 100.0);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("faults") {
            let share = |n: u64| {
                if self.faults == 0 {
                    0.0
                } else {
                    n as f64 / self.faults as f64 * 100.0
                }
            };
            let _ = writeln!(out, "FAULT BREAKDOWN");
            let _ = writeln!(
                out,
                "  faults.cold_load       {} ({:.2}%)",
                self.cold_loads,
                share(self.cold_loads)
            );
            let _ = writeln!(
                out,
                "  faults.replacement     {} ({:.2}%)",
                self.replacements,
                share(self.replacements)
            );
        }
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints the requested sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.report(sections));
    }

    /// Prints every section to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
