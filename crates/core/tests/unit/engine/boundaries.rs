//! Boundary cases that behave the same under every policy.

use rstest::rstest;

use pagesim_core::{FaultDetail, PageId, Policy};

use crate::common::builder::{hit, load};
use crate::common::harness::trace;

/// One frame: every change of page replaces the sole occupant.
#[rstest]
fn single_frame_replaces_sole_occupant(#[values(Policy::Lru, Policy::Optimal)] policy: Policy) {
    let events = trace(1, &[1, 2, 2, 3, 1, 1], policy);

    assert_eq!(events[0], load(1, 1, 0));
    assert_eq!(
        events[1].fault(),
        Some(FaultDetail::Replaced {
            victim: PageId(1),
            frame: 0
        })
    );
    assert_eq!(events[2], hit(3, 2));
    assert_eq!(
        events[3].fault(),
        Some(FaultDetail::Replaced {
            victim: PageId(2),
            frame: 0
        })
    );
    assert_eq!(
        events[4].fault(),
        Some(FaultDetail::Replaced {
            victim: PageId(3),
            frame: 0
        })
    );
    assert_eq!(events[5], hit(6, 1));
}

/// Identical references: one cold fault, then hits only.
#[rstest]
fn identical_references_fault_once(
    #[values(Policy::Lru, Policy::Optimal)] policy: Policy,
    #[values(1, 3, 8)] frames: usize,
) {
    let events = trace(frames, &[4; 10], policy);
    assert_eq!(events[0], load(1, 4, 0));
    assert!(events[1..].iter().all(|e| e.is_hit()));
}

/// Fewer distinct pages than frames: only cold faults, no replacement.
#[rstest]
#[case(Policy::Lru)]
#[case(Policy::Optimal)]
fn working_set_fits(#[case] policy: Policy) {
    let events = trace(4, &[1, 2, 3, 1, 2, 3, 3, 2, 1], policy);
    let faults: Vec<_> = events.iter().filter_map(|e| e.fault()).collect();
    assert_eq!(
        faults,
        vec![
            FaultDetail::Loaded { frame: 0 },
            FaultDetail::Loaded { frame: 1 },
            FaultDetail::Loaded { frame: 2 },
        ]
    );
}

/// A single reference always faults into frame 0.
#[rstest]
fn single_reference(#[values(Policy::Lru, Policy::Optimal)] policy: Policy) {
    assert_eq!(trace(5, &[42], policy), vec![load(1, 42, 0)]);
}
