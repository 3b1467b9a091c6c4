//! # Error Tests
//!
//! Display text and conversions of the error types.

use pagesim_core::{ConfigError, PageId, Policy, SimError};

#[test]
fn test_config_error_display() {
    assert_eq!(
        ConfigError::ZeroFrames.to_string(),
        "frame capacity must be a positive integer"
    );
    assert_eq!(ConfigError::EmptySequence.to_string(), "reference sequence is empty");
    assert_eq!(
        ConfigError::PageOutOfRange {
            token: "-1".to_string()
        }
        .to_string(),
        "page identifier `-1` is outside the range 0..=4294967295"
    );
}

#[test]
fn test_invalid_config_wraps_source() {
    let err: SimError = ConfigError::ZeroFrames.into();
    assert!(matches!(err, SimError::InvalidConfig(ConfigError::ZeroFrames)));
    assert_eq!(
        err.to_string(),
        "invalid configuration: frame capacity must be a positive integer"
    );
}

#[test]
fn test_sequence_exhausted_display() {
    let err = SimError::SequenceExhausted { cursor: 4, len: 4 };
    assert!(err.to_string().contains("exhausted"));
    assert!(err.to_string().contains('4'));
}

#[test]
fn test_no_victim_display() {
    let err = SimError::NoVictim {
        page: PageId(3),
        policy: Policy::Lru,
    };
    assert_eq!(
        err.to_string(),
        "LRU victim selection found no resident page while loading page 3"
    );
}
