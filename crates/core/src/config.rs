//! Configuration for a simulation run.
//!
//! This module defines the immutable inputs of one run. It provides:
//! 1. **Defaults:** The frame count and policy a fresh run starts with.
//! 2. **Policy:** The replacement policy selector (LRU or Optimal).
//! 3. **SimulationConfig:** Validated frame capacity, reference sequence, and policy.
//!
//! A configuration is built from typed values, from the comma-separated reference
//! string a user types, or from a JSON document. Every path runs the same
//! validation, so an invalid configuration never reaches the engine.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::page::PageParseError;
use crate::common::{ConfigError, PageId};

/// Default configuration constants.
mod defaults {
    use super::Policy;

    /// Number of physical frames when none is given.
    pub const FRAME_CAPACITY: usize = 3;

    /// Policy when none is given.
    pub const POLICY: Policy = Policy::Lru;

    pub const fn frame_capacity() -> usize {
        FRAME_CAPACITY
    }
}

/// Page replacement policy.
///
/// Selects which resident page is evicted when a fault occurs and every
/// frame is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    /// Least Recently Used.
    ///
    /// Evicts the resident page whose last reference is oldest.
    #[default]
    #[serde(alias = "Lru", alias = "lru")]
    Lru,
    /// Optimal (Belady's algorithm).
    ///
    /// Evicts the resident page whose next reference lies farthest in the
    /// future, preferring pages that are never referenced again.
    #[serde(alias = "Optimal", alias = "optimal", alias = "OPT", alias = "opt")]
    Optimal,
}

impl Policy {
    /// Every supported policy, in display order.
    pub const ALL: [Self; 2] = [Self::Lru, Self::Optimal];

    /// Whether the engine must maintain the recency track for this policy.
    pub const fn tracks_recency(self) -> bool {
        matches!(self, Self::Lru)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lru => f.write_str("LRU"),
            Self::Optimal => f.write_str("OPTIMAL"),
        }
    }
}

impl FromStr for Policy {
    type Err = ConfigError;

    /// Maps a policy selector string (case-insensitive) to a policy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(Self::Lru),
            "optimal" | "opt" | "belady" => Ok(Self::Optimal),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Immutable configuration of one simulation run.
///
/// Fields are private so the invariants checked at construction (positive frame
/// capacity, non-empty reference sequence) hold for the config's whole lifetime.
///
/// # Examples
///
/// Deserializing from JSON:
///
/// ```
/// use pagesim_core::config::{Policy, SimulationConfig};
///
/// let json = r#"{
///     "frame_capacity": 4,
///     "reference_sequence": [1, 2, 3, 4, 1, 2],
///     "policy": "OPTIMAL"
/// }"#;
///
/// let config = SimulationConfig::from_json_str(json).unwrap();
/// assert_eq!(config.frame_capacity(), 4);
/// assert_eq!(config.policy(), Policy::Optimal);
/// assert_eq!(config.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct SimulationConfig {
    frame_capacity: usize,
    reference_sequence: Vec<PageId>,
    policy: Policy,
}

impl SimulationConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroFrames`] if `frame_capacity` is zero, and
    /// [`ConfigError::EmptySequence`] if `reference_sequence` is empty.
    pub fn new(
        frame_capacity: usize,
        reference_sequence: Vec<PageId>,
        policy: Policy,
    ) -> Result<Self, ConfigError> {
        if frame_capacity == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        if reference_sequence.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        tracing::info!(
            frames = frame_capacity,
            references = reference_sequence.len(),
            %policy,
            "simulation configured"
        );
        Ok(Self {
            frame_capacity,
            reference_sequence,
            policy,
        })
    }

    /// Builds a configuration from a comma-separated reference string.
    ///
    /// Tokens without a leading integer are discarded; see [`parse_reference_string`].
    ///
    /// # Errors
    ///
    /// Any error of [`parse_reference_string`] or [`SimulationConfig::new`].
    pub fn from_reference_str(
        frame_capacity: usize,
        references: &str,
        policy: Policy,
    ) -> Result<Self, ConfigError> {
        Self::new(frame_capacity, parse_reference_string(references)?, policy)
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// `reference_sequence` may be an array of integers or a comma-separated
    /// string. `frame_capacity` defaults to 3 and `policy` to `LRU`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed documents, otherwise the same
    /// validation errors as [`SimulationConfig::new`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`SimulationConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of physical frames.
    pub const fn frame_capacity(&self) -> usize {
        self.frame_capacity
    }

    /// The page reference sequence, in processing order.
    pub fn reference_sequence(&self) -> &[PageId] {
        &self.reference_sequence
    }

    /// The replacement policy.
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of references in the sequence.
    pub fn len(&self) -> usize {
        self.reference_sequence.len()
    }

    /// Always `false`: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.reference_sequence.is_empty()
    }

    /// Returns a copy of this configuration with a different policy.
    #[must_use]
    pub fn with_policy(&self, policy: Policy) -> Self {
        Self {
            policy,
            ..self.clone()
        }
    }
}

/// Parses a user-typed reference string such as `"7, 0, 1, 2"`.
///
/// Splits on commas and trims each token. Each token contributes its leading
/// integer (`"3abc"` is 3, `"2.9"` is 2); tokens with no leading integer are
/// discarded. A leading integer that is negative or exceeds `u32::MAX` is an
/// error.
///
/// # Errors
///
/// [`ConfigError::PageOutOfRange`] for an out-of-range integer token.
pub fn parse_reference_string(input: &str) -> Result<Vec<PageId>, ConfigError> {
    let mut pages = Vec::new();
    for token in input.split(',') {
        match token.parse::<PageId>() {
            Ok(page) => pages.push(page),
            Err(PageParseError::NotNumeric) => {
                tracing::debug!(token = token.trim(), "discarding reference token without a leading integer");
            }
            Err(PageParseError::OutOfRange) => {
                return Err(ConfigError::PageOutOfRange {
                    token: token.trim().to_string(),
                });
            }
        }
    }
    Ok(pages)
}

/// Unvalidated configuration as it appears in a JSON document.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "defaults::frame_capacity")]
    frame_capacity: usize,
    reference_sequence: RawReferences,
    #[serde(default = "RawConfig::default_policy")]
    policy: Policy,
}

impl RawConfig {
    const fn default_policy() -> Policy {
        defaults::POLICY
    }
}

/// References given either as a JSON array or as the comma-separated form.
///
/// Array entries stay as raw numbers so negative, fractional, and oversized
/// pages are reported as [`ConfigError::PageOutOfRange`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawReferences {
    List(Vec<serde_json::Number>),
    Text(String),
}

/// Converts one JSON array entry to a page identifier.
fn page_from_number(n: &serde_json::Number) -> Result<PageId, ConfigError> {
    n.as_u64()
        .and_then(|page| u32::try_from(page).ok())
        .map(PageId)
        .ok_or_else(|| ConfigError::PageOutOfRange {
            token: n.to_string(),
        })
}

impl TryFrom<RawConfig> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let pages = match raw.reference_sequence {
            RawReferences::Text(text) => parse_reference_string(&text)?,
            RawReferences::List(list) => list
                .iter()
                .map(page_from_number)
                .collect::<Result<Vec<_>, _>>()?,
        };
        Self::new(raw.frame_capacity, pages, raw.policy)
    }
}

impl Default for SimulationConfig {
    /// The classic textbook trace with 3 frames under LRU.
    fn default() -> Self {
        Self {
            frame_capacity: defaults::FRAME_CAPACITY,
            reference_sequence: [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]
                .into_iter()
                .map(PageId)
                .collect(),
            policy: defaults::POLICY,
        }
    }
}
