//! Page identifier type.
//!
//! Pages and frames are both small integers in a replacement trace. Wrapping the
//! page number keeps the two apart at compile time: a `PageId` names *what* is
//! resident, a `usize` frame index names *where*.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A virtual page number referenced by the simulated program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl PageId {
    /// Creates a page identifier from a raw page number.
    #[inline]
    pub const fn new(page: u32) -> Self {
        Self(page)
    }

    /// Returns the raw page number.
    #[inline]
    pub const fn val(self) -> u32 {
        self.0
    }
}

impl From<u32> for PageId {
    fn from(page: u32) -> Self {
        Self(page)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a reference-string token could not become a [`PageId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageParseError {
    /// The token does not start with an integer (empty, alphabetic, `.5`).
    NotNumeric,
    /// The token's leading integer is negative or too large for a page number.
    OutOfRange,
}

impl FromStr for PageId {
    type Err = PageParseError;

    /// Parses the leading decimal integer of a trimmed token.
    ///
    /// An optional sign and the run of digits after it are read; whatever
    /// follows is ignored, so `"3abc"` is page 3 and `"2.9"` is page 2. A
    /// leading integer that does not fit a `u32` (including any negative
    /// number) is reported as [`PageParseError::OutOfRange`] rather than as
    /// non-numeric, so callers can reject it instead of silently dropping it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (negative, unsigned) = match token.as_bytes().first() {
            Some(b'-') => (true, &token[1..]),
            Some(b'+') => (false, &token[1..]),
            _ => (false, token),
        };
        let end = unsigned
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..end];

        if digits.is_empty() {
            return Err(PageParseError::NotNumeric);
        }
        if negative && digits.bytes().any(|b| b != b'0') {
            return Err(PageParseError::OutOfRange);
        }
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| PageParseError::OutOfRange)
    }
}
