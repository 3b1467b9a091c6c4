//! Common types shared by every part of the simulator.
//!
//! This module provides the building blocks used across configuration, engine, and
//! simulation code. It includes:
//! 1. **Page Identifiers:** A strong type for page numbers so they are never confused with frame indices.
//! 2. **Error Handling:** Configuration and runtime error types with a shared result alias.

/// Error types for configuration and stepping.
pub mod error;

/// Page identifier type.
pub mod page;

pub use error::{ConfigError, SimError, SimResult};
pub use page::PageId;
