//! Common types shared across the engine.
//!
//! This module provides the foundational vocabulary of the crate:
//! 1. **Addressing:** Strongly-typed line addresses, line indices, and
//!    region tags.
//! 2. **Events:** The access-event record delivered by the host's cache
//!    model, with its level and outcome classifiers.
//! 3. **Errors:** Configuration error types.

/// Line and region address types.
pub mod addr;
/// Access event records and classifiers.
pub mod data;
/// Configuration error types.
pub mod error;

pub use addr::{LineAddr, LineIndex, RegionTag};
pub use data::{AccessEvent, AccessKind, CacheLevel};
pub use error::ConfigError;
