//! # Adaptive MSHR-Pattern Prefetch Engine
//!
//! This library implements a hardware prefetch engine for cycle-level
//! processor and memory-hierarchy simulators. The engine trains on the
//! merge behaviour of miss-status holding registers: when an in-flight miss
//! keeps absorbing further requests to the same line, the surrounding
//! address region is under concentrated demand, and the engine emits
//! sequential next-line bursts sized by that pressure and scaled back as
//! the register file fills.
//!
//! The crate provides:
//! 1. **Engine:** The per-core trainer, its region tracking table, and the
//!    occupancy throttle ([`engine`]).
//! 2. **Configuration:** Serde-backed knobs with validation ([`config`]).
//! 3. **Telemetry:** Cumulative counters with a report printer ([`stats`]).
//! 4. **Common types:** Strongly-typed addresses, access events, and
//!    errors ([`common`]).
//!
//! The host drives the engine through [`MshrPrefetcher::observe`], handing
//! it each cache access together with the current cycle and the downstream
//! [`RequestQueue`] that admits or refuses prefetch lines.

/// Common types shared across the engine.
pub mod common;
/// Configuration knobs and validation.
pub mod config;
/// The prefetch engine and its components.
pub mod engine;
/// Telemetry counters and reporting.
pub mod stats;

pub use crate::common::{AccessEvent, AccessKind, CacheLevel, ConfigError, LineAddr, LineIndex};
pub use crate::config::{CoreClass, PrefetchConfig};
pub use crate::engine::{MshrPrefetcher, RequestQueue};
pub use crate::stats::PrefetchStats;
