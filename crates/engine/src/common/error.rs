//! Error types for engine configuration.

use thiserror::Error;

/// Errors raised while loading or validating a prefetch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The region tracking table was configured with zero entries.
    #[error("region table capacity must be at least one entry")]
    ZeroTableCapacity,

    /// The miss-status holding register file was configured with zero entries.
    #[error("mshr capacity must be at least one entry")]
    ZeroMshrCapacity,

    /// The line-size shift would discard every address bit.
    #[error("line size log2 of {0} is out of range (must be below 64)")]
    LineShiftTooWide(u32),

    /// The region shift does not cover a whole number of cache lines, or
    /// would discard every address bit.
    #[error("region shift of {region} bits must lie in {line}..64 (a region spans whole lines)")]
    BadRegionShift {
        /// The configured region shift.
        region: u32,
        /// The configured line-size log2.
        line: u32,
    },

    /// The configuration document could not be parsed.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
