//! Configuration for the prefetch engine.
//!
//! Hosts hand the engine a [`PrefetchConfig`], either built in code or
//! deserialized from the simulator's configuration document. Every knob has
//! a default matching the shipped tuning, so an empty document yields a
//! valid (if disabled) configuration.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default values for every configuration knob.
mod defaults {
    /// Region tracking table capacity, in entries per engine instance.
    pub const TABLE_ENTRIES: usize = 32;
    /// Low address bits discarded to form a region tag (256-byte regions).
    pub const REGION_SHIFT_BITS: u32 = 8;
    /// log2 of the cache line size in bytes (64-byte lines).
    pub const LINE_SIZE_LOG2: u32 = 6;
    /// Miss-status holding register count used as the throttle denominator.
    pub const MSHR_CAPACITY: usize = 32;
}

/// Size class of the core an engine instance is attached to.
///
/// Heterogeneous simulations enable the engine per class rather than
/// per core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum CoreClass {
    /// In-order or little core.
    #[default]
    Small,
    /// Mid-sized core.
    Medium,
    /// Out-of-order or big core.
    Large,
}

/// Tuning knobs for the miss-pattern prefetch engine.
#[derive(Clone, Debug, Deserialize)]
pub struct PrefetchConfig {
    /// Enables the engine on small-class cores.
    #[serde(default)]
    pub enable_small: bool,
    /// Enables the engine on medium-class cores.
    #[serde(default)]
    pub enable_medium: bool,
    /// Enables the engine on large-class cores.
    #[serde(default)]
    pub enable_large: bool,
    /// Region tracking table capacity, in entries.
    #[serde(default = "PrefetchConfig::default_table_entries")]
    pub table_entries: usize,
    /// Low address bits discarded when mapping a line address to its region.
    #[serde(default = "PrefetchConfig::default_region_shift_bits")]
    pub region_shift_bits: u32,
    /// log2 of the cache line size in bytes.
    #[serde(default = "PrefetchConfig::default_line_size_log2")]
    pub line_size_log2: u32,
    /// Total miss-status holding registers, the throttle denominator.
    #[serde(default = "PrefetchConfig::default_mshr_capacity")]
    pub mshr_capacity: usize,
}

impl PrefetchConfig {
    /// Returns the default region table capacity.
    fn default_table_entries() -> usize {
        defaults::TABLE_ENTRIES
    }

    /// Returns the default region shift width.
    fn default_region_shift_bits() -> u32 {
        defaults::REGION_SHIFT_BITS
    }

    /// Returns the default cache line shift width.
    fn default_line_size_log2() -> u32 {
        defaults::LINE_SIZE_LOG2
    }

    /// Returns the default miss-status holding register count.
    fn default_mshr_capacity() -> usize {
        defaults::MSHR_CAPACITY
    }
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            enable_small: false,
            enable_medium: false,
            enable_large: false,
            table_entries: defaults::TABLE_ENTRIES,
            region_shift_bits: defaults::REGION_SHIFT_BITS,
            line_size_log2: defaults::LINE_SIZE_LOG2,
            mshr_capacity: defaults::MSHR_CAPACITY,
        }
    }
}

impl PrefetchConfig {
    /// Whether the engine is enabled for cores of the given class.
    pub fn enabled_for(&self, class: CoreClass) -> bool {
        match class {
            CoreClass::Small => self.enable_small,
            CoreClass::Medium => self.enable_medium,
            CoreClass::Large => self.enable_large,
        }
    }

    /// Parses a configuration from its JSON document and validates it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the document is malformed or fails
    /// [`PrefetchConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the knobs for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a capacity is zero, a shift is 64 bits
    /// or wider, or the region shift is narrower than the line shift (a
    /// region must span whole cache lines).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_entries == 0 {
            return Err(ConfigError::ZeroTableCapacity);
        }
        if self.mshr_capacity == 0 {
            return Err(ConfigError::ZeroMshrCapacity);
        }
        if self.line_size_log2 >= u64::BITS {
            return Err(ConfigError::LineShiftTooWide(self.line_size_log2));
        }
        if self.region_shift_bits < self.line_size_log2 || self.region_shift_bits >= u64::BITS {
            return Err(ConfigError::BadRegionShift {
                region: self.region_shift_bits,
                line: self.line_size_log2,
            });
        }
        Ok(())
    }
}
