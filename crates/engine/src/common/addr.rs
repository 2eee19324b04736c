//! Line and region address types.
//!
//! This module defines strong types for the three address granularities the
//! engine works at, to prevent accidental mixing between them:
//! 1. **Byte Granularity:** The raw line address reported by the cache.
//! 2. **Line Granularity:** The line index used for sequential burst emission.
//! 3. **Region Granularity:** The tag keying the region tracking table.

/// A byte address of a cache access, as reported by the host's cache model.
///
/// Line addresses arrive untranslated from the training hooks and are reduced
/// to a [`LineIndex`] or [`RegionTag`] with the configured shift amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineAddr(pub u64);

/// A cache-line index (byte address shifted down by the line-size log2).
///
/// Prefetch requests are issued at line granularity; sequential bursts walk
/// forward one index at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineIndex(pub u64);

/// An address-region identifier (byte address shifted down by the region
/// shift), used as the tag of a region tracking table entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RegionTag(pub u64);

impl LineAddr {
    /// Creates a new line address from a raw 64-bit value.
    #[inline(always)]
    pub fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }

    /// Reduces this byte address to a line index.
    ///
    /// # Arguments
    ///
    /// * `line_size_log2` - log2 of the cache line size in bytes (below 64).
    #[inline(always)]
    pub fn line_index(self, line_size_log2: u32) -> LineIndex {
        LineIndex(self.0 >> line_size_log2)
    }

    /// Reduces this byte address to a region tag by discarding the low
    /// address bits.
    ///
    /// # Arguments
    ///
    /// * `region_shift_bits` - number of low bits discarded (below 64).
    #[inline(always)]
    pub fn region_tag(self, region_shift_bits: u32) -> RegionTag {
        RegionTag(self.0 >> region_shift_bits)
    }
}

impl LineIndex {
    /// Creates a new line index from a raw 64-bit value.
    #[inline(always)]
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    /// Returns the raw 64-bit index value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }

    /// Returns the index `lines` ahead of this one.
    ///
    /// Wraps on overflow, which cannot occur for any realistic address space
    /// but keeps burst arithmetic total.
    #[inline(always)]
    pub fn offset(self, lines: u64) -> Self {
        Self(self.0.wrapping_add(lines))
    }
}

impl RegionTag {
    /// Creates a new region tag from a raw 64-bit value.
    #[inline(always)]
    pub fn new(tag: u64) -> Self {
        Self(tag)
    }

    /// Returns the raw 64-bit tag value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }
}
