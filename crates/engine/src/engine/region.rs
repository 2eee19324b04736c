//! Region tracking table.
//!
//! A small, fully-associative table keyed by region tag. Each entry carries
//! the per-region training state: recency, accumulated merge pressure, and
//! the hit/miss history that feeds the accuracy estimate.

use crate::common::addr::RegionTag;

/// Training state for one tracked address region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionEntry {
    /// Region tag this entry tracks. Meaningless while `valid` is false.
    pub tag: RegionTag,
    /// Whether this slot currently tracks a region.
    pub valid: bool,
    /// Cycle of the most recent access to the region, hit or miss.
    pub last_access: u64,
    /// Merge counts accumulated across all misses to the region.
    pub merge_count: u64,
    /// Demand hits observed in the region since allocation.
    pub total_hits: u64,
    /// Demand misses observed in the region since allocation. The allocating
    /// miss itself is not counted.
    pub total_accesses: u64,
}

impl RegionEntry {
    /// Ratio of hits to tracked misses for this region.
    ///
    /// Returns `0.0` until the first post-allocation miss is recorded, so a
    /// freshly allocated region is never judged accurate on no evidence.
    pub fn accuracy(&self) -> f64 {
        if self.total_accesses == 0 {
            0.0
        } else {
            self.total_hits as f64 / self.total_accesses as f64
        }
    }
}

/// Fully-associative table of [`RegionEntry`] slots with least-recently-used
/// replacement.
#[derive(Clone, Debug)]
pub struct RegionTable {
    entries: Vec<RegionEntry>,
}

impl RegionTable {
    /// Creates a table with `capacity` invalid slots.
    ///
    /// A zero capacity is clamped to one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 { 1 } else { capacity };
        Self {
            entries: vec![RegionEntry::default(); capacity],
        }
    }

    /// Number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of slots currently tracking a region.
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }

    /// Read-only view of every slot, valid or not, in index order.
    pub fn entries(&self) -> &[RegionEntry] {
        &self.entries
    }

    /// Returns the slot index tracking `tag`, if any.
    pub fn lookup(&self, tag: RegionTag) -> Option<usize> {
        self.entries.iter().position(|e| e.valid && e.tag == tag)
    }

    /// Allocates a slot for `tag`, resetting all of its training state, and
    /// returns the chosen slot index.
    ///
    /// The first invalid slot wins outright. With every slot valid, the slot
    /// with the strictly oldest `last_access` is replaced; on a recency tie
    /// the lowest index is kept as the victim.
    ///
    /// Callers look up the tag first; allocating a tag that is already
    /// tracked would duplicate it.
    pub fn allocate(&mut self, tag: RegionTag, now: u64) -> usize {
        let mut victim = 0;
        for i in 0..self.entries.len() {
            if !self.entries[i].valid {
                victim = i;
                break;
            }
            if self.entries[i].last_access < self.entries[victim].last_access {
                victim = i;
            }
        }

        self.entries[victim] = RegionEntry {
            tag,
            valid: true,
            last_access: now,
            merge_count: 0,
            total_hits: 0,
            total_accesses: 0,
        };
        victim
    }

    /// Mutable access to one slot for training updates.
    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut RegionEntry {
        &mut self.entries[index]
    }
}
