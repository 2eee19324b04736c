//! Shared data types describing cache access events.

use crate::common::addr::LineAddr;

/// The cache level at which an access event was observed.
///
/// The training algorithm is identical for both levels; the level is recorded
/// for telemetry only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheLevel {
    /// First-level data cache.
    L1,
    /// Second-level cache.
    L2,
}

/// The outcome of a cache access, as classified by the host's cache model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    /// The access hit a resident line.
    Hit,
    /// The access missed and allocated a miss-status holding register.
    Miss,
    /// The access hit a line that was brought in by a prefetch.
    ///
    /// Prefetch hits are counted but never train the engine; the host's
    /// accuracy bookkeeping already credits them elsewhere.
    PrefetchHit,
}

/// A single demand-access event delivered to the engine by the host.
///
/// The thread id and instruction address are carried for parity with the
/// host's hook signature; training keys on the line address alone.
#[derive(Clone, Copy, Debug)]
pub struct AccessEvent {
    /// Hardware thread that issued the access.
    pub tid: usize,
    /// Byte address of the accessed cache line.
    pub line_addr: LineAddr,
    /// Instruction address of the triggering load or store.
    pub pc: u64,
    /// Number of requests merged into the miss-status holding register entry
    /// for this line at the time of the event.
    pub merge_count: u64,
    /// Number of miss-status holding registers in use when the event fired.
    pub mshr_occupancy: usize,
}
