//! Miss-pattern-driven prefetch engine.
//!
//! Trains on the merge counts of miss-status holding registers: a line whose
//! in-flight miss keeps absorbing additional requests marks a region under
//! concentrated demand, and the engine answers with a sequential burst of
//! next-line prefetches scaled by the current register-file occupancy.

use tracing::{debug, trace};

use crate::common::addr::LineIndex;
use crate::common::data::{AccessEvent, AccessKind, CacheLevel};
use crate::config::{CoreClass, PrefetchConfig};
use crate::engine::region::RegionTable;
use crate::engine::{RequestQueue, throttle};
use crate::stats::PrefetchStats;

/// Instantaneous merge count above which a single miss is read as a burst
/// signal.
const MERGE_BURST_TRIGGER: u64 = 3;

/// Accumulated merge count above which a region switches to the dynamic
/// degree derived from its own merge history.
const HEAVY_MERGE_TRIGGER: u64 = 200;

/// Divisor converting a region's accumulated merge count into a base degree.
/// The division is integer and truncates before the throttle is applied.
const MERGE_DEGREE_DIVISOR: u64 = 25;

/// Accumulated merge count from which the accuracy gate engages.
const SUPPRESS_MERGE_FLOOR: u64 = 100;

/// Accuracy below which a heavily merged region stops prefetching.
const SUPPRESS_ACCURACY: f64 = 0.2;

/// Base burst degree for a freshly allocated region.
const COLD_BURST_DEGREE: f64 = 2.0;

/// Base burst degree for an already-tracked region with a strong
/// instantaneous merge signal.
const WARM_BURST_DEGREE: f64 = 4.0;

/// Adaptive prefetch engine driven by miss-status holding register merge
/// patterns.
///
/// One instance serves a single core and is trained from both cache levels
/// through [`MshrPrefetcher::observe`]. The engine owns no queue; the host
/// passes its downstream request queue into every observation.
#[derive(Debug)]
pub struct MshrPrefetcher {
    enabled: bool,
    ready: bool,
    core_id: usize,
    table_entries: usize,
    line_size_log2: u32,
    region_shift_bits: u32,
    mshr_capacity: usize,
    table: Option<RegionTable>,
    stats: PrefetchStats,
}

impl MshrPrefetcher {
    /// Creates an engine for one core of the given class.
    ///
    /// The engine starts disabled unless the configuration enables its core
    /// class, and holds no table until [`MshrPrefetcher::init`] runs. Zero
    /// capacities in the configuration are clamped to one.
    pub fn new(config: &PrefetchConfig, class: CoreClass) -> Self {
        let table_entries = if config.table_entries == 0 {
            1
        } else {
            config.table_entries
        };
        let mshr_capacity = if config.mshr_capacity == 0 {
            1
        } else {
            config.mshr_capacity
        };

        Self {
            enabled: config.enabled_for(class),
            ready: false,
            core_id: 0,
            table_entries,
            line_size_log2: config.line_size_log2,
            region_shift_bits: config.region_shift_bits,
            mshr_capacity,
            table: None,
            stats: PrefetchStats::default(),
        }
    }

    /// Binds the engine to a core and allocates its region table.
    ///
    /// Does nothing when the engine is disabled, so a disabled engine never
    /// pays for a table. Re-initialising discards all training state.
    pub fn init(&mut self, core_id: usize) {
        if !self.enabled {
            return;
        }
        self.core_id = core_id;
        self.table = Some(RegionTable::new(self.table_entries));
        self.ready = true;
        debug!(
            core = core_id,
            entries = self.table_entries,
            "mshr prefetcher ready"
        );
    }

    /// Identifier reported to the host's prefetcher registry.
    pub fn name(&self) -> &'static str {
        "mshr"
    }

    /// Whether the configuration enabled this engine for its core class.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether [`MshrPrefetcher::init`] has run on an enabled engine.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Telemetry counters accumulated since construction.
    pub fn stats(&self) -> &PrefetchStats {
        &self.stats
    }

    /// Mutable counter access, for hosts that reset between sample windows.
    pub fn stats_mut(&mut self) -> &mut PrefetchStats {
        &mut self.stats
    }

    /// Read-only view of the region table, once allocated.
    pub fn table(&self) -> Option<&RegionTable> {
        self.table.as_ref()
    }

    /// Delivers one access event to the engine.
    ///
    /// Hits and misses train the region table and may emit a prefetch burst
    /// into `queue`; prefetch hits are counted and otherwise ignored. Both
    /// cache levels train identically. A disabled or uninitialised engine
    /// is inert and leaves every counter untouched.
    ///
    /// # Arguments
    ///
    /// * `level` - cache level that observed the access, for telemetry.
    /// * `kind` - outcome of the access.
    /// * `event` - the access record, including the merge count and the
    ///   register-file occupancy sampled when the event fired.
    /// * `now` - current simulation cycle.
    /// * `queue` - downstream queue receiving any emitted prefetches.
    ///
    /// # Returns
    ///
    /// The number of prefetch lines the queue accepted for this event.
    pub fn observe(
        &mut self,
        level: CacheLevel,
        kind: AccessKind,
        event: &AccessEvent,
        now: u64,
        queue: &mut dyn RequestQueue,
    ) -> usize {
        if !self.enabled || !self.ready {
            return 0;
        }

        match level {
            CacheLevel::L1 => self.stats.l1_events += 1,
            CacheLevel::L2 => self.stats.l2_events += 1,
        }

        match kind {
            AccessKind::Hit => {
                self.stats.hits_observed += 1;
                self.train(event, true, now, queue)
            }
            AccessKind::Miss => {
                self.stats.misses_observed += 1;
                self.train(event, false, now, queue)
            }
            AccessKind::PrefetchHit => {
                self.stats.pref_hits_observed += 1;
                0
            }
        }
    }

    /// Trains the region table on one hit or miss and emits any resulting
    /// burst. Returns the number of accepted prefetch lines.
    fn train(
        &mut self,
        event: &AccessEvent,
        is_hit: bool,
        now: u64,
        queue: &mut dyn RequestQueue,
    ) -> usize {
        let Some(table) = self.table.as_mut() else {
            return 0;
        };

        let line = event.line_addr.line_index(self.line_size_log2);
        let region = event.line_addr.region_tag(self.region_shift_bits);
        let throttle = throttle::compute(event.mshr_occupancy, self.mshr_capacity);

        let degree = match table.lookup(region) {
            Some(slot) => {
                let entry = table.entry_mut(slot);
                entry.last_access = now;

                if is_hit {
                    entry.total_hits += 1;
                    return 0;
                }

                entry.merge_count += event.merge_count;
                entry.total_accesses += 1;

                let merges = entry.merge_count;
                let accuracy = entry.accuracy();
                if merges > SUPPRESS_MERGE_FLOOR && accuracy < SUPPRESS_ACCURACY {
                    self.stats.suppressed += 1;
                    trace!(
                        region = region.val(),
                        merges,
                        accuracy,
                        "low-accuracy region suppressed"
                    );
                    return 0;
                }

                if merges > HEAVY_MERGE_TRIGGER {
                    ((merges / MERGE_DEGREE_DIVISOR) as f64 * throttle) as usize
                } else if event.merge_count > MERGE_BURST_TRIGGER {
                    (WARM_BURST_DEGREE * throttle) as usize
                } else {
                    0
                }
            }
            // A hit in an untracked region carries no signal.
            None if is_hit => return 0,
            None => {
                if table.valid_count() == table.capacity() {
                    self.stats.evictions += 1;
                }
                table.allocate(region, now);
                self.stats.allocations += 1;
                trace!(region = region.val(), cycle = now, "region allocated");

                if event.merge_count > MERGE_BURST_TRIGGER {
                    (COLD_BURST_DEGREE * throttle) as usize
                } else {
                    0
                }
            }
        };

        self.emit_burst(line, degree, queue)
    }

    /// Submits `degree` sequential lines after `start`, stopping at the
    /// first rejection. Returns the number of accepted lines.
    fn emit_burst(
        &mut self,
        start: LineIndex,
        degree: usize,
        queue: &mut dyn RequestQueue,
    ) -> usize {
        if degree == 0 {
            return 0;
        }
        self.stats.bursts += 1;

        let mut accepted = 0;
        for step in 1..=degree as u64 {
            let target = start.offset(step);
            if !queue.submit(target, self.core_id) {
                self.stats.lines_rejected += 1;
                break;
            }
            accepted += 1;
            self.stats.lines_submitted += 1;
        }

        trace!(
            start = start.val(),
            degree,
            accepted,
            "sequential burst emitted"
        );
        accepted
    }
}
