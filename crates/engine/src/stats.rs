//! Engine statistics collection and reporting.
//!
//! This module tracks telemetry for the prefetch engine. It provides:
//! 1. **Training events:** Access counts by cache level and outcome.
//! 2. **Table activity:** Region allocations, evictions, and suppressions.
//! 3. **Emission:** Burst counts and per-line queue acceptance.

/// Telemetry counters for one engine instance.
///
/// All counters are cumulative from construction and only move while the
/// engine is enabled and initialised.
#[derive(Clone, Debug, Default)]
pub struct PrefetchStats {
    /// Access events observed at the first-level cache.
    pub l1_events: u64,
    /// Access events observed at the second-level cache.
    pub l2_events: u64,
    /// Demand hits delivered to training.
    pub hits_observed: u64,
    /// Demand misses delivered to training.
    pub misses_observed: u64,
    /// Prefetch hits observed (counted, never trained on).
    pub pref_hits_observed: u64,

    /// Region table slots allocated, evicting or not.
    pub allocations: u64,
    /// Allocations that displaced a live region.
    pub evictions: u64,
    /// Misses swallowed by the low-accuracy suppression gate.
    pub suppressed: u64,

    /// Bursts that reached the emission loop with a nonzero degree.
    pub bursts: u64,
    /// Prefetch lines the downstream queue accepted.
    pub lines_submitted: u64,
    /// Prefetch lines the downstream queue refused, ending their burst.
    pub lines_rejected: u64,
}

impl PrefetchStats {
    /// Percentage of offered prefetch lines the queue accepted.
    ///
    /// Returns `0.0` before the first submission attempt.
    pub fn acceptance_rate(&self) -> f64 {
        let attempts = self.lines_submitted + self.lines_rejected;
        if attempts > 0 {
            100.0 * (self.lines_submitted as f64 / attempts as f64)
        } else {
            0.0
        }
    }

    /// Prints all statistics to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("MSHR PREFETCH ENGINE STATISTICS");
        println!("==========================================================");
        println!("events.l1                {}", self.l1_events);
        println!("events.l2                {}", self.l2_events);
        println!("events.hits              {}", self.hits_observed);
        println!("events.misses            {}", self.misses_observed);
        println!("events.pref_hits         {}", self.pref_hits_observed);
        println!("----------------------------------------------------------");
        println!("table.allocations        {}", self.allocations);
        println!("table.evictions          {}", self.evictions);
        println!("table.suppressed         {}", self.suppressed);
        println!("----------------------------------------------------------");
        println!("pref.bursts              {}", self.bursts);
        println!("pref.lines_submitted     {}", self.lines_submitted);
        println!("pref.lines_rejected      {}", self.lines_rejected);
        println!("pref.acceptance          {:.2}%", self.acceptance_rate());
        println!("==========================================================");
    }
}
