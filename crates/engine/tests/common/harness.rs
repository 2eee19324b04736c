use prefsim_core::common::{AccessEvent, LineAddr};
use prefsim_core::config::{CoreClass, PrefetchConfig};
use prefsim_core::engine::MshrPrefetcher;
use tracing_subscriber::EnvFilter;

/// Returns a configuration with the engine enabled for small cores and the
/// given region table capacity, everything else at defaults.
pub fn enabled_config(table_entries: usize) -> PrefetchConfig {
    PrefetchConfig {
        enable_small: true,
        table_entries,
        ..PrefetchConfig::default()
    }
}

/// Builds an initialised engine bound to core 0 with the given region table
/// capacity.
pub fn ready_engine(table_entries: usize) -> MshrPrefetcher {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let mut engine = MshrPrefetcher::new(&enabled_config(table_entries), CoreClass::Small);
    engine.init(0);
    engine
}

/// Builds an access event at `addr` with the given instantaneous merge count
/// and register-file occupancy. Thread id and PC are fixed; training ignores
/// them.
pub fn event(addr: u64, merge_count: u64, mshr_occupancy: usize) -> AccessEvent {
    AccessEvent {
        tid: 0,
        line_addr: LineAddr::new(addr),
        pc: 0x8000_0000,
        merge_count,
        mshr_occupancy,
    }
}
