//! # Telemetry Tests
//!
//! Tests for the engine's counter bookkeeping and derived rates. The
//! engine-driven counter updates themselves are verified alongside the
//! trainer tests; these cover the arithmetic.

use prefsim_core::stats::PrefetchStats;

#[test]
fn test_counters_start_at_zero() {
    let stats = PrefetchStats::default();
    assert_eq!(stats.l1_events, 0);
    assert_eq!(stats.l2_events, 0);
    assert_eq!(stats.hits_observed, 0);
    assert_eq!(stats.misses_observed, 0);
    assert_eq!(stats.pref_hits_observed, 0);
    assert_eq!(stats.allocations, 0);
    assert_eq!(stats.evictions, 0);
    assert_eq!(stats.suppressed, 0);
    assert_eq!(stats.bursts, 0);
    assert_eq!(stats.lines_submitted, 0);
    assert_eq!(stats.lines_rejected, 0);
}

#[test]
fn test_acceptance_rate_zero_before_first_attempt() {
    let stats = PrefetchStats::default();
    assert!(stats.acceptance_rate().abs() < f64::EPSILON);
}

#[test]
fn test_acceptance_rate_is_accepted_over_attempts() {
    let stats = PrefetchStats {
        lines_submitted: 3,
        lines_rejected: 1,
        ..PrefetchStats::default()
    };
    assert!((stats.acceptance_rate() - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_acceptance_rate_all_rejected() {
    let stats = PrefetchStats {
        lines_rejected: 5,
        ..PrefetchStats::default()
    };
    assert!(stats.acceptance_rate().abs() < f64::EPSILON);
}

#[test]
fn test_print_smoke() {
    let stats = PrefetchStats {
        l1_events: 10,
        l2_events: 4,
        hits_observed: 6,
        misses_observed: 8,
        allocations: 3,
        bursts: 2,
        lines_submitted: 5,
        lines_rejected: 1,
        ..PrefetchStats::default()
    };
    stats.print();
}
