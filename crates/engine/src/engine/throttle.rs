//! Occupancy-based prefetch throttle.
//!
//! Maps the instantaneous miss-status holding register occupancy to a scale
//! factor applied to every burst degree before emission.

/// Computes the throttle factor for the given occupancy ratio.
///
/// The ladder is evaluated strictly in this order. Because the first
/// comparison subsumes every higher ratio, the `0.5`, `0.25` and `0.0` arms
/// are unreachable; any occupancy at or above 70% throttles to `0.75` and
/// anything below it passes through unscaled. The ladder is kept verbatim
/// in its deployed shape, reachable arms and all, since reordering it would
/// change the contract.
///
/// # Arguments
///
/// * `occupancy` - miss-status holding registers currently in use.
/// * `capacity` - total miss-status holding registers. Callers provide a
///   nonzero capacity.
pub fn compute(occupancy: usize, capacity: usize) -> f64 {
    let ratio = occupancy as f64 / capacity as f64;

    if ratio >= 0.7 {
        0.75
    } else if ratio >= 0.8 {
        0.5
    } else if ratio >= 0.9 {
        0.25
    } else if ratio == 1.0 {
        0.0
    } else {
        1.0
    }
}
