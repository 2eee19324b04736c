//! Adaptive prefetch engine.
//!
//! This module contains the engine proper and the components it is built
//! from:
//! 1. **Region Table:** Fully-associative training state keyed by address
//!    region, with least-recently-used replacement.
//! 2. **Throttle:** Occupancy-driven scaling of burst degrees.
//! 3. **Engine:** The trainer that turns merge-count signals into
//!    sequential prefetch bursts.

use crate::common::addr::LineIndex;

/// The miss-pattern-driven prefetch engine.
pub mod mshr;
/// Region tracking table and its entries.
pub mod region;
/// Occupancy-based throttle ladder.
pub mod throttle;

pub use mshr::MshrPrefetcher;
pub use region::{RegionEntry, RegionTable};

/// Downstream queue accepting prefetch requests from the engine.
///
/// Implemented by the host simulator over whatever sits below the trained
/// cache, typically its memory-request queue. The queue decides admission;
/// the engine stops a burst at the first rejection and never retries a
/// rejected line.
pub trait RequestQueue {
    /// Offers one prefetch line to the queue on behalf of `requester`.
    ///
    /// Returns `true` if the queue accepted the request, `false` if it is
    /// full or otherwise refuses it.
    fn submit(&mut self, line: LineIndex, requester: usize) -> bool;
}
