//! Property Tests.
//!
//! Randomised access streams driven through the engine, checking the
//! structural invariants that must hold for every interleaving: table
//! occupancy, tag uniqueness, ladder codomain, and burst shape.

use crate::common::harness::{event, ready_engine};
use crate::common::mocks::queue::RecordingQueue;
use prefsim_core::common::{AccessKind, CacheLevel};
use prefsim_core::engine::throttle;
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    /// The table never tracks more regions than it has slots, and no two
    /// valid slots ever track the same tag, whatever the access stream.
    #[test]
    fn table_occupancy_and_tag_uniqueness_hold(
        capacity in 1_usize..8,
        accesses in vec((0_u64..0x80_0000, any::<bool>(), 0_u64..400, 0_usize..48), 1..150),
    ) {
        let mut engine = ready_engine(capacity);
        let mut queue = RecordingQueue::unbounded();

        for (cycle, &(addr, is_hit, merge, occupancy)) in accesses.iter().enumerate() {
            let kind = if is_hit { AccessKind::Hit } else { AccessKind::Miss };
            engine.observe(
                CacheLevel::L1,
                kind,
                &event(addr, merge, occupancy),
                cycle as u64,
                &mut queue,
            );

            let table = engine.table().unwrap();
            prop_assert!(table.valid_count() <= capacity);

            let mut tags: Vec<u64> = table
                .entries()
                .iter()
                .filter(|e| e.valid)
                .map(|e| e.tag.val())
                .collect();
            let total = tags.len();
            tags.sort_unstable();
            tags.dedup();
            prop_assert_eq!(tags.len(), total);
        }
    }

    /// The ladder only ever produces its two reachable rungs.
    #[test]
    fn throttle_output_is_a_reachable_rung(
        occupancy in 0_usize..2048,
        capacity in 1_usize..2048,
    ) {
        let factor = throttle::compute(occupancy, capacity);
        prop_assert!(factor == 0.75 || factor == 1.0);
    }

    /// Whatever the queue admits, an accepted burst is a gapless run of
    /// successor lines starting one past the trigger.
    #[test]
    fn bursts_are_sequential_and_stop_at_the_limit(
        addr in 0_u64..0x80_0000,
        merge in 4_u64..400,
        limit in 0_usize..16,
    ) {
        let mut engine = ready_engine(4);
        let mut queue = RecordingQueue::with_capacity(limit);

        let accepted = engine.observe(
            CacheLevel::L1,
            AccessKind::Miss,
            &event(addr, merge, 0),
            1,
            &mut queue,
        );

        // Cold path at full throttle: two lines intended.
        prop_assert_eq!(accepted, 2_usize.min(limit));
        let line = addr >> 6;
        let expected: Vec<u64> = (1..=accepted as u64).map(|k| line + k).collect();
        prop_assert_eq!(queue.lines(), expected);
    }
}
