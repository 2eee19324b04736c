//! Address Newtype Tests.
//!
//! Covers the line and region derivations and the successor arithmetic the
//! burst emitter walks with.

use prefsim_core::common::{LineAddr, LineIndex};

/// A line index is the raw byte address with the offset bits dropped.
#[test]
fn line_index_drops_the_offset_bits() {
    let addr = LineAddr::new(0x1_2345);
    assert_eq!(addr.line_index(6).val(), addr.val() >> 6);

    // Two addresses in the same 64-byte line share an index.
    assert_eq!(addr.line_index(6), LineAddr::new(0x1_2370).line_index(6));
}

/// Addresses within one 256-byte span share a region tag; the next span
/// does not.
#[test]
fn region_tag_groups_whole_spans() {
    let base = LineAddr::new(0x4_0000);
    assert_eq!(base.region_tag(8), LineAddr::new(0x4_00FF).region_tag(8));
    assert_ne!(base.region_tag(8), LineAddr::new(0x4_0100).region_tag(8));
}

/// `offset` steps forward in whole lines.
#[test]
fn offset_steps_sequential_lines() {
    let line = LineIndex::new(1024);
    assert_eq!(line.offset(1), LineIndex::new(1025));
    assert_eq!(line.offset(3), LineIndex::new(1027));
}

/// Successor arithmetic wraps at the top of the address space instead of
/// panicking.
#[test]
fn offset_wraps_at_address_space_top() {
    let line = LineIndex::new(u64::MAX);
    assert_eq!(line.offset(1), LineIndex::new(0));
}
