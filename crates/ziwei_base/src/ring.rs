//! Modular arithmetic on the ring of 12 sector positions.
//!
//! Every position in a chart (sector labels, anchors, star placements) lives
//! on a closed ring of 12 slots. All index arithmetic in this crate goes
//! through [`offset`], so intermediate negative values never leak out as
//! out-of-range indices.

/// Number of positions on the chart ring.
pub const RING_SIZE: i32 = 12;

/// Number of positions on the heavenly-stem cycle.
pub const STEM_CYCLE: i32 = 10;

/// Step `n` positions from `base` around the ring of 12.
///
/// Result is always in [0, 11], whatever the sign of `base` or `n`.
pub const fn offset(base: i32, n: i32) -> u8 {
    (((base + n) % RING_SIZE + RING_SIZE) % RING_SIZE) as u8
}

/// Reduce `n` onto the base-10 stem cycle, in [0, 9].
pub const fn stem_cycle(n: i32) -> u8 {
    n.rem_euclid(STEM_CYCLE) as u8
}

/// Forward distance from `from` to `to` on the ring, in [0, 11].
pub const fn distance(from: u8, to: u8) -> u8 {
    offset(to as i32, -(from as i32))
}
