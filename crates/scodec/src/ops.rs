//! Support operations for curve calculation.

/// `1` if any bit of `mask` is set in `word`, else `0`.
#[inline]
pub const fn bit(word: u32, mask: u32) -> u32 {
    (word & mask != 0) as u32
}

/// Base iterator: quadrant bits `(rx, ry)` visited at position `i & 3`.
///
/// Positions 0..4 visit (0,0), (0,1), (1,1), (1,0); this is the 2-bit Gray
/// code of `i`, high bit `rx`.
#[inline]
pub const fn quadrant(i: u32) -> (u32, u32) {
    let rx = 1 & (i >> 1);
    let ry = 1 & (i ^ rx);
    (rx, ry)
}

/// Curve rank of the quadrant `(rx, ry)`; inverse of [`quadrant`].
#[inline]
pub const fn quadrant_rank(rx: u32, ry: u32) -> u32 {
    (3 * rx) ^ ry
}
