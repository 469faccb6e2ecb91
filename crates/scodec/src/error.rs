use thiserror::Error;

/// Errors produced by curve construction, conversion and the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The grid side is not a power of two, or is smaller than two.
    #[error("invalid order {0}: grid side must be a power of two and at least 2")]
    InvalidOrder(u32),
    /// The grid has more cells than a `u32` distance can address.
    #[error("order {side} is too large: grid side must be at most {max}")]
    OrderTooLarge {
        /// Requested side length.
        side: u32,
        /// Largest supported side length.
        max: u32,
    },
    /// A coordinate lies outside the grid.
    #[error("coordinate ({x}, {y}) is outside a {side}x{side} grid")]
    CoordinateOutOfRange {
        /// X coordinate.
        x: u32,
        /// Y coordinate.
        y: u32,
        /// Grid side length.
        side: u32,
    },
    /// A distance lies beyond the end of the curve.
    #[error("distance {distance} is outside the curve (length {length})")]
    DistanceOutOfRange {
        /// Requested distance.
        distance: u32,
        /// Number of cells on the curve.
        length: u32,
    },
    /// A decoded cell maps to a bit outside the requested block.
    #[error("cell at distance {distance} does not fit in a block of {bits} bits")]
    BlockOverflow {
        /// Curve distance of the offending cell.
        distance: u32,
        /// Size of the output block in bits.
        bits: u64,
    },
    /// The requested block is longer than any block the grid can produce.
    #[error("block of {len} bytes is too large for this grid (max {max})")]
    BlockTooLarge {
        /// Requested block length in bytes.
        len: usize,
        /// Longest accepted block in bytes.
        max: usize,
    },
    /// Malformed textual input.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
