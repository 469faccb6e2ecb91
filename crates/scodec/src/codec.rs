//! Spatial bit codec.
//!
//! A block of bytes is read as one big-endian bitstream. Bit `i` (counting
//! from the least significant bit of the last byte) is placed on the grid at
//! curve distance `i`, so a block becomes the list of cells whose bits are
//! set. Decoding sets the bit of every listed cell again.

use crate::{
    error::{Error, Result},
    hilbert,
    order::Order,
    point::Point,
};

/// Encoder/decoder between byte blocks and Hilbert grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialCodec {
    /// Grid the bits are laid out on.
    order: Order,
}

/// Bit `bit` of a big-endian block as `(byte index, mask)`.
fn locate(len: usize, bit: u32) -> (usize, u8) {
    (len - 1 - (bit / 8) as usize, 1 << (bit % 8))
}

impl SpatialCodec {
    /// Create a codec for a `side × side` grid.
    pub fn new(side: u32) -> Result<Self> {
        Ok(Self::with_order(Order::new(side)?))
    }

    /// Create a codec for an already validated order.
    pub const fn with_order(order: Order) -> Self {
        Self { order }
    }

    /// The grid order.
    pub const fn order(&self) -> Order {
        self.order
    }

    /// Number of bits one block can hold (`side²`).
    pub const fn capacity_bits(&self) -> u32 {
        self.order.length()
    }

    /// Longest block, in bytes, that [`decode`](Self::decode) accepts (`side²`).
    pub const fn max_block_len(&self) -> usize {
        self.order.length() as usize
    }

    /// Map the set bits of `block` to grid cells, in increasing bit order.
    ///
    /// Bits beyond [`capacity_bits`](Self::capacity_bits) are dropped, which
    /// keeps the trailing (least significant) bytes of an oversized block.
    pub fn encode(&self, block: &[u8]) -> Vec<Point> {
        let capacity = u64::from(self.capacity_bits());
        let mut cells = Vec::new();
        for (i, byte) in block.iter().rev().enumerate() {
            for shift in 0..8u32 {
                let bit = i as u64 * 8 + u64::from(shift);
                if bit >= capacity {
                    return cells;
                }
                if (byte >> shift) & 1 == 1 {
                    cells.push(hilbert::point(self.order, bit as u32));
                }
            }
        }
        cells
    }

    /// Rebuild a `len`-byte block from the cells produced by [`encode`](Self::encode).
    ///
    /// Cells may come in any order and repeats are harmless. A cell off the
    /// grid, or one whose bit does not fit in `len` bytes, is an error, and
    /// so is a `len` above [`max_block_len`](Self::max_block_len).
    pub fn decode(&self, cells: &[Point], len: usize) -> Result<Vec<u8>> {
        let max = self.max_block_len();
        if len > max {
            return Err(Error::BlockTooLarge { len, max });
        }
        let bits = len as u64 * 8;
        let mut block = vec![0u8; len];
        for &cell in cells {
            let distance = self.distance(cell)?;
            if u64::from(distance) >= bits {
                return Err(Error::BlockOverflow { distance, bits });
            }
            let (byte, mask) = locate(len, distance);
            block[byte] |= mask;
        }
        Ok(block)
    }

    /// Smallest block length, in bytes, that holds every bit in `cells`.
    pub fn required_len(&self, cells: &[Point]) -> Result<usize> {
        let mut highest = None;
        for &cell in cells {
            let distance = self.distance(cell)?;
            highest = highest.max(Some(distance));
        }
        Ok(highest.map_or(0, |d| d as usize / 8 + 1))
    }

    /// Curve distance of `cell`, checked against the grid.
    fn distance(&self, cell: Point) -> Result<u32> {
        let cell = self.order.check_point(cell)?;
        Ok(hilbert::distance(self.order, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_set_bits_in_order() -> Result<()> {
        let codec = SpatialCodec::new(8)?;
        // 0x6869: bits 0, 3, 5, 6, 11, 13, 14
        let cells = codec.encode(b"hi");
        let expected: Vec<Point> = [(0, 0), (1, 0), (3, 0), (3, 1), (2, 3), (1, 2), (0, 2)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(cells, expected);
        assert_eq!(codec.decode(&cells, 2)?, b"hi");
        Ok(())
    }

    #[test]
    fn empty_and_zero_blocks() -> Result<()> {
        let codec = SpatialCodec::new(4)?;
        assert!(codec.encode(&[]).is_empty());
        assert!(codec.encode(&[0, 0]).is_empty());
        assert_eq!(codec.decode(&[], 2)?, [0, 0]);
        assert_eq!(codec.required_len(&[])?, 0);
        Ok(())
    }

    #[test]
    fn full_block_covers_grid() -> Result<()> {
        let codec = SpatialCodec::new(4)?;
        let cells = codec.encode(&[0xff, 0xff]);
        assert_eq!(cells.len(), 16);
        let mut sorted = cells.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 16);
        Ok(())
    }

    #[test]
    fn oversized_block_keeps_low_bits() -> Result<()> {
        // 2x2 grid holds four bits: only the low nibble of the last byte.
        let codec = SpatialCodec::new(2)?;
        let cells = codec.encode(&[0xff, 0xf5]);
        assert_eq!(cells, [Point::new(0, 0), Point::new(1, 1)]);
        assert_eq!(codec.decode(&cells, 1)?, [0x05]);
        Ok(())
    }

    #[test]
    fn decode_rejects_bad_cells() -> Result<()> {
        let codec = SpatialCodec::new(4)?;
        assert_eq!(
            codec.decode(&[Point::new(4, 0)], 2),
            Err(Error::CoordinateOutOfRange { x: 4, y: 0, side: 4 })
        );
        // (3, 0) is the last cell, distance 15.
        assert_eq!(
            codec.decode(&[Point::new(3, 0)], 1),
            Err(Error::BlockOverflow {
                distance: 15,
                bits: 8
            })
        );
        Ok(())
    }

    #[test]
    fn decode_rejects_oversized_len() -> Result<()> {
        let codec = SpatialCodec::new(4)?;
        assert_eq!(codec.max_block_len(), 16);
        assert_eq!(
            codec.decode(&[Point::new(0, 0)], usize::MAX),
            Err(Error::BlockTooLarge {
                len: usize::MAX,
                max: 16
            })
        );
        assert!(codec.decode(&[Point::new(0, 0)], 17).is_err());
        let block = codec.decode(&[Point::new(0, 0)], 16)?;
        assert_eq!(block.len(), 16);
        assert_eq!(block[15], 1);
        Ok(())
    }

    #[test]
    fn decode_is_idempotent_for_repeats() -> Result<()> {
        let codec = SpatialCodec::new(4)?;
        let cell = Point::new(1, 1);
        assert_eq!(codec.decode(&[cell, cell], 1)?, [0b100]);
        Ok(())
    }

    #[test]
    fn required_len_tracks_highest_bit() -> Result<()> {
        let codec = SpatialCodec::new(8)?;
        let cells = codec.encode(b"hi");
        assert_eq!(codec.required_len(&cells)?, 2);
        assert_eq!(codec.required_len(&[Point::new(0, 0)])?, 1);
        assert!(codec.required_len(&[Point::new(8, 8)]).is_err());
        Ok(())
    }
}
