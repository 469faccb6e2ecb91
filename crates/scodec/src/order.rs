//! The grid side length `n` shared by every conversion.

use std::fmt;

use crate::{
    error::{Error, Result},
    point::Point,
};

/// Validated side length of a square Hilbert grid.
///
/// The side is always a power of two and at least 2. It is capped at
/// [`Order::MAX_SIDE`] so that the curve length `side²` fits in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Order(u32);

impl Order {
    /// Smallest grid the curve is defined on.
    pub const MIN_SIDE: u32 = 2;
    /// Largest grid whose distances fit in a `u32`.
    pub const MAX_SIDE: u32 = 1 << 15;

    /// Validate a side length.
    pub fn new(side: u32) -> Result<Self> {
        if side < Self::MIN_SIDE || !side.is_power_of_two() {
            return Err(Error::InvalidOrder(side));
        }
        if side > Self::MAX_SIDE {
            return Err(Error::OrderTooLarge {
                side,
                max: Self::MAX_SIDE,
            });
        }
        Ok(Self(side))
    }

    /// Build an order from its exponent `k`, giving a side of `2^k`.
    pub fn from_bits(bits: u32) -> Result<Self> {
        let side = 1u32.checked_shl(bits).ok_or(Error::OrderTooLarge {
            side: u32::MAX,
            max: Self::MAX_SIDE,
        })?;
        Self::new(side)
    }

    /// Side length `n`.
    pub const fn side(self) -> u32 {
        self.0
    }

    /// Exponent `k` with `n = 2^k`; also the number of conversion iterations.
    pub const fn bits(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Number of cells on the grid, `n²`.
    pub const fn length(self) -> u32 {
        self.0 * self.0
    }

    /// Whether both coordinates of `point` lie on the grid.
    pub const fn contains(self, point: Point) -> bool {
        point.x < self.0 && point.y < self.0
    }

    /// Check that `point` lies on the grid.
    pub fn check_point(self, point: Point) -> Result<Point> {
        if self.contains(point) {
            Ok(point)
        } else {
            Err(Error::CoordinateOutOfRange {
                x: point.x,
                y: point.y,
                side: self.0,
            })
        }
    }

    /// Check that `distance` lies on the curve.
    pub fn check_distance(self, distance: u32) -> Result<u32> {
        if distance < self.length() {
            Ok(distance)
        } else {
            Err(Error::DistanceOutOfRange {
                distance,
                length: self.length(),
            })
        }
    }
}

impl TryFrom<u32> for Order {
    type Error = Error;

    fn try_from(side: u32) -> Result<Self> {
        Self::new(side)
    }
}

impl From<Order> for u32 {
    fn from(order: Order) -> Self {
        order.0
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
