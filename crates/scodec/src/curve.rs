//! The `SpaceCurve` trait and the Hilbert curve behind it.

use std::fmt;

use crate::{error, hilbert, order::Order, point::Point};

/// A bijective walk over the cells of a square grid.
pub trait SpaceCurve: fmt::Debug {
    /// Display name of the curve.
    fn name(&self) -> &'static str;
    /// Short description of the curve.
    fn info(&self) -> &'static str;
    /// Side length of the grid.
    fn side(&self) -> u32;
    /// Number of cells visited by the curve.
    fn length(&self) -> u32;
    /// Position of `p` along the curve.
    fn index(&self, p: Point) -> u32;
    /// Cell at position `index` along the curve.
    fn point(&self, index: u32) -> Point;
}

/// The 2D Hilbert curve on a grid of a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HilbertCurve {
    /// Grid side length.
    order: Order,
}

impl HilbertCurve {
    /// Construct a Hilbert curve covering a `side × side` grid. The side must
    /// be a power of two (`side == 2^k`, `k >= 1`) or the result is an error.
    pub fn new(side: u32) -> error::Result<Self> {
        Ok(Self::with_order(Order::new(side)?))
    }

    /// Construct a Hilbert curve for an already validated order.
    pub const fn with_order(order: Order) -> Self {
        Self { order }
    }

    /// The curve's order.
    pub const fn order(&self) -> Order {
        self.order
    }

    /// Every cell of the grid in curve order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.order.length()).map(|d| hilbert::point(self.order, d))
    }
}

impl SpaceCurve for HilbertCurve {
    fn name(&self) -> &'static str {
        "Hilbert"
    }

    fn info(&self) -> &'static str {
        "Classic continuous space-filling curve with excellent locality.\n\
        Defined recursively via rotations/reflections; consecutive cells\n\
        are always grid neighbours."
    }

    fn side(&self) -> u32 {
        self.order.side()
    }

    fn length(&self) -> u32 {
        self.order.length()
    }

    fn index(&self, p: Point) -> u32 {
        hilbert::distance(self.order, p)
    }

    fn point(&self, index: u32) -> Point {
        hilbert::point(self.order, index)
    }
}
