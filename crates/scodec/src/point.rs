//! Grid coordinate type used by the conversions and the codec.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// A cell on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Point {
    /// Create a new `Point`.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The same cell with `x` and `y` exchanged.
    pub const fn transpose(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// Manhattan (taxicab) distance to another point.
    ///
    /// Consecutive cells along a Hilbert curve are always at distance 1.
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (u32, u32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses the `x,y` form produced by `Display`. Whitespace around either
/// component is ignored.
impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| Error::Parse(format!("cell '{s}' must be in X,Y form")))?;
        let parse = |label: &str, v: &str| -> Result<u32> {
            v.trim().parse::<u32>().map_err(|_| {
                Error::Parse(format!(
                    "invalid {label} coordinate '{v}': expected a non-negative integer"
                ))
            })
        };
        Ok(Self::new(parse("x", x)?, parse("y", y)?))
    }
}
