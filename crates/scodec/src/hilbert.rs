//! Iterative Hilbert curve conversions on an `n × n` grid.
//!
//! Both directions walk the quadrant tree one level per iteration and apply
//! [`rotate`] at each level, so no orientation tables are needed. The checked
//! entry points [`xy2d`] and [`d2xy`] validate their inputs; [`distance`] and
//! [`point`] take an already validated [`Order`].

use crate::{error::Result, ops, order::Order, point::Point};

/// One iteration of the coordinate-to-distance walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Quadrant scale `s` at this level.
    pub scale: u32,
    /// Whether the point lies in the right half at this scale.
    pub rx: u32,
    /// Whether the point lies in the upper half at this scale.
    pub ry: u32,
    /// Distance accumulated after this level.
    pub distance: u32,
}

/// Rotate or reflect `p` when descending into quadrant `(rx, ry)` of a grid
/// of side `s`.
///
/// For `ry == 0` the point is reflected through the centre (only when
/// `rx == 1`) and then transposed. For `ry == 1` it is returned unchanged.
/// Both coordinates must be below `s` when a reflection happens.
#[inline]
pub fn rotate(s: u32, p: Point, rx: u32, ry: u32) -> Point {
    if ry != 0 {
        return p;
    }
    let p = if rx == 1 {
        debug_assert!(p.x < s && p.y < s, "reflection outside scale {s}: {p}");
        Point::new(s - 1 - p.x, s - 1 - p.y)
    } else {
        p
    };
    p.transpose()
}

/// Walk from the top level down, reporting each level to `visit`.
///
/// The rotation is applied at the full side `n` rather than at the current
/// scale. Reflecting across `n` complements every bit of a coordinate below
/// `n`, which leaves the low bits the later levels read identical to a
/// reflection across `s`, and it never underflows.
fn walk(order: Order, point: Point, mut visit: impl FnMut(Step)) -> u32 {
    let n = order.side();
    let mut p = point;
    let mut d = 0;
    let mut s = n / 2;
    while s > 0 {
        let rx = ops::bit(p.x, s);
        let ry = ops::bit(p.y, s);
        d += s * s * ops::quadrant_rank(rx, ry);
        visit(Step {
            scale: s,
            rx,
            ry,
            distance: d,
        });
        p = rotate(n, p, rx, ry);
        s /= 2;
    }
    d
}

/// Distance of `point` along the curve of the given order.
///
/// `point` must lie on the grid; this is only checked in debug builds.
pub fn distance(order: Order, point: Point) -> u32 {
    debug_assert!(order.contains(point), "point {point} outside {order}");
    walk(order, point, |_| {})
}

/// Cell at `distance` along the curve of the given order.
///
/// `distance` must be below `order.length()`; this is only checked in debug
/// builds.
pub fn point(order: Order, distance: u32) -> Point {
    debug_assert!(distance < order.length(), "distance {distance} outside {order}");
    let n = order.side();
    let mut p = Point::default();
    let mut t = distance;
    let mut s = 1;
    while s < n {
        let (rx, ry) = ops::quadrant(t);
        p = rotate(s, p, rx, ry);
        p.x += s * rx;
        p.y += s * ry;
        t /= 4;
        s *= 2;
    }
    p
}

/// Convert `(x, y)` on an `n × n` grid to its distance along the curve.
///
/// Fails if `n` is not a supported power of two or the coordinate is off the
/// grid.
pub fn xy2d(n: u32, x: u32, y: u32) -> Result<u32> {
    let order = Order::new(n)?;
    let p = order.check_point(Point::new(x, y))?;
    Ok(distance(order, p))
}

/// Convert a distance along the curve on an `n × n` grid to its cell.
///
/// Fails if `n` is not a supported power of two or `d >= n²`.
pub fn d2xy(n: u32, d: u32) -> Result<Point> {
    let order = Order::new(n)?;
    let d = order.check_distance(d)?;
    Ok(point(order, d))
}

/// Per-level trace of [`xy2d`] for `point`: one [`Step`] per level, top
/// level first. The last step carries the final distance.
pub fn xy2d_trace(order: Order, point: Point) -> Result<Vec<Step>> {
    let point = order.check_point(point)?;
    let mut steps = Vec::with_capacity(order.bits() as usize);
    walk(order, point, |step| steps.push(step));
    Ok(steps)
}
