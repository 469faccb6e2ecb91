//! Command handlers for the `sc` CLI.
//!
//! Each function implements one subcommand and returns its result; printing
//! is left to `main`.

use anyhow::{Context, Result, bail};
use image::RgbaImage;
use scodec::{
    HilbertCurve, Order, Point, SpatialCodec,
    hilbert::{self, Step},
    ops,
};

use crate::map::{StrokeOptions, mark_cells, render_curve_image};

/// Largest grid `grid` will print.
const MAX_GRID_SIDE: u32 = 256;

/// Distance of a cell plus the per-level trace that produced it.
pub struct Xy2dReport {
    /// Distance along the curve.
    pub distance: u32,
    /// One entry per level, top level first.
    pub steps: Vec<Step>,
}

/// Result of encoding a block.
pub struct EncodeReport {
    /// Cells holding the set bits, in bit order.
    pub cells: Vec<Point>,
    /// Capacity of the grid in bits.
    pub capacity: u32,
    /// Number of input bits that did not fit on the grid.
    pub dropped_bits: u64,
}

/// Map `(x, y)` to its curve distance on a `side × side` grid.
pub fn xy2d(side: u32, x: u32, y: u32) -> Result<Xy2dReport> {
    let order = Order::new(side)?;
    let steps = hilbert::xy2d_trace(order, Point::new(x, y))?;
    let distance = steps.last().map_or(0, |s| s.distance);
    Ok(Xy2dReport { distance, steps })
}

/// Map a curve distance to its cell on a `side × side` grid.
pub fn d2xy(side: u32, distance: u32) -> Result<Point> {
    Ok(hilbert::d2xy(side, distance)?)
}

/// Encode `data` onto a `side × side` grid.
pub fn encode(side: u32, data: &[u8]) -> Result<EncodeReport> {
    let codec = SpatialCodec::new(side)?;
    let capacity = codec.capacity_bits();
    let total = data.len() as u64 * 8;
    Ok(EncodeReport {
        cells: codec.encode(data),
        capacity,
        dropped_bits: total.saturating_sub(u64::from(capacity)),
    })
}

/// Decode `cells` from a `side × side` grid into a block of `len` bytes.
///
/// Without `len` the block is just long enough for the highest cell.
pub fn decode(side: u32, cells: &[Point], len: Option<usize>) -> Result<Vec<u8>> {
    let codec = SpatialCodec::new(side)?;
    let len = match len {
        Some(len) => len,
        None => codec.required_len(cells)?,
    };
    codec
        .decode(cells, len)
        .with_context(|| format!("decoding {} cells into {len} bytes", cells.len()))
}

/// Parse whitespace separated `x,y` cells.
pub fn parse_cells(text: &str) -> Result<Vec<Point>> {
    text.split_whitespace()
        .map(|tok| tok.parse::<Point>().map_err(anyhow::Error::from))
        .collect()
}

/// Render bytes as UTF-8 text when possible, otherwise (or when `hex` is set)
/// as lowercase hex.
pub fn render_bytes(bytes: &[u8], hex: bool) -> String {
    if !hex && let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Table of distances for every cell, top row (`y = side - 1`) first.
pub fn grid(side: u32) -> Result<String> {
    let curve = HilbertCurve::new(side)?;
    if side > MAX_GRID_SIDE {
        bail!("grid side {side} is too large to print (max {MAX_GRID_SIDE})");
    }
    let order = curve.order();
    let width = (order.length() - 1).to_string().len();
    let mut out = String::new();
    for y in (0..side).rev() {
        let row: Vec<String> = (0..side)
            .map(|x| format!("{:>width$}", hilbert::distance(order, Point::new(x, y))))
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    Ok(out)
}

/// Base iterator rows `(i, rx, ry)` for `0..count`.
pub fn iterator(count: u32) -> Vec<(u32, u32, u32)> {
    (0..count)
        .map(|i| {
            let (rx, ry) = ops::quadrant(i);
            (i, rx, ry)
        })
        .collect()
}

/// Parameters for the `map` subcommand.
pub struct MapOptions<'a> {
    /// Output image size in pixels.
    pub size: u32,
    /// Grid side length.
    pub side: u32,
    /// Stroke styling.
    pub stroke: StrokeOptions,
    /// Optional data whose encoded cells are marked on the map.
    pub data: Option<&'a [u8]>,
}

/// Render the curve, and optionally the cells of an encoded block, to an image.
pub fn map(options: MapOptions<'_>) -> Result<RgbaImage> {
    let MapOptions {
        size,
        side,
        stroke,
        data,
    } = options;

    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }
    if size < 32 {
        bail!("image size must be at least 32 pixels");
    }

    let curve = HilbertCurve::new(side)?;
    let mut img = render_curve_image(size, stroke, &curve);
    if let Some(data) = data {
        let cells = SpatialCodec::with_order(curve.order()).encode(data);
        mark_cells(&mut img, side, stroke, &cells);
    }
    Ok(img)
}
