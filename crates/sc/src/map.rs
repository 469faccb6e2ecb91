//! Image rendering helpers used by the CLI.
//!
//! This module includes small drawing primitives, the function that renders a
//! curve onto a square image, and the overlay that marks encoded cells.

use image::{Rgba, RgbaImage};
use scodec::{Point, SpaceCurve};

/// Colors used when rendering a map image.
#[derive(Clone, Copy, Debug)]
pub struct MapPalette {
    /// Color for the curve strokes.
    pub foreground: Rgba<u8>,
    /// Background fill color.
    pub background: Rgba<u8>,
    /// Color for marked cells.
    pub marker: Rgba<u8>,
}

/// Stroke styling for rendering.
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Colors for foreground/background/markers.
    pub palette: MapPalette,
}

/// Pixel geometry of a `side × side` grid drawn on a `size × size` image.
#[derive(Clone, Copy, Debug)]
struct Frame {
    /// Border in pixels kept clear around the grid.
    margin: u32,
    /// Grid side length.
    side: u32,
    /// Drawable width between the margins.
    innerw: f64,
    /// Image side in pixels.
    size: u32,
}

impl Frame {
    /// Geometry for an image of `size` pixels and a stroke of `line_width`.
    fn new(size: u32, side: u32, line_width: u32) -> Self {
        let margin = 10_u32.saturating_add(line_width.max(1) / 2);
        let innerw = f64::from(size.saturating_sub(margin.saturating_mul(2))).max(1.0);
        Self {
            margin,
            side,
            innerw,
            size,
        }
    }

    /// Convert a grid coordinate to image space.
    fn scale(&self, v: u32) -> f64 {
        if self.side <= 1 {
            return f64::from(self.margin);
        }

        let sc = self.innerw / f64::from(self.side - 1);
        f64::from(self.margin) + (f64::from(v) * sc)
    }

    /// Image position of a cell; row 0 is at the bottom of the image.
    fn pixel(&self, p: Point) -> (i64, i64) {
        let x = self.scale(p.x).round() as i64;
        let y = self.scale(p.y).round() as i64;
        (x, i64::from(self.size) - 1 - y)
    }
}

/// Put a pixel if the coordinates are inside the image bounds.
fn put_pixel_safe(img: &mut RgbaImage, x: i64, y: i64, col: Rgba<u8>) {
    let w = i64::from(img.width());
    let h = i64::from(img.height());
    if x >= 0 && y >= 0 && x < w && y < h {
        img.put_pixel(x as u32, y as u32, col);
    }
}

/// Stamp a filled square centered on `(cx, cy)` with a given side length.
fn stamp_square(img: &mut RgbaImage, cx: i64, cy: i64, size: u32, col: Rgba<u8>) {
    let radius = (i64::from(size) - 1) / 2;
    let extra = if size.is_multiple_of(2) { 1 } else { 0 };
    let x_start = cx - radius;
    let x_end = cx + radius + i64::from(extra);
    let y_start = cy - radius;
    let y_end = cy + radius + i64::from(extra);

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            put_pixel_safe(img, x, y, col);
        }
    }
}

/// Draw a 4‑connected Bresenham line into `img` with color `col`.
fn draw_line(
    img: &mut RgbaImage,
    (mut x0, mut y0): (i64, i64),
    (x1, y1): (i64, i64),
    col: Rgba<u8>,
    line_width: u32,
) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_square(img, x0, y0, line_width, col);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Render a square `size×size` image of the full `curve`.
///
/// Cell `(0, 0)` sits in the bottom-left corner. `stroke` controls line width
/// and colors.
pub fn render_curve_image(size: u32, stroke: StrokeOptions, curve: &dyn SpaceCurve) -> RgbaImage {
    let mut img: RgbaImage = image::ImageBuffer::from_pixel(size, size, stroke.palette.background);
    let frame = Frame::new(size, curve.side(), stroke.line_width);
    let width = stroke.line_width.max(1);

    if curve.length() < 2 {
        return img;
    }

    let mut prev = frame.pixel(curve.point(0));
    for idx in 1..curve.length() {
        let next = frame.pixel(curve.point(idx));
        draw_line(&mut img, prev, next, stroke.palette.foreground, width);
        prev = next;
    }
    img
}

/// Paint a square marker over every cell in `cells`.
///
/// Markers are sized to the grid pitch so neighbouring cells stay distinct.
pub fn mark_cells(img: &mut RgbaImage, side: u32, stroke: StrokeOptions, cells: &[Point]) {
    let frame = Frame::new(img.width(), side, stroke.line_width);
    let pitch = if side > 1 {
        frame.innerw / f64::from(side - 1)
    } else {
        frame.innerw
    };
    let marker = ((pitch / 2.0).round() as u32).max(stroke.line_width.max(1) + 2);
    for &cell in cells {
        let (x, y) = frame.pixel(cell);
        stamp_square(img, x, y, marker, stroke.palette.marker);
    }
}
