//! Hilbert curve coordinate mapping and a spatial bit codec built on it.
//!
//! The core is a pair of conversions between a cell `(x, y)` on an `n × n`
//! grid (`n` a power of two) and its distance along the Hilbert curve:
//! [`hilbert::xy2d`] and [`hilbert::d2xy`]. [`SpatialCodec`] uses them to
//! lay a block of bits out on the grid, one cell per set bit.
//!
//! ```
//! let d = scodec::hilbert::xy2d(4, 3, 3)?;
//! assert_eq!(d, 10);
//! assert_eq!(scodec::hilbert::d2xy(4, d)?, scodec::Point::new(3, 3));
//! # Ok::<(), scodec::error::Error>(())
//! ```

/// Spatial bit codec: bitstreams to grid cells and back.
pub mod codec;
/// The `SpaceCurve` trait and the Hilbert curve object.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// The iterative Hilbert conversions.
pub mod hilbert;
/// Internal bit operations shared by the conversions.
#[doc(hidden)]
pub mod ops;
/// Validated grid side length.
pub mod order;
/// Grid coordinates.
pub mod point;

pub use crate::{
    codec::SpatialCodec,
    curve::{HilbertCurve, SpaceCurve},
    order::Order,
    point::Point,
};
