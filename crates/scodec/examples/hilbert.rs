//! Minimal Hilbert curve example: map a cell to its distance and back, then
//! lay a short message out on the grid.

use std::error::Error;

use scodec::{HilbertCurve, SpaceCurve, SpatialCodec};

fn main() -> Result<(), Box<dyn Error>> {
    // 2D Hilbert curve on an 8x8 grid
    let curve = HilbertCurve::new(8)?;
    println!("Hilbert length: {} cells", curve.length());

    let index = 10;
    let point = curve.point(index);
    println!("Point at index {index}: {point}");

    let round_trip = curve.index(point);
    println!("Index for {point}: {round_trip}");
    assert_eq!(round_trip, index);

    let codec = SpatialCodec::new(8)?;
    let cells = codec.encode(b"hi");
    println!("\"hi\" occupies {} cells: {cells:?}", cells.len());
    assert_eq!(codec.decode(&cells, 2)?, b"hi");

    Ok(())
}
