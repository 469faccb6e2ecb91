//! Benchmarks for the coordinate <-> distance conversions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use scodec::{HilbertCurve, SpaceCurve, hilbert};

/// Grid sides to benchmark, from the smallest order up to a 4096x4096 grid.
const SIDES: [u32; 6] = [2, 16, 64, 256, 1024, 4096];

/// Benchmark `d2xy` (distance -> coordinates).
fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point");

    for side in SIDES {
        let curve = HilbertCurve::new(side).expect("valid curve");
        let midpoint = curve.length() / 2;

        group.bench_function(BenchmarkId::new("d2xy", side), |b| {
            b.iter(|| curve.point(black_box(midpoint)))
        });
    }

    group.finish();
}

/// Benchmark `xy2d` (coordinates -> distance).
fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");

    for side in SIDES {
        let curve = HilbertCurve::new(side).expect("valid curve");
        let pt = curve.point(curve.length() / 2);

        group.bench_function(BenchmarkId::new("xy2d", side), |b| {
            b.iter(|| curve.index(black_box(pt)))
        });
    }

    group.finish();
}

/// Compare the checked free functions against the trait object path.
fn bench_checked_vs_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_vs_curve");
    let side = 256;
    let curve: Box<dyn SpaceCurve> = Box::new(HilbertCurve::new(side).expect("valid curve"));
    let pt = curve.point(curve.length() / 3);

    group.bench_function("checked", |b| {
        b.iter(|| hilbert::xy2d(black_box(side), black_box(pt.x), black_box(pt.y)))
    });
    group.bench_function("dyn", |b| b.iter(|| curve.index(black_box(pt))));

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_point, bench_index, bench_checked_vs_curve);
}

pub use bench_defs::benches;
criterion_main!(benches);
