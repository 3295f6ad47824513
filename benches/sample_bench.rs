//! Benchmarks for height-field sampling.
//!
//! Run with: `cargo bench --bench sample_bench`
//!
//! Measures the cost of sampling Gaussian node functions over the
//! seminar lattice at different resolutions and basis counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fem_viz::{Aggregator, Bounds2D, GaussianBasis, Node, SamplingGrid, sample_height_field};

/// Node functions spread over the domain interior.
fn generate_basis(n: usize) -> Vec<GaussianBasis> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n.max(1) as f64;
            let center = Node::new(20.0 + 60.0 * t, 80.0 - 60.0 * t);
            GaussianBasis::bump(center, 10.0 + 15.0 * t).expect("valid std")
        })
        .collect()
}

fn bench_resolution(c: &mut Criterion) {
    let basis = generate_basis(4);
    let mut group = c.benchmark_group("sample_resolution");
    for step in [2.0, 1.0, 0.5] {
        let grid = SamplingGrid::new(Bounds2D::seminar(), step).expect("valid step");
        group.bench_with_input(BenchmarkId::from_parameter(step), &grid, |b, grid| {
            b.iter(|| sample_height_field(black_box(grid), black_box(&basis), Aggregator::Sum));
        });
    }
    group.finish();
}

fn bench_basis_count(c: &mut Criterion) {
    let grid = SamplingGrid::new(Bounds2D::seminar(), 1.0).expect("valid step");
    let mut group = c.benchmark_group("sample_basis_count");
    for n in [1, 4, 16] {
        let basis = generate_basis(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &basis, |b, basis| {
            b.iter(|| sample_height_field(black_box(&grid), black_box(basis), Aggregator::Sum));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolution, bench_basis_count);
criterion_main!(benches);
