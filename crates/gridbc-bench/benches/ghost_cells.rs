//! Criterion benchmarks for whole-grid ghost-cell filling.

use criterion::{criterion_group, criterion_main, Criterion};
use gridbc_bench::{random_field, reference_profile, stress_profile};
use std::hint::black_box;

/// Benchmark: Pad and fill the reference 256x256 grid.
fn bench_ghost_cells_reference(c: &mut Criterion) {
    let bcs = reference_profile().unwrap();
    let data = random_field(&[256, 256], 42);

    c.bench_function("ghost_cells_256x256", |b| {
        b.iter(|| black_box(bcs.with_ghost_cells(&data).unwrap()));
    });
}

/// Benchmark: Refill the ghost layer of a padded 64^3 grid in place.
fn bench_ghost_cells_stress(c: &mut Criterion) {
    let bcs = stress_profile().unwrap();
    let mut full = random_field(&bcs.grid().ghost_shape(), 43);

    c.bench_function("ghost_cells_64x64x64_in_place", |b| {
        b.iter(|| {
            bcs.set_ghost_cells(&mut full).unwrap();
            black_box(&full);
        });
    });
}

criterion_group!(benches, bench_ghost_cells_reference, bench_ghost_cells_stress);
criterion_main!(benches);
