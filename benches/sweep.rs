use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use heated_plate::boundary::*;
use heated_plate::convergence::max_abs_diff;
use heated_plate::grid::PlateGrid;
use heated_plate::par_stencil::jacobi_sweep;

const ROWS: usize = 500;
const COLS: usize = 500;
const CHUNK_SIZE: usize = 1000;

fn seeded_grid() -> PlateGrid {
    let mut grid = PlateGrid::new(ROWS, COLS);
    let bc = PlateBoundary::new(BoundaryValues::default(), *grid.aabb());
    initialize(&mut grid.current, &bc, CHUNK_SIZE).unwrap();
    grid.snapshot(CHUNK_SIZE);
    grid
}

fn pool(threads: usize) -> rayon::ThreadPool {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .unwrap()
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("jacobi_sweep_500");
    group.throughput(Throughput::Elements((ROWS * COLS) as u64));
    for threads in [1, 2, 4, 8] {
        let pool = pool(threads);
        let mut grid = seeded_grid();
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, _| {
            b.iter(|| {
                pool.install(|| {
                    jacobi_sweep(&grid.previous, &mut grid.current, CHUNK_SIZE)
                });
                black_box(&grid.current);
            })
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_sweep_diff_500");
    group.throughput(Throughput::Elements((ROWS * COLS) as u64));
    for threads in [1, 2, 4, 8] {
        let pool = pool(threads);
        let mut grid = seeded_grid();
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, _| {
            b.iter(|| {
                let diff = pool.install(|| {
                    grid.snapshot(CHUNK_SIZE);
                    jacobi_sweep(&grid.previous, &mut grid.current, CHUNK_SIZE);
                    max_abs_diff(&grid.current, &grid.previous, CHUNK_SIZE)
                });
                black_box(diff)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_iteration);
criterion_main!(benches);
