use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use palindrome_grid::grid::Grid;
use palindrome_grid::parallel::{ParallelConfig, run_parallel_count};
use palindrome_grid::scan::{CellScanner, is_palindrome};

const SEED: u64 = 42;

/// Counting a 1000x1000 grid across worker counts, one group per length.
fn bench_parallel_count(c: &mut Criterion) {
    let grid = Grid::new(1000, 1000, Some(SEED)).unwrap();
    let max_workers = num_cpus::get().clamp(1, 8);

    for length in 3..=6 {
        let mut group = c.benchmark_group(format!("count/len{length}"));
        group.sample_size(10);
        group.throughput(Throughput::Elements((grid.rows() * grid.cols()) as u64));

        for workers in 1..=max_workers {
            let config = ParallelConfig::default().with_workers(workers);
            group.bench_with_input(
                BenchmarkId::new("workers", workers),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result = run_parallel_count(&grid, length, config).unwrap();
                        black_box(result.count())
                    })
                },
            );
        }
        group.finish();
    }
}

/// Single-threaded per-cell scan cost.
fn bench_cell_scan(c: &mut Criterion) {
    let grid = Grid::new(100, 100, Some(SEED)).unwrap();
    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("cells/10000", |b| {
        let mut scanner = CellScanner::new(&grid, 3);
        b.iter(|| {
            let mut hits = 0;
            for r in 0..100 {
                for col in 0..100 {
                    hits += scanner.scan(r, col).count();
                }
            }
            black_box(hits)
        })
    });

    group.bench_function("is_palindrome/6", |b| {
        let buf = *b"abccba";
        b.iter(|| black_box(is_palindrome(black_box(&buf[..]))))
    });

    group.finish();
}

criterion_group!(benches, bench_parallel_count, bench_cell_scan);
criterion_main!(benches);
