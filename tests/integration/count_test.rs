use palindrome_grid::parallel::{ParallelConfig, partition, run_parallel_count};
use palindrome_grid::{Error, Grid, count_palindromes, is_palindrome, scan_cell};
use proptest::prelude::*;

fn all_a(rows: usize, cols: usize) -> Grid {
    let row = "a".repeat(cols);
    let rows: Vec<&str> = (0..rows).map(|_| row.as_str()).collect();
    Grid::from_rows(&rows).unwrap()
}

/// Count by visiting every cell on the calling thread.
fn sequential_count(grid: &Grid, length: usize) -> u64 {
    let mut total = 0;
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            total += scan_cell(grid, r, c, length) as u64;
        }
    }
    total
}

#[test]
fn test_large_grid_one_vs_eight_workers() {
    let grid = Grid::new(1000, 1000, Some(42)).unwrap();

    let single = count_palindromes(&grid, 3, 1).unwrap();
    let eight = count_palindromes(&grid, 3, 8).unwrap();
    assert_eq!(single, eight);

    // Roughly 3 runs per cell, each a palindrome with probability 1/26
    assert!(single > 100_000 && single < 130_000, "got {single}");

    // Same seed, fresh grid, same answer
    let again = Grid::new(1000, 1000, Some(42)).unwrap();
    assert_eq!(count_palindromes(&again, 3, 8).unwrap(), single);
}

#[test]
fn test_all_a_scenario() {
    let grid = all_a(3, 3);
    for workers in 1..=8 {
        assert_eq!(count_palindromes(&grid, 3, workers).unwrap(), 7);
    }
}

#[test]
fn test_seeded_grids_identical_cell_for_cell() {
    let a = Grid::new(120, 80, Some(42)).unwrap();
    let b = Grid::new(120, 80, Some(42)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_parallel_matches_sequential() {
    let grid = Grid::new(37, 53, Some(7)).unwrap();
    for length in 1..=6 {
        let expected = sequential_count(&grid, length);
        for workers in [1, 2, 3, 5, 8, 40] {
            assert_eq!(count_palindromes(&grid, length, workers).unwrap(), expected);
        }
    }
}

#[test]
fn test_edges_do_not_crash() {
    // lengths equal to and beyond each dimension
    let grid = Grid::new(5, 9, Some(11)).unwrap();
    for length in [5, 6, 9, 10, 50] {
        for workers in [1, 4, 9] {
            count_palindromes(&grid, length, workers).unwrap();
        }
    }

    let grid = Grid::new(1, 1, None).unwrap();
    assert_eq!(count_palindromes(&grid, 1, 1).unwrap(), 3);
    assert_eq!(count_palindromes(&grid, 2, 1).unwrap(), 0);
    assert_eq!(count_palindromes(&grid, 3, 8).unwrap(), 0);
}

#[test]
fn test_oversized_lengths_return_zero() {
    let grid = Grid::new(3, 3, Some(42)).unwrap();
    assert_eq!(count_palindromes(&grid, usize::MAX, 1), Ok(0));
    assert_eq!(count_palindromes(&grid, 1 << 46, 1), Ok(0));
    assert_eq!(count_palindromes(&grid, 1 << 46, 8), Ok(0));
}

#[test]
fn test_errors_surface_to_caller() {
    assert!(matches!(
        Grid::new(0, 10, Some(1)),
        Err(Error::InvalidDimension { rows: 0, cols: 10 })
    ));

    let grid = all_a(4, 4);
    assert_eq!(count_palindromes(&grid, 3, 0), Err(Error::InvalidWorkerCount));
    assert_eq!(count_palindromes(&grid, 0, 1), Err(Error::InvalidLength));
}

#[test]
fn test_worker_reports_cover_grid() {
    let grid = Grid::new(10, 4, Some(3)).unwrap();
    let config = ParallelConfig::default().with_workers(3);
    let result = run_parallel_count(&grid, 3, &config).unwrap();

    let ranges: Vec<_> = result.worker_reports.iter().map(|r| r.range).collect();
    assert_eq!(ranges, partition(10, 3).unwrap());
    assert_eq!(result.cells_scanned(), 40);

    let summed: u64 = result.worker_reports.iter().map(|r| r.counts.total()).sum();
    assert_eq!(summed, result.count());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn proptest_worker_count_invariance(
        seed in any::<u64>(),
        rows in 1usize..40,
        cols in 1usize..40,
        length in 1usize..7,
        workers in 2usize..12,
    ) {
        let grid = Grid::new(rows, cols, Some(seed)).unwrap();
        let single = count_palindromes(&grid, length, 1).unwrap();
        prop_assert_eq!(count_palindromes(&grid, length, workers).unwrap(), single);
    }

    #[test]
    fn proptest_is_palindrome_reversal(buf in proptest::collection::vec(b'a'..=b'b', 1..10)) {
        let mut reversed = buf.clone();
        reversed.reverse();
        prop_assert_eq!(is_palindrome(&buf), is_palindrome(&reversed));
    }
}
