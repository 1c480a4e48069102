//! Parallel palindrome counting over random character grids.
//!
//! A [`Grid`] of lowercase letters is scanned for fixed-length palindromic
//! runs read leftward along rows, downward along columns and down-right
//! along diagonals. The rows are split between worker threads that each keep
//! a private tally; the tallies are summed once every worker has finished.
//!
//! ```
//! use palindrome_grid::{Grid, count_palindromes};
//!
//! let grid = Grid::from_rows(&["aaa", "aaa", "aaa"]).unwrap();
//! assert_eq!(count_palindromes(&grid, 3, 2).unwrap(), 7);
//! ```

pub mod error;
pub mod grid;
pub mod parallel;
pub mod result;
pub mod scan;
pub mod sweep;

pub use error::{Error, Result};
pub use grid::Grid;
pub use parallel::{ParallelConfig, count_palindromes, partition, run_parallel_count};
pub use result::{ParallelResult, WorkerReport};
pub use scan::{Axis, AxisCounts, is_palindrome, scan_cell};
pub use sweep::{SweepConfig, SweepRecord, run_sweep};
