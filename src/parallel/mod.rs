//! Parallel counting across worker threads.
//!
//! # Architecture
//!
//! - The **partitioner** splits the grid's rows into one contiguous range per
//!   worker
//! - Each **worker** scans its range with a private tally and reports once
//! - The **channel** carries reports and failures to the coordinator
//! - The **coordinator** joins every worker, then reduces the reports
//!
//! Workers borrow the grid through a thread scope, so no locking or
//! reference counting is involved.
//!
//! # Example
//!
//! ```
//! use palindrome_grid::grid::Grid;
//! use palindrome_grid::parallel::{ParallelConfig, run_parallel_count};
//!
//! let grid = Grid::new(100, 100, Some(42)).unwrap();
//! let config = ParallelConfig::default().with_workers(4);
//! let result = run_parallel_count(&grid, 3, &config).unwrap();
//! println!("{}", result.format_summary());
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod partition;
pub mod worker;

pub use config::ParallelConfig;
pub use coordinator::{count_palindromes, run_parallel_count};
pub use partition::{RowRange, partition};
pub use worker::{ScanRequest, run_worker};
