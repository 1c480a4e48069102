//! Benchmark sweep over run lengths and worker counts
//!
//! A sweep builds two grids and times a count for every combination:
//! - the small grid with a single worker for each length
//! - the large grid for each worker count and each length

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::parallel::{ParallelConfig, run_parallel_count};
use std::fmt;
use std::time::Duration;

/// Which grid a sweep record was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepPhase {
    Small,
    Large,
}

impl fmt::Display for SweepPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepPhase::Small => write!(f, "small"),
            SweepPhase::Large => write!(f, "large"),
        }
    }
}

/// Configuration for a benchmark sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Side length of the square single-worker grid.
    pub small_size: usize,
    /// Rows of the large grid.
    pub rows: usize,
    /// Columns of the large grid.
    pub cols: usize,
    /// Shortest run length measured.
    pub min_len: usize,
    /// Longest run length measured (inclusive).
    pub max_len: usize,
    /// Largest worker count measured; counts run from 1 up to this.
    pub max_workers: usize,
    /// Seed for both grids (None = random grids).
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            small_size: 10,
            rows: 1000,
            cols: 1000,
            min_len: 3,
            max_len: 6,
            max_workers: 8,
            seed: None,
        }
    }
}

impl SweepConfig {
    pub fn with_small_size(mut self, small_size: usize) -> Self {
        self.small_size = small_size;
        self
    }

    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_lengths(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration before any grid is built.
    pub fn validate(&self) -> Result<()> {
        if self.min_len == 0 || self.min_len > self.max_len {
            return Err(Error::InvalidLength);
        }
        if self.max_workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }
        Ok(())
    }
}

/// One timed count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRecord {
    pub phase: SweepPhase,
    pub num_workers: usize,
    pub length: usize,
    pub count: u64,
    pub elapsed: Duration,
}

impl fmt::Display for SweepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} palindromes of length {} found in {:.3} seconds",
            self.count,
            self.length,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Run the sweep, calling `on_record` as each measurement completes.
///
/// Grid construction and counting errors abort the sweep.
pub fn run_sweep<F>(config: &SweepConfig, mut on_record: F) -> Result<Vec<SweepRecord>>
where
    F: FnMut(&SweepRecord),
{
    config.validate()?;
    let mut records = Vec::new();

    let small = Grid::new(config.small_size, config.small_size, config.seed)?;
    let single = ParallelConfig::default().with_workers(1);
    for length in config.min_len..=config.max_len {
        let record = measure(&small, SweepPhase::Small, length, &single)?;
        on_record(&record);
        records.push(record);
    }

    let large = Grid::new(config.rows, config.cols, config.seed)?;
    for num_workers in 1..=config.max_workers {
        let parallel = ParallelConfig::default().with_workers(num_workers);
        for length in config.min_len..=config.max_len {
            let record = measure(&large, SweepPhase::Large, length, &parallel)?;
            on_record(&record);
            records.push(record);
        }
    }

    Ok(records)
}

fn measure(
    grid: &Grid,
    phase: SweepPhase,
    length: usize,
    config: &ParallelConfig,
) -> Result<SweepRecord> {
    let result = run_parallel_count(grid, length, config)?;
    tracing::debug!(
        %phase,
        length,
        workers = config.num_workers,
        count = result.count(),
        "measured"
    );
    Ok(SweepRecord {
        phase,
        num_workers: config.num_workers,
        length,
        count: result.count(),
        elapsed: result.elapsed,
    })
}
