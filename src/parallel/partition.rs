//! Row-range partitioning across workers

use crate::error::{Error, Result};
use std::fmt;
use std::ops::Range;

/// Half-open interval of row indices `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Split `[0, total_rows)` into `num_workers` contiguous ranges.
///
/// Every range but the last holds `max(1, total_rows / num_workers)` rows;
/// the last one runs to `total_rows` and absorbs the remainder. When there
/// are more workers than rows the trailing ranges are empty (`[total_rows,
/// total_rows)`). The result always has exactly `num_workers` entries,
/// in order, tiling `[0, total_rows)` with no gaps or overlaps.
///
/// # Errors
/// `Error::InvalidWorkerCount` if `num_workers` is zero.
pub fn partition(total_rows: usize, num_workers: usize) -> Result<Vec<RowRange>> {
    if num_workers == 0 {
        return Err(Error::InvalidWorkerCount);
    }

    let chunk = (total_rows / num_workers).max(1);
    let ranges = (0..num_workers)
        .map(|i| {
            let start = i.saturating_mul(chunk).min(total_rows);
            let end = if i == num_workers - 1 {
                total_rows
            } else {
                (start + chunk).min(total_rows)
            };
            RowRange::new(start, end)
        })
        .collect();

    Ok(ranges)
}
