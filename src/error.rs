//! Error types for grid construction and parallel counting.
//!
//! Every failure is returned to the direct caller. Out-of-range cell access
//! is not represented here: it is a programming error and panics.

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the palindrome scanner.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    /// A literal grid contained a byte outside `a..=z`.
    #[error("invalid cell {value:?} at ({row}, {col}): expected a lowercase ASCII letter")]
    InvalidCell { row: usize, col: usize, value: char },

    /// Counting was requested with zero workers.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// Counting was requested for runs of length zero.
    #[error("run length must be at least 1")]
    InvalidLength,

    /// A scan request addressed rows the grid does not have.
    #[error("row range {start}..{end} is outside a grid of {rows} rows")]
    RowRangeOutOfBounds {
        start: usize,
        end: usize,
        rows: usize,
    },

    /// A scanning task failed; the whole count is abandoned.
    #[error("worker {worker_id} failed: {message}")]
    WorkerFailure { worker_id: usize, message: String },
}
