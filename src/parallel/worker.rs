//! Scan worker: counts palindromes over one row range.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::parallel::channel::{WorkerChannels, WorkerMessage};
use crate::parallel::partition::RowRange;
use crate::result::WorkerReport;
use crate::scan::{AxisCounts, CellScanner};
use std::time::Instant;

/// Work assigned to exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRequest {
    pub worker_id: usize,
    /// Run length to test.
    pub length: usize,
    /// Anchor rows to visit; every column of each row is scanned.
    pub range: RowRange,
}

/// Scan every cell in `request.range x [0, cols)` and tally the palindromic
/// runs anchored there.
///
/// The tally is private to this call. Runs may extend below the range into
/// rows owned by other workers; the grid is read-only so that is safe.
///
/// # Errors
/// `Error::RowRangeOutOfBounds` if the range reaches past the last row.
pub fn run_worker(grid: &Grid, request: &ScanRequest) -> Result<WorkerReport> {
    let ScanRequest {
        worker_id,
        length,
        range,
    } = *request;

    if range.start > range.end || range.end > grid.rows() {
        return Err(Error::RowRangeOutOfBounds {
            start: range.start,
            end: range.end,
            rows: grid.rows(),
        });
    }

    let start = Instant::now();
    let mut scanner = CellScanner::new(grid, length);
    let mut counts = AxisCounts::default();

    for r in range.rows() {
        for c in 0..grid.cols() {
            counts.record(scanner.scan(r, c));
        }
    }

    Ok(WorkerReport {
        worker_id,
        range,
        counts,
        cells_scanned: (range.len() * grid.cols()) as u64,
        elapsed: start.elapsed(),
    })
}

/// Run `scan` for one request and report the outcome to the coordinator.
pub fn run_worker_task<F>(grid: &Grid, request: ScanRequest, scan: &F, channels: WorkerChannels)
where
    F: Fn(&Grid, &ScanRequest) -> Result<WorkerReport>,
{
    let worker_id = request.worker_id;
    tracing::trace!(worker_id, range = %request.range, "worker started");

    let message = match scan(grid, &request) {
        Ok(report) => {
            tracing::trace!(
                worker_id,
                count = report.counts.total(),
                elapsed = ?report.elapsed,
                "worker finished"
            );
            WorkerMessage::Finished(report)
        }
        Err(err) => WorkerMessage::Error {
            worker_id,
            message: err.to_string(),
        },
    };

    // A lost report is caught by the coordinator's missing-report check
    if channels.to_coordinator.send(message).is_err() {
        tracing::warn!(worker_id, "coordinator gone; report dropped");
    }
}
