//! Parallel count coordinator that manages scan worker threads.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::parallel::channel::{WorkerMessage, create_channels};
use crate::parallel::config::ParallelConfig;
use crate::parallel::partition::partition;
use crate::parallel::worker::{ScanRequest, run_worker, run_worker_task};
use crate::result::{ParallelResult, WorkerReport};
use crate::scan::AxisCounts;
use std::any::Any;
use std::thread;
use std::time::Instant;

/// Count palindromic runs of `length` in `grid` using `num_workers` threads.
///
/// The total does not depend on `num_workers`.
///
/// # Errors
/// - `Error::InvalidWorkerCount` if `num_workers` is zero
/// - `Error::InvalidLength` if `length` is zero
/// - `Error::WorkerFailure` if any worker fails; no partial total is returned
pub fn count_palindromes(grid: &Grid, length: usize, num_workers: usize) -> Result<u64> {
    let config = ParallelConfig::default().with_workers(num_workers);
    run_parallel_count(grid, length, &config).map(|result| result.count())
}

/// Run a parallel count with the given configuration.
///
/// Rows are partitioned into `config.num_workers` ranges and each range is
/// scanned on its own scoped thread with a private tally. All threads are
/// joined before anything is summed.
pub fn run_parallel_count(
    grid: &Grid,
    length: usize,
    config: &ParallelConfig,
) -> Result<ParallelResult> {
    run_with_scanner(grid, length, config, &run_worker)
}

/// Coordinator body with the per-range scan injected.
pub(crate) fn run_with_scanner<F>(
    grid: &Grid,
    length: usize,
    config: &ParallelConfig,
    scan: &F,
) -> Result<ParallelResult>
where
    F: Fn(&Grid, &ScanRequest) -> Result<WorkerReport> + Sync,
{
    config.validate()?;
    if length == 0 {
        return Err(Error::InvalidLength);
    }

    let start_time = Instant::now();
    let num_workers = config.num_workers;
    let ranges = partition(grid.rows(), num_workers)?;

    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        length,
        num_workers,
        "starting parallel count"
    );

    let (coordinator_channels, worker_channels) = create_channels(num_workers);

    // Join barrier: every worker is joined before the scope returns
    let panics: Vec<Error> = thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .into_iter()
            .zip(worker_channels)
            .enumerate()
            .map(|(worker_id, (range, channels))| {
                let request = ScanRequest {
                    worker_id,
                    length,
                    range,
                };
                let handle =
                    scope.spawn(move || run_worker_task(grid, request, scan, channels));
                (worker_id, handle)
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|(worker_id, handle)| {
                handle.join().err().map(|payload| Error::WorkerFailure {
                    worker_id,
                    message: panic_message(&*payload),
                })
            })
            .collect()
    });

    let mut failures = panics;
    let mut reports = Vec::with_capacity(num_workers);
    for message in coordinator_channels.drain() {
        match message {
            WorkerMessage::Finished(report) => reports.push(report),
            WorkerMessage::Error { worker_id, message } => {
                failures.push(Error::WorkerFailure { worker_id, message });
            }
        }
    }

    if let Some(failure) = first_failure(failures) {
        tracing::debug!(error = %failure, "parallel count failed");
        return Err(failure);
    }

    reports.sort_by_key(|r| r.worker_id);
    let missing = (0..num_workers).find(|&id| reports.get(id).map(|r| r.worker_id) != Some(id));
    if let Some(missing) = missing {
        return Err(Error::WorkerFailure {
            worker_id: missing,
            message: "worker exited without reporting".to_string(),
        });
    }

    // Single reduction after all workers are joined
    let total: AxisCounts = reports.iter().map(|r| r.counts).sum();
    let elapsed = start_time.elapsed();

    let result = ParallelResult {
        length,
        num_workers,
        total,
        worker_reports: reports,
        elapsed,
    };

    tracing::debug!(
        count = result.count(),
        elapsed = ?result.elapsed,
        "parallel count finished"
    );

    Ok(result)
}

/// Failure of the lowest-numbered worker, so the reported error does not
/// depend on scheduling.
fn first_failure(failures: Vec<Error>) -> Option<Error> {
    failures.into_iter().min_by_key(|err| match err {
        Error::WorkerFailure { worker_id, .. } => *worker_id,
        _ => usize::MAX,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}
