//! Count results and per-worker statistics

use crate::parallel::partition::RowRange;
use crate::scan::{Axis, AxisCounts};
use std::time::Duration;

/// What one worker produced for its row range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    /// Rows this worker scanned.
    pub range: RowRange,
    /// Private palindrome tally for the range.
    pub counts: AxisCounts,
    /// Anchor cells visited (`range.len() * cols`).
    pub cells_scanned: u64,
    /// Time spent scanning, excluding spawn and join.
    pub elapsed: Duration,
}

/// Result of one parallel count.
#[derive(Debug, Clone)]
pub struct ParallelResult {
    /// Run length that was counted.
    pub length: usize,
    /// Number of workers that ran.
    pub num_workers: usize,
    /// Sum of every worker's counts.
    pub total: AxisCounts,
    /// Per-worker reports ordered by worker id.
    pub worker_reports: Vec<WorkerReport>,
    /// Wall-clock time from partitioning to reduction.
    pub elapsed: Duration,
}

impl ParallelResult {
    /// Total number of palindromic runs across all axes.
    pub fn count(&self) -> u64 {
        self.total.total()
    }

    pub fn cells_scanned(&self) -> u64 {
        self.worker_reports.iter().map(|r| r.cells_scanned).sum()
    }

    /// Anchor cells scanned per second.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.cells_scanned() as f64 / secs
        }
    }

    /// Format the result as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Length: {}\n", self.length));
        s.push_str(&format!("Workers: {}\n", self.num_workers));
        s.push_str(&format!("Palindromes: {}\n", self.count()));
        for axis in Axis::ALL {
            s.push_str(&format!("  {}: {}\n", axis, self.total.get(axis)));
        }
        s.push_str(&format!("Time: {:.3?}\n", self.elapsed));
        s.push_str(&format!(
            "Throughput: {:.0} cells/sec\n",
            self.throughput()
        ));
        s
    }

    /// Format one line per worker.
    pub fn format_workers(&self) -> String {
        let mut s = String::new();
        for report in &self.worker_reports {
            s.push_str(&format!(
                "  worker {:>2}: rows {:<11} {:>9} palindromes in {:.3?}\n",
                report.worker_id,
                report.range.to_string(),
                report.counts.total(),
                report.elapsed
            ));
        }
        s
    }
}
