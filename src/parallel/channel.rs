//! Reporting channel between scan workers and the coordinator.

use crate::result::WorkerReport;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Message sent from a worker to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker scanned its whole range.
    Finished(WorkerReport),
    /// Worker could not scan its range.
    Error { worker_id: usize, message: String },
}

impl WorkerMessage {
    pub fn worker_id(&self) -> usize {
        match self {
            WorkerMessage::Finished(report) => report.worker_id,
            WorkerMessage::Error { worker_id, .. } => *worker_id,
        }
    }
}

/// Channel endpoint for a worker.
#[derive(Debug)]
pub struct WorkerChannels {
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
}

/// Channel endpoint for the coordinator.
#[derive(Debug)]
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
}

impl CoordinatorChannels {
    /// Collect every message sent so far.
    ///
    /// Once all worker endpoints are dropped this returns everything the
    /// workers ever sent.
    pub fn drain(&self) -> Vec<WorkerMessage> {
        self.from_workers.try_iter().collect()
    }
}

/// Create channels for the given number of workers.
///
/// The coordinator does not keep a sender, so the channel disconnects as
/// soon as the last worker finishes.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    // Unbounded so a worker never blocks on reporting
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            to_coordinator: worker_tx.clone(),
        })
        .collect();

    (
        CoordinatorChannels {
            from_workers: coordinator_rx,
        },
        worker_channels,
    )
}
