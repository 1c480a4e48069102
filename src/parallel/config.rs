//! Configuration for parallel counting.

use crate::error::{Error, Result};

/// Configuration for one parallel count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn. Exactly this many workers run,
    /// even if some of them receive an empty row range.
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    /// Set the number of workers. Zero is accepted here and rejected when
    /// counting starts.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Set the number of workers from an Option, keeping the current value
    /// for `None`.
    pub fn with_workers_option(mut self, num_workers: Option<usize>) -> Self {
        if let Some(n) = num_workers {
            self.num_workers = n;
        }
        self
    }

    /// Check the configuration before any thread is spawned.
    pub fn validate(&self) -> Result<()> {
        if self.num_workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }
        Ok(())
    }
}
