/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Stress Harness
//!
//! Spawns a configurable number of concurrent workers against one shared
//! [`AtomicCell`] and joins them all, reporting the final observed value.
//! The harness exists to validate the cell's atomicity contract under real
//! OS-thread contention and to provide a smoke-test surface.
//!
//! A run moves through four states in straight-line control flow: workers
//! not yet started, workers running in parallel, the harness blocking on
//! each join in sequence, and done once every join has been attempted. There
//! are no retries, no cancellation, and no join timeout — a hung worker
//! blocks completion indefinitely.
//!
//! # Author
//!
//! Haixing Hu

use std::io;
use std::sync::Arc;
use std::thread;

use thiserror::Error;
use tracing::{
    debug,
    warn,
};

use crate::atomic::AtomicCell;

/// Errors produced by the stress harness.
///
/// Join failures are deliberately absent: a failed join is recorded in the
/// [`StressReport`] and joining continues, so it never aborts a run.
#[derive(Debug, Error)]
pub enum StressError {
    /// The harness was constructed with a worker count of zero.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// The operating system refused to create a worker thread.
    ///
    /// Workers spawned before the failure are joined before this error is
    /// returned, so no threads are leaked.
    #[error("failed to spawn stress worker {index}")]
    Spawn {
        /// Index of the worker that could not be spawned.
        index: usize,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}

/// Outcome of a completed stress run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressReport {
    /// The cell value observed after every join was attempted.
    pub final_value: i64,
    /// Number of workers the run spawned.
    pub workers: usize,
    /// Number of workers whose join failed (the worker panicked).
    pub failed_joins: usize,
}

/// Concurrent stress harness over one shared [`AtomicCell`].
///
/// All workers share exactly one cell through an `Arc` handle passed into
/// each worker's entry closure; no worker owns the cell exclusively and no
/// global state is involved. The cell's own atomicity is the sole
/// synchronization mechanism between workers.
///
/// # Example
///
/// ```rust
/// use prism3_counter::{AtomicCell, StressHarness};
/// use std::sync::Arc;
///
/// let harness = StressHarness::new(15).unwrap();
/// let cell = Arc::new(AtomicCell::new(0));
/// let report = harness
///     .run_with(cell, |_, cell| {
///         cell.increment();
///     })
///     .unwrap();
/// assert_eq!(report.final_value, 15);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct StressHarness {
    workers: usize,
}

impl StressHarness {
    /// Creates a harness that will spawn `workers` concurrent workers.
    ///
    /// # Parameters
    ///
    /// * `workers` - Number of workers to spawn; must be at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`StressError::NoWorkers`] if `workers` is zero.
    pub fn new(workers: usize) -> Result<Self, StressError> {
        if workers == 0 {
            return Err(StressError::NoWorkers);
        }
        Ok(Self { workers })
    }

    /// Returns the configured worker count.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs the default workload: each worker observes the shared cell once
    /// and exits.
    ///
    /// The observation is logged at debug level. Because no worker mutates
    /// the cell, the reported final value equals the initial value — the
    /// contended case exercised here is read-only concurrent access.
    ///
    /// # Parameters
    ///
    /// * `cell` - The shared cell every worker observes.
    ///
    /// # Errors
    ///
    /// Returns [`StressError::Spawn`] if a worker thread could not be
    /// created.
    pub fn run(&self, cell: Arc<AtomicCell>) -> Result<StressReport, StressError> {
        self.run_with(cell, |index, cell| {
            debug!(worker = index, value = cell.get(), "observed cell");
        })
    }

    /// Runs a custom per-worker script against the shared cell.
    ///
    /// Every worker executes `script(index, &cell)` exactly once, where
    /// `index` is the worker's position in spawn order. The script is shared
    /// across workers, so any state it captures must be `Sync`.
    ///
    /// Workers are spawned as named OS threads. If the operating system
    /// refuses a spawn, the already-running workers are joined first and the
    /// spawn error is then returned. A worker that panics fails its join;
    /// the failure is recorded and joining continues with the remaining
    /// workers, so one misbehaving worker cannot hide the effects of the
    /// others.
    ///
    /// # Parameters
    ///
    /// * `cell` - The shared cell handed to every worker.
    /// * `script` - The operation sequence each worker performs.
    ///
    /// # Returns
    ///
    /// A [`StressReport`] carrying the final cell value and the number of
    /// failed joins.
    ///
    /// # Errors
    ///
    /// Returns [`StressError::Spawn`] if a worker thread could not be
    /// created.
    pub fn run_with<F>(
        &self,
        cell: Arc<AtomicCell>,
        script: F,
    ) -> Result<StressReport, StressError>
    where
        F: Fn(usize, &AtomicCell) + Send + Sync + 'static,
    {
        let script = Arc::new(script);
        let mut handles = Vec::with_capacity(self.workers);
        let mut spawn_error = None;

        debug!(workers = self.workers, "spawning stress workers");
        for index in 0..self.workers {
            let cell = Arc::clone(&cell);
            let script = Arc::clone(&script);
            let spawned = thread::Builder::new()
                .name(format!("stress-worker-{index}"))
                .spawn(move || script(index, &cell));
            match spawned {
                Ok(handle) => handles.push((index, handle)),
                Err(source) => {
                    spawn_error = Some(StressError::Spawn { index, source });
                    break;
                }
            }
        }

        let mut failed_joins = 0;
        for (index, handle) in handles {
            if handle.join().is_err() {
                warn!(worker = index, "stress worker panicked before joining");
                failed_joins += 1;
            }
        }

        if let Some(error) = spawn_error {
            return Err(error);
        }

        let final_value = cell.get();
        debug!(final_value, failed_joins, "stress run complete");
        Ok(StressReport {
            final_value,
            workers: self.workers,
            failed_joins,
        })
    }
}
