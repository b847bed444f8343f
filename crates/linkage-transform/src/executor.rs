//! Dataset fan-out / fan-in.
//!
//! Each submitted dataset gets its own worker thread running the whole
//! schema transformation end to end; the executor blocks until every worker
//! returns and yields results in submission order. A worker failure aborts
//! the run — there is no partial output and no retry. Datasets are owned by
//! their workers, so nothing is shared mutably.

use std::thread;

use tracing::{debug, error, info_span};

use linkage_model::{Batch, DatasetKind, LinkageError, Result};
use linkage_normalize::NormalizeOptions;

use crate::transformer::{DEFAULT_CHUNK_SIZE, DatasetTransformer, TransformStats};

/// One dataset's canonical output plus its counters.
#[derive(Debug)]
pub struct DatasetResult {
    pub kind: DatasetKind,
    pub batch: Batch,
    pub stats: TransformStats,
}

/// Executes a set of `(schema tag, batch)` jobs and returns per-tag
/// canonical batches. Holds no process-wide state; build one per run.
#[derive(Debug, Clone)]
pub struct BatchExecutor {
    options: NormalizeOptions,
    chunk_size: usize,
    show_progress: bool,
}

impl BatchExecutor {
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            chunk_size: DEFAULT_CHUNK_SIZE,
            show_progress: false,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn transformer_for(&self, kind: DatasetKind, progress: bool) -> DatasetTransformer {
        DatasetTransformer::new(kind, &self.options)
            .with_chunk_size(self.chunk_size)
            .with_progress(progress)
    }

    /// Fan out one worker thread per dataset and join in submission order.
    ///
    /// # Errors
    ///
    /// The first failing worker (error or panic) aborts the run with
    /// `Worker`, naming the dataset.
    pub fn run(&self, jobs: Vec<(DatasetKind, Batch)>) -> Result<Vec<DatasetResult>> {
        let span = info_span!("transform", workers = jobs.len());
        let _guard = span.enter();
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(jobs.len());
            for (kind, batch) in jobs {
                // Progress bars from concurrent workers would interleave on
                // one terminal; they are only drawn on the sequential path.
                let transformer = self.transformer_for(kind, false);
                let handle = scope.spawn(move || {
                    let (batch, stats) = transformer.transform(batch)?;
                    Ok::<_, LinkageError>(DatasetResult { kind, batch, stats })
                });
                handles.push((kind, handle));
            }

            let mut results = Vec::with_capacity(handles.len());
            for (kind, handle) in handles {
                match handle.join() {
                    Ok(Ok(result)) => {
                        debug!(dataset = %kind, rows = result.stats.rows, "worker finished");
                        results.push(result);
                    }
                    Ok(Err(source)) => {
                        error!(dataset = %kind, %source, "worker failed");
                        return Err(LinkageError::Worker {
                            dataset: kind,
                            source: Box::new(source),
                        });
                    }
                    Err(_) => {
                        error!(dataset = %kind, "worker panicked");
                        return Err(LinkageError::Worker {
                            dataset: kind,
                            source: Box::new(LinkageError::Message("worker panicked".to_string())),
                        });
                    }
                }
            }
            Ok(results)
        })
    }

    /// Process the datasets one after another on the calling thread.
    ///
    /// Same results and error semantics as [`BatchExecutor::run`].
    pub fn run_sequential(&self, jobs: Vec<(DatasetKind, Batch)>) -> Result<Vec<DatasetResult>> {
        let span = info_span!("transform", workers = 1usize);
        let _guard = span.enter();
        let mut results = Vec::with_capacity(jobs.len());
        for (kind, batch) in jobs {
            let transformer = self.transformer_for(kind, self.show_progress);
            let (batch, stats) =
                transformer
                    .transform(batch)
                    .map_err(|source| LinkageError::Worker {
                        dataset: kind,
                        source: Box::new(source),
                    })?;
            debug!(dataset = %kind, rows = stats.rows, "dataset finished");
            results.push(DatasetResult { kind, batch, stats });
        }
        Ok(results)
    }
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}
