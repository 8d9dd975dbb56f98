//! Directory scan scheduling.
//!
//! Two interchangeable execution modes that agree on every verdict field:
//! a strictly sequential walk, and an eager enumeration that runs one task
//! per file on a bounded pool of blocking I/O workers. Output order is only
//! guaranteed in sequential mode; correlate by the `file` field otherwise.

use crate::core::DetectionResult;
use crate::error::{LockscanError, Result};
use crate::scan::pipeline::{walk_files, DetectionPipeline};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One file at a time, walk order preserved in the output.
    Sequential,
    /// One task per file on the bounded blocking-worker pool.
    Concurrent,
}

/// Ceiling for concurrently blocked I/O workers.
///
/// Every format probe and entropy read blocks, so the pool is sized for
/// I/O-bound work rather than core count alone.
pub fn blocking_worker_budget() -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (2 * cores + 4).max(32)
}

#[derive(Debug, Clone)]
pub struct ScanScheduler {
    pipeline: Arc<DetectionPipeline>,
    mode: ExecutionMode,
}

impl ScanScheduler {
    pub fn new(pipeline: DetectionPipeline, mode: ExecutionMode) -> Self {
        ScanScheduler {
            pipeline: Arc::new(pipeline),
            mode,
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Analyze every regular file under `root`.
    ///
    /// Only a usage-level failure (root is not a directory) is an error;
    /// per-file faults are isolated into their own results.
    pub fn scan(&self, root: &Path) -> Result<Vec<DetectionResult>> {
        match self.mode {
            ExecutionMode::Sequential => self.pipeline.scan_directory(root),
            ExecutionMode::Concurrent => self.scan_concurrent(root),
        }
    }

    fn scan_concurrent(&self, root: &Path) -> Result<Vec<DetectionResult>> {
        if !root.is_dir() {
            return Err(LockscanError::InvalidTarget(root.to_path_buf()));
        }
        let files: Vec<PathBuf> = walk_files(root).collect();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .max_blocking_threads(blocking_worker_budget())
            .build()?;

        let results = runtime.block_on(async {
            let handles: Vec<_> = files
                .into_iter()
                .map(|file| {
                    let pipeline = Arc::clone(&self.pipeline);
                    let task_file = file.clone();
                    let handle =
                        tokio::task::spawn_blocking(move || pipeline.analyze_file(&task_file));
                    (file, handle)
                })
                .collect();

            let mut results = Vec::with_capacity(handles.len());
            for (file, handle) in handles {
                match handle.await {
                    Ok(result) => results.push(result),
                    // A panicking task loses its measurement but must not
                    // take the scan down with it.
                    Err(err) => {
                        warn!(file = %file.display(), %err, "analysis task failed");
                        results.push(DetectionResult::no_signal(&file, Duration::ZERO));
                    }
                }
            }
            results
        });

        Ok(results)
    }
}
