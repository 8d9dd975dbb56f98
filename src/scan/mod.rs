//! Scan orchestration: type resolution, the per-file pipeline, and the
//! directory scheduler with its two execution modes.

pub mod pipeline;
pub mod resolve;
pub mod scheduler;

pub use pipeline::DetectionPipeline;
pub use resolve::TypeResolver;
pub use scheduler::{blocking_worker_budget, ExecutionMode, ScanScheduler};
