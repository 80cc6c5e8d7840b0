//! Error types for scheduler and container operations.

use thiserror::Error;

/// Errors produced by scheduler and container components.
///
/// Empty collections are never errors: `dequeue` on an empty queue and a
/// drain step on an empty scheduler both report absence through sentinels
/// (`None`), not through this enum.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A list operation required a live node reference but none was supplied.
    #[error("operation requires a live node reference")]
    InvalidReference,
    /// Concurrency limit must be positive.
    #[error("invalid concurrency limit: {0}")]
    InvalidLimit(usize),
    /// A task inside a dispatched batch failed; the whole drain call fails.
    #[error("task failed during batch drain: {0}")]
    Task(anyhow::Error),
}

/// Result type tasks produce, using anyhow for arbitrary failure detail.
pub type AppResult<T> = Result<T, anyhow::Error>;
