//! Core scheduling: batch scheduler, drain cursor, task types, errors.

pub mod error;
pub mod scheduler;
pub mod task;

pub use error::{AppResult, SchedulerError};
pub use scheduler::{BatchScheduler, DrainSequence};
pub use task::{TaskFactory, TaskFuture};
