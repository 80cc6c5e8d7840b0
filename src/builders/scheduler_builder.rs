//! Builder to construct a batch scheduler from configuration.

use crate::config::SchedulerConfig;
use crate::core::{BatchScheduler, SchedulerError, TaskFactory};

/// Builder for [`BatchScheduler`] supporting an optional concurrency limit
/// and an optional ordered list of initial task factories.
pub struct SchedulerBuilder<T> {
    limit: usize,
    initial_tasks: Vec<TaskFactory<T>>,
}

impl<T> Default for SchedulerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SchedulerBuilder<T> {
    /// Start a builder with the default limit and no initial tasks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: BatchScheduler::<T>::DEFAULT_LIMIT,
            initial_tasks: Vec::new(),
        }
    }

    /// Set the concurrency limit. Validated at [`build`](Self::build) time.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Take the limit from a parsed [`SchedulerConfig`].
    #[must_use]
    pub fn config(mut self, config: &SchedulerConfig) -> Self {
        self.limit = config.concurrency_limit;
        self
    }

    /// Append boxed factories to the initial task list, preserving order.
    #[must_use]
    pub fn initial_tasks(mut self, tasks: impl IntoIterator<Item = TaskFactory<T>>) -> Self {
        self.initial_tasks.extend(tasks);
        self
    }

    /// Build the scheduler, enqueueing the initial tasks in order.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidLimit`] when the limit is zero.
    pub fn build(self) -> Result<BatchScheduler<T>, SchedulerError> {
        let mut scheduler = BatchScheduler::with_limit(self.limit)?;
        for factory in self.initial_tasks {
            scheduler.enqueue_boxed(factory);
        }
        Ok(scheduler)
    }
}
