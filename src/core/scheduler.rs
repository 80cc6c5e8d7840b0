//! Bounded-concurrency batch scheduler over a FIFO queue of task factories.

use std::future::Future;

use futures::future::join_all;
use uuid::Uuid;

use crate::containers::Queue;
use crate::core::error::{AppResult, SchedulerError};
use crate::core::task::{self, TaskFactory, TaskFuture};

/// A pending factory tagged with an identifier for tracing output.
struct QueuedTask<T> {
    id: Uuid,
    factory: TaskFactory<T>,
}

/// Scheduler that drains a FIFO queue of deferred async work in capped batches.
///
/// Each [`drain_step`](Self::drain_step) removes up to `limit` factories in
/// FIFO order, invokes all of them before awaiting anything, waits for the
/// whole batch, and returns results positionally in removal order. The
/// scheduler tracks only *pending* factories: once a batch is removed for
/// dispatch it is no longer part of scheduler state, whatever its outcome.
///
/// The scheduling model is cooperative: batch futures interleave at their own
/// await points, and the caller suspends only while waiting for the batch.
/// All mutation goes through `&mut self`, so no internal locking is needed.
pub struct BatchScheduler<T> {
    queue: Queue<QueuedTask<T>>,
    limit: usize,
}

impl<T> std::fmt::Debug for BatchScheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchScheduler")
            .field("pending", &self.queue.len())
            .field("limit", &self.limit)
            .finish()
    }
}

impl<T> Default for BatchScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BatchScheduler<T> {
    /// Concurrency limit used by [`new`](Self::new).
    pub const DEFAULT_LIMIT: usize = 5;

    /// Create an empty scheduler with [`DEFAULT_LIMIT`](Self::DEFAULT_LIMIT).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: Queue::new(),
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Create an empty scheduler with an explicit concurrency limit.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidLimit`] when `limit` is zero. The
    /// limit caps simultaneously in-flight work, so zero would make every
    /// drain step a no-op.
    pub const fn with_limit(limit: usize) -> Result<Self, SchedulerError> {
        if limit == 0 {
            return Err(SchedulerError::InvalidLimit(0));
        }
        Ok(Self {
            queue: Queue::new(),
            limit,
        })
    }

    /// The fixed concurrency limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Append a task factory to the queue. Never blocks, never fails.
    ///
    /// The factory is not invoked here; it runs when a drain step removes it.
    pub fn enqueue<F, Fut>(&mut self, factory: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = AppResult<T>> + Send + 'static,
    {
        self.enqueue_boxed(task::boxed(factory));
    }

    /// Append an already-boxed task factory to the queue.
    pub fn enqueue_boxed(&mut self, factory: TaskFactory<T>) {
        let id = Uuid::new_v4();
        tracing::debug!(task = %id, pending = self.queue.len() + 1, "task enqueued");
        self.queue.enqueue(QueuedTask { id, factory });
    }

    /// Number of pending, not-yet-dispatched factories.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no factories are pending.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Discard all pending factories by replacing the queue wholesale.
    ///
    /// Factories already removed for an in-flight batch are unaffected; they
    /// left scheduler state at dispatch time.
    pub fn clear(&mut self) {
        let discarded = self.queue.len();
        self.queue = Queue::new();
        tracing::debug!(discarded, "pending tasks cleared");
    }

    /// Run one bounded batch: remove up to `limit` factories in FIFO order,
    /// start all of their futures together, and wait for the whole batch.
    ///
    /// Returns `Ok(None)` — the explicit empty-queue signal — when no factory
    /// is pending at call time, without touching state. Otherwise returns
    /// `Ok(Some(results))` where position `i` holds the result of the `i`-th
    /// factory removed, regardless of completion order. Exactly one batch is
    /// drained per call.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Task`] carrying the first failure in removal
    /// order when any task in the batch fails. No partial results are
    /// returned, the batch's factories are not re-queued, and the remaining
    /// tasks of the batch still run to completion before the call returns
    /// (their results are discarded).
    pub async fn drain_step(&mut self) -> Result<Option<Vec<T>>, SchedulerError> {
        if self.queue.is_empty() {
            return Ok(None);
        }

        let batch = self.queue.dequeue_count(self.limit);
        let ids: Vec<Uuid> = batch.iter().map(|queued| queued.id).collect();
        tracing::debug!(
            batch = batch.len(),
            remaining = self.queue.len(),
            "dispatching drain step"
        );

        // Invoke every factory before the await so the batch starts together.
        let futures: Vec<TaskFuture<T>> = batch
            .into_iter()
            .map(|queued| (queued.factory)())
            .collect();
        let settled = join_all(futures).await;

        let mut results = Vec::with_capacity(settled.len());
        for (id, outcome) in ids.into_iter().zip(settled) {
            match outcome {
                Ok(value) => results.push(value),
                Err(err) => {
                    tracing::warn!(task = %id, error = %err, "batch task failed");
                    return Err(SchedulerError::Task(err));
                }
            }
        }
        Ok(Some(results))
    }

    /// Start a lazy, stoppable sequence of drain steps over live state.
    ///
    /// Every call yields a fresh cursor; each [`next_batch`](DrainSequence::next_batch)
    /// performs exactly one [`drain_step`](Self::drain_step) against the
    /// scheduler's state at that moment, not a snapshot. Fully consuming a
    /// cursor is equivalent to calling `drain_step` until the empty signal.
    pub fn drain_sequence(&mut self) -> DrainSequence<'_, T> {
        DrainSequence {
            scheduler: self,
            finished: false,
        }
    }
}

/// Stateful cursor produced by [`BatchScheduler::drain_sequence`].
///
/// Once a step observes the queue empty the cursor is finished and keeps
/// returning `Ok(None)` without touching the scheduler, even if tasks were
/// enqueued afterwards; start a new cursor to drain those.
pub struct DrainSequence<'a, T> {
    scheduler: &'a mut BatchScheduler<T>,
    finished: bool,
}

impl<T> DrainSequence<'_, T> {
    /// Advance the sequence by one bounded batch.
    ///
    /// # Errors
    ///
    /// Propagates [`SchedulerError::Task`] from the underlying drain step; a
    /// failed step does not finish the cursor, so draining can continue with
    /// the next batch.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<T>>, SchedulerError> {
        if self.finished {
            return Ok(None);
        }
        let step = self.scheduler.drain_step().await?;
        if step.is_none() {
            self.finished = true;
        }
        Ok(step)
    }

    /// Whether a step has already observed the queue empty.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}
