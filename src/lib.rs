//! # batchq
//!
//! In-process container primitives plus a bounded-concurrency batch scheduler.
//!
//! The core of this crate is [`core::BatchScheduler`]: it owns a FIFO queue of
//! deferred task factories and drains them in capped batches. Each drain step
//! removes up to `limit` factories in FIFO order, starts all of their futures
//! together, waits for the whole batch, and returns results positionally in
//! removal order regardless of which future finished first.
//!
//! ## Core Problem Solved
//!
//! Fan-out async work often needs a ceiling on simultaneously in-flight tasks:
//!
//! - **Bounded batches**: never more than `limit` tasks started per step
//! - **Strict FIFO**: results line up with enqueue order, not completion order
//! - **All-or-none batches**: one failing task fails the whole drain call
//! - **Restartable draining**: a lazy cursor drains batch-by-batch over live state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use batchq::core::BatchScheduler;
//!
//! let mut scheduler = BatchScheduler::new();
//! scheduler.enqueue(|| async { Ok(1) });
//! scheduler.enqueue(|| async { Ok(2) });
//! scheduler.enqueue(|| async { Ok(3) });
//!
//! // One bounded batch (default limit 5 covers all three).
//! let batch = scheduler.drain_step().await?;
//! assert_eq!(batch, Some(vec![1, 2, 3]));
//!
//! // Subsequent steps report the explicit empty signal.
//! assert_eq!(scheduler.drain_step().await?, None);
//! ```
//!
//! ## Container Primitives
//!
//! The scheduler's FIFO queue is exposed as a reusable container alongside two
//! other self-contained collaborators:
//!
//! - [`containers::Queue`]: singly-linked FIFO with O(1) append and removal
//! - [`containers::LinkedList`]: doubly-linked list with bidirectional traversal
//! - [`containers::Stack`]: LIFO stack over an owned chain
//!
//! Utility wrappers ([`util::Debounce`], [`util::Throttle`], [`util::fibonacci`])
//! round out the toolbox; none of them participates in scheduling.
//!
//! For complete examples, see:
//! - `tests/scheduler_test.rs` - Full integration tests
//! - `README.md` - Comprehensive documentation

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling: batch scheduler, drain cursor, task types, errors.
pub mod core;
/// Configuration models for the scheduler.
pub mod config;
/// Builders to construct a scheduler from configuration.
pub mod builders;
/// Reusable container primitives (FIFO queue, linked list, stack).
pub mod containers;
/// Shared utilities: fibonacci, debounce/throttle wrappers, telemetry.
pub mod util;
