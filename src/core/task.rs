//! Task factory type aliases and boxing helper.

use std::future::Future;

use futures::future::BoxFuture;

use super::error::AppResult;

/// Future produced by invoking a task factory.
pub type TaskFuture<T> = BoxFuture<'static, AppResult<T>>;

/// A deferred unit of work: a zero-argument factory producing the task's
/// future. The work does not start until a drain step invokes the factory.
pub type TaskFactory<T> = Box<dyn FnOnce() -> TaskFuture<T> + Send + 'static>;

/// Box a closure and the future it produces into a [`TaskFactory`].
///
/// Useful when building an initial task list for
/// [`SchedulerBuilder`](crate::builders::SchedulerBuilder); `enqueue` boxes
/// its argument itself.
pub fn boxed<T, F, Fut>(factory: F) -> TaskFactory<T>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
{
    Box::new(move || Box::pin(factory()))
}
