//! Tests for the scheduler builder

use batchq::builders::SchedulerBuilder;
use batchq::config::SchedulerConfig;
use batchq::core::{task, SchedulerError};

#[test]
fn test_defaults_to_limit_five() {
    let scheduler = SchedulerBuilder::<u32>::new().build().unwrap();
    assert_eq!(scheduler.limit(), 5);
    assert!(scheduler.is_empty());
}

#[test]
fn test_limit_from_config() {
    let cfg = SchedulerConfig {
        concurrency_limit: 2,
    };
    let scheduler = SchedulerBuilder::<u32>::new().config(&cfg).build().unwrap();
    assert_eq!(scheduler.limit(), 2);
}

#[test]
fn test_zero_limit_rejected() {
    let err = SchedulerBuilder::<u32>::new().limit(0).build().unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidLimit(0)));
}

#[tokio::test]
async fn test_initial_tasks_enqueued_in_order() {
    let mut scheduler = SchedulerBuilder::new()
        .initial_tasks((1u32..=3).map(|v| task::boxed(move || async move { Ok(v) })))
        .build()
        .unwrap();
    assert_eq!(scheduler.len(), 3);
    assert_eq!(scheduler.drain_step().await.unwrap(), Some(vec![1, 2, 3]));
}
