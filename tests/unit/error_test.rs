//! Tests for error display and construction

use anyhow::anyhow;
use batchq::core::SchedulerError;

#[test]
fn test_invalid_reference_display() {
    let err = SchedulerError::InvalidReference;
    assert_eq!(err.to_string(), "operation requires a live node reference");
}

#[test]
fn test_invalid_limit_display() {
    let err = SchedulerError::InvalidLimit(0);
    assert_eq!(err.to_string(), "invalid concurrency limit: 0");
}

#[test]
fn test_task_failure_preserves_detail() {
    let err = SchedulerError::Task(anyhow!("gpu fell off the bus"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("task failed during batch drain"));
    assert!(rendered.contains("gpu fell off the bus"));
}
