//! Tests for scheduler configuration parsing and validation

use batchq::config::SchedulerConfig;

#[test]
fn test_default_limit_is_five() {
    let cfg = SchedulerConfig::default();
    assert_eq!(cfg.concurrency_limit, 5);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_zero_limit_fails_validation() {
    let cfg = SchedulerConfig {
        concurrency_limit: 0,
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("concurrency_limit"));
}

#[test]
fn test_from_json_str_parses_and_validates() {
    let cfg = SchedulerConfig::from_json_str(r#"{"concurrency_limit": 8}"#).unwrap();
    assert_eq!(cfg.concurrency_limit, 8);

    assert!(SchedulerConfig::from_json_str(r#"{"concurrency_limit": 0}"#).is_err());
    assert!(SchedulerConfig::from_json_str("not json").is_err());
}

#[test]
fn test_missing_limit_falls_back_to_default() {
    let cfg = SchedulerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg.concurrency_limit, 5);
}

#[test]
fn test_round_trip_serialization() {
    let cfg = SchedulerConfig {
        concurrency_limit: 3,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back = SchedulerConfig::from_json_str(&json).unwrap();
    assert_eq!(back.concurrency_limit, 3);
}
