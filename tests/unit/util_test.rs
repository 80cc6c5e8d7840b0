//! Tests for utility helpers

use batchq::util::{fibonacci, init_tracing};
use num_bigint::BigUint;

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

#[test]
fn test_fibonacci_known_value() {
    assert_eq!(fibonacci(10), BigUint::from(55u8));
}
