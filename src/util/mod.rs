//! Shared utilities.

pub mod debounce;
pub mod fib;
pub mod telemetry;
pub mod throttle;

pub use debounce::Debounce;
pub use fib::fibonacci;
pub use telemetry::init_tracing;
pub use throttle::Throttle;
