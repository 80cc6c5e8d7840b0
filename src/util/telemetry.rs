//! Telemetry helpers for structured logging and tracing.

/// Initialize tracing for binaries and tests. Users can install their own
/// subscriber instead; this helper installs an env-filtered fmt subscriber
/// only when no global dispatcher is set yet.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
