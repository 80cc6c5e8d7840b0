//! Leading-edge throttle wrapper limiting invocation rate.

use std::time::Duration;

use tokio::time::Instant;

/// Throttled invocation handle.
///
/// [`call`](Self::call) invokes the wrapped closure immediately when outside
/// the cooldown window and drops the call inside it: at most one invocation
/// per `delay`, on the leading edge. Uses `tokio::time::Instant`, so tests
/// with a paused clock stay deterministic.
pub struct Throttle<F> {
    f: F,
    delay: Duration,
    last_fired: Option<Instant>,
}

impl<F: FnMut()> Throttle<F> {
    /// Wrap `f` so it fires at most once per `delay`.
    pub const fn new(f: F, delay: Duration) -> Self {
        Self {
            f,
            delay,
            last_fired: None,
        }
    }

    /// Invoke the closure if the cooldown has passed; returns whether it fired.
    pub fn call(&mut self) -> bool {
        let now = Instant::now();
        if let Some(prev) = self.last_fired {
            if now.duration_since(prev) < self.delay {
                return false;
            }
        }
        (self.f)();
        self.last_fired = Some(now);
        true
    }
}
