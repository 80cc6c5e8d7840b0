//! Trailing-edge debounce wrapper for burst-prone callers.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

/// Debounced invocation handle.
///
/// [`call`](Self::call) restarts a quiet-period timer; the wrapped closure
/// fires once the calls stop for `delay`. A burst of calls therefore collapses
/// into a single trailing invocation. The timer runs on a background tokio
/// task, so construction requires a running runtime.
pub struct Debounce {
    tx: mpsc::UnboundedSender<()>,
}

impl Debounce {
    /// Wrap `f` so it fires `delay` after the last call of a burst.
    pub fn new<F>(mut f: F, delay: Duration) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        tokio::spawn(async move {
            while rx.recv().await.is_some() {
                loop {
                    match timeout(delay, rx.recv()).await {
                        // Another call landed inside the window; restart it.
                        Ok(Some(())) => {}
                        // Handle dropped mid-wait: fire the pending call, stop.
                        Ok(None) => {
                            f();
                            return;
                        }
                        // Quiet period elapsed.
                        Err(_) => {
                            f();
                            break;
                        }
                    }
                }
            }
        });
        Self { tx }
    }

    /// Register a call, restarting the quiet-period window.
    pub fn call(&self) {
        // Send only fails once the worker exited, which only happens after
        // this handle is dropped.
        let _ = self.tx.send(());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn counted() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_one_trailing_call() {
        let (count, f) = counted();
        let debounce = Debounce::new(f, Duration::from_millis(300));

        for _ in 0..5 {
            debounce.call();
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_inside_window_restarts_it() {
        let (count, f) = counted();
        let debounce = Debounce::new(f, Duration::from_millis(300));

        debounce.call();
        tokio::time::sleep(Duration::from_millis(200)).await;
        debounce.call();

        // 400ms after the first call, but only 200ms after the second.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_fire_separately() {
        let (count, f) = counted();
        let debounce = Debounce::new(f, Duration::from_millis(100));

        debounce.call();
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        debounce.call();
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_mid_wait_fires_pending_call() {
        let (count, f) = counted();
        let debounce = Debounce::new(f, Duration::from_millis(300));

        debounce.call();
        drop(debounce);

        // The worker notices the closed channel without waiting out the delay.
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
