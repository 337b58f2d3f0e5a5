//! Debounced query application.
//!
//! Search-pattern changes are throttled so the filter runs once per idle
//! period rather than on every keystroke. A generation counter discards
//! superseded windows (last-write-wins). This is a UI-responsiveness policy
//! only - the engine itself is idempotent and side-effect-free for equal
//! inputs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Generation-counted debounce window.
///
/// `begin` is synchronous, so windows are ordered by event arrival; clones
/// share the counter, so a window begun on any clone supersedes the windows
/// begun before it.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Create a debouncer with the given idle window.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The idle window length.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Begin a new window, superseding every window begun before it.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Wait out a window and report whether it is still the latest one.
    /// `false` means a newer window superseded it and its work should be
    /// discarded.
    pub async fn settle(&self, window: u64) -> bool {
        tokio::time::sleep(self.delay).await;
        self.generation.load(Ordering::SeqCst) == window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sole_window_wins() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        let window = debouncer.begin();
        assert!(debouncer.settle(window).await);
    }

    #[tokio::test]
    async fn test_superseded_window_loses() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        let first = debouncer.begin();
        let second = debouncer.begin();

        assert!(!debouncer.settle(first).await);
        assert!(debouncer.settle(second).await);
    }

    #[tokio::test]
    async fn test_clones_share_the_counter() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        let first = debouncer.begin();
        let second = debouncer.clone().begin();

        assert!(!debouncer.settle(first).await);
        assert!(debouncer.settle(second).await);
    }
}
