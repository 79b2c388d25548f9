//! Last-call-wins delay for the search box.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::timer::sleep;

/// Each [`Debounce::wait`] supersedes the ones started before it, and
/// [`Debounce::cancel`] supersedes all of them.
#[derive(Clone, Debug, Default)]
pub struct Debounce {
    generation: Arc<AtomicU64>,
}

impl PartialEq for Debounce {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.generation, &other.generation)
    }
}

impl Debounce {
    /// Wait `delay`. Resolves to `true` only if no later `wait` or `cancel`
    /// happened in the meantime.
    pub async fn wait(&self, delay: Duration) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        sleep(delay).await;
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Drop whatever is pending.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    const DELAY: Duration = Duration::from_millis(300);

    async fn after(offset: Duration, debounce: &Debounce) -> Option<Instant> {
        tokio::time::sleep(offset).await;
        debounce.wait(DELAY).await.then(Instant::now)
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_keystroke_wins() {
        let debounce = Debounce::default();
        let start = Instant::now();

        let (first, second, third) = tokio::join!(
            after(Duration::ZERO, &debounce),
            after(Duration::from_millis(100), &debounce),
            after(Duration::from_millis(250), &debounce),
        );

        assert_eq!(first, None);
        assert_eq!(second, None);
        assert_eq!(third.map(|t| t - start), Some(Duration::from_millis(550)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_keystroke_fires_after_delay() {
        let debounce = Debounce::default();
        let start = Instant::now();
        let fired = after(Duration::ZERO, &debounce).await;
        assert_eq!(fired.map(|t| t - start), Some(DELAY));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_search() {
        let debounce = Debounce::default();
        let (fired, ()) = tokio::join!(after(Duration::ZERO, &debounce), async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            debounce.cancel();
        });
        assert_eq!(fired, None);

        // A new keystroke after closing works again.
        assert!(debounce.wait(DELAY).await);
    }
}
