//! Platform-aware timers.

use std::time::Duration;

/// Roughly one display frame.
pub const FRAME: Duration = Duration::from_millis(16);

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Yield until the next frame has been painted.
pub async fn next_frame() {
    sleep(FRAME).await;
}
