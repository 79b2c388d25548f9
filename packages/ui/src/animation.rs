//! Drives a [`Fade`] from a Dioxus task.

use dioxus::core::Task;
use dioxus::prelude::*;
use store::Fade;

use crate::timer::sleep;

/// Step `opacity` through `fade`, one value per frame, then call `on_done`.
///
/// The returned task stops the fade when cancelled; `on_done` is then never
/// called.
pub fn spawn_fade(fade: Fade, mut opacity: Signal<f32>, on_done: impl FnOnce() + 'static) -> Task {
    spawn(async move {
        opacity.set(fade.from);
        for value in fade.frames() {
            sleep(fade.frame).await;
            opacity.set(value);
        }
        on_done();
    })
}
