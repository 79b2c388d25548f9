//! Full-page navigation.

/// Send the browser to `href`.
pub fn go_to(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                tracing::error!("Failed to navigate to {href}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("Navigation to {href} requested outside the browser");
}
