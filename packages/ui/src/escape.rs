//! Document-wide Escape key listener.
//!
//! Element `onkeydown` handlers only see keys while they hold focus; the
//! search box has to close on Escape wherever focus is. The listener lives
//! on `document` and removes itself after the first Escape.

use dioxus::prelude::*;

const LISTEN_JS: &str = r#"(function() {
    if (window._filmhavenEscape) {
        document.removeEventListener('keydown', window._filmhavenEscape);
    }
    window._filmhavenEscape = function(evt) {
        if (evt.key !== 'Escape') return;
        document.removeEventListener('keydown', window._filmhavenEscape);
        window._filmhavenEscape = null;
        dioxus.send(true);
    };
    document.addEventListener('keydown', window._filmhavenEscape);
})();"#;

const RELEASE_JS: &str = r#"(function() {
    if (window._filmhavenEscape) {
        document.removeEventListener('keydown', window._filmhavenEscape);
        window._filmhavenEscape = null;
    }
})();"#;

/// Resolves once Escape is pressed anywhere in the document.
///
/// Returns `false` if the listener could not be installed or was dropped.
pub async fn next_escape() -> bool {
    let mut eval = document::eval(LISTEN_JS);
    match eval.recv::<bool>().await {
        Ok(pressed) => pressed,
        Err(e) => {
            tracing::warn!("Escape listener ended: {e:?}");
            false
        }
    }
}

/// Remove a listener installed by [`next_escape`] that never fired.
pub fn release_escape() {
    document::eval(RELEASE_JS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_is_document_wide_and_fires_once() {
        assert!(LISTEN_JS.contains("document.addEventListener('keydown'"));
        assert!(LISTEN_JS.contains("evt.key !== 'Escape'"));
        // Removal happens before the event is reported.
        let removed = LISTEN_JS.rfind("document.removeEventListener").unwrap();
        let sent = LISTEN_JS.find("dioxus.send(true)").unwrap();
        assert!(removed < sent);
        assert!(RELEASE_JS.contains("document.removeEventListener('keydown'"));
    }
}
