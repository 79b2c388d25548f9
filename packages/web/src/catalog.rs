//! Picks up the movie list the page publishes as `window.movies`.
//!
//! The list is written by a separate script that may run at any time, before
//! or after the app starts, and may be replaced later. It is polled for the
//! whole session: quickly until it first appears, then at a slower pace to
//! notice replacements. Until it shows up the catalog stays not loaded and
//! search reports that.

use std::time::Duration;

use dioxus::prelude::*;
use serde_json::Value;
use store::{Movie, MovieCatalog};

const POLL_INTERVAL: Duration = Duration::from_millis(200);
const RECHECK_INTERVAL: Duration = Duration::from_secs(1);

pub fn use_catalog_loader(mut catalog: Signal<MovieCatalog>) {
    use_hook(move || {
        spawn(async move {
            let mut watch = CatalogWatch::default();
            loop {
                if let Some(update) = watch.update(published_entries()) {
                    catalog.set(update);
                }
                let interval = if watch.is_loaded() {
                    RECHECK_INTERVAL
                } else {
                    POLL_INTERVAL
                };
                ui::sleep(interval).await;
            }
        });
    });
}

/// Remembers the last published list so unchanged polls do nothing.
#[derive(Debug, Default)]
pub struct CatalogWatch {
    last: Option<Vec<Value>>,
}

impl CatalogWatch {
    pub fn is_loaded(&self) -> bool {
        self.last.is_some()
    }

    /// The catalog to publish when `entries` differs from the previous poll.
    ///
    /// A list that disappears again keeps the catalog already shown.
    pub fn update(&mut self, entries: Option<Vec<Value>>) -> Option<MovieCatalog> {
        let entries = entries?;
        if self.last.as_ref() == Some(&entries) {
            return None;
        }
        let movies = parse_entries(&entries);
        tracing::info!("Loaded {} movies", movies.len());
        self.last = Some(entries);
        Some(MovieCatalog::loaded(movies))
    }
}

/// Convert every entry on its own. An entry that is not a movie object becomes
/// an unlisted placeholder, so later entries keep their positions (ids).
pub fn parse_entries(entries: &[Value]) -> Vec<Movie> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry.clone()).unwrap_or_else(|e| {
                tracing::warn!("Skipping movie #{index}: {e}");
                Movie::default()
            })
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn published_entries() -> Option<Vec<Value>> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("movies")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    // Not an array: treat as not published yet.
    serde_wasm_bindgen::from_value(value).ok()
}

/// Outside the browser there is no page script; serve the bundled sample.
#[cfg(not(target_arch = "wasm32"))]
fn published_entries() -> Option<Vec<Value>> {
    bundled_entries()
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn bundled_entries() -> Option<Vec<Value>> {
    match serde_json::from_str(include_str!("../assets/movies.json")) {
        Ok(entries) => Some(entries),
        Err(e) => {
            tracing::warn!("Bundled movie list is invalid: {e}");
            None
        }
    }
}
