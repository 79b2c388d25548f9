//! Watchlist store: an insertion-ordered, duplicate-free list of movie ids kept
//! in its own cookie as a URL-encoded JSON array, for 365 days.
//!
//! Every operation re-reads the cookie before writing, so concurrent tabs
//! resolve as last-writer-wins on the whole list.

use std::sync::Arc;

use crate::config::CookieConfig;
use crate::cookies::{CookieJar, CookieOptions};
use crate::models::MovieId;

#[derive(Clone)]
pub struct WatchlistStore {
    jar: Arc<dyn CookieJar>,
    name: String,
    ttl_days: u32,
}

impl WatchlistStore {
    pub fn new(jar: Arc<dyn CookieJar>, config: &CookieConfig) -> Self {
        Self {
            jar,
            name: config.watchlist.clone(),
            ttl_days: config.watchlist_ttl_days,
        }
    }

    /// Watchlisted ids in insertion order. Absent or unreadable cookies give an empty list.
    pub fn get(&self) -> Vec<MovieId> {
        let raw = match self.jar.get(&self.name) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read watchlist cookie: {e}");
                return Vec::new();
            }
        };
        let parsed = urlencoding::decode(&raw)
            .map_err(|e| e.to_string())
            .and_then(|json| serde_json::from_str::<Vec<MovieId>>(&json).map_err(|e| e.to_string()));
        match parsed {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("Ignoring malformed watchlist cookie: {e}");
                Vec::new()
            }
        }
    }

    pub fn set(&self, ids: &[MovieId]) {
        let json = match serde_json::to_string(ids) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize watchlist: {e}");
                return;
            }
        };
        if let Err(e) = self.jar.set(
            &self.name,
            &urlencoding::encode(&json),
            &CookieOptions::days(self.ttl_days),
        ) {
            tracing::warn!("Failed to write watchlist cookie: {e}");
        }
    }

    /// Append `id` unless it is already present.
    pub fn add(&self, id: MovieId) {
        let mut ids = self.get();
        if ids.contains(&id) {
            return;
        }
        ids.push(id);
        self.set(&ids);
        tracing::info!("Added movie {id} to watchlist");
    }

    /// Remove `id`. Always rewrites the cookie, even when `id` was absent.
    pub fn remove(&self, id: MovieId) {
        let ids: Vec<MovieId> = self.get().into_iter().filter(|i| *i != id).collect();
        self.set(&ids);
        tracing::info!("Removed movie {id} from watchlist");
    }

    pub fn is_in_watchlist(&self, id: MovieId) -> bool {
        self.get().contains(&id)
    }

    /// Add `id` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&self, id: MovieId) -> bool {
        if self.is_in_watchlist(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }
}
