//! Stores and configuration shared by every component.
//!
//! The web binary builds one [`Services`] at startup and provides it (and the
//! movie catalog signal) through context; components never reach for globals.

use std::sync::Arc;

use dioxus::prelude::*;
use store::{ConsentStore, CookieJar, MovieCatalog, SessionStore, SiteConfig, WatchlistStore};

#[derive(Clone)]
pub struct Services {
    pub config: Arc<SiteConfig>,
    pub session: SessionStore,
    pub watchlist: WatchlistStore,
    pub consent: ConsentStore,
}

impl Services {
    /// Build every store on top of one cookie jar.
    pub fn new(jar: Arc<dyn CookieJar>, config: SiteConfig) -> Self {
        Self {
            session: SessionStore::new(jar.clone(), &config.cookies),
            watchlist: WatchlistStore::new(jar.clone(), &config.cookies),
            consent: ConsentStore::new(jar, &config.cookies),
            config: Arc::new(config),
        }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// The externally supplied movie list. Starts out not loaded.
pub fn use_catalog() -> Signal<MovieCatalog> {
    use_context::<Signal<MovieCatalog>>()
}
