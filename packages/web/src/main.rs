use std::sync::Arc;

use dioxus::prelude::*;

use store::legacy::purge_legacy_auth;
use store::{CookieJar, KeyValueStore, KvBridge, MovieCatalog, SiteConfig};
use ui::{AuthProvider, CookiePopup, MovieOverlayHost, Navbar, Services};
use views::{Account, Home, Login, Movies, Player, Privacy, Register};

mod catalog;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/movies?:search")]
        Movies { search: String },
        #[route("/player?:id")]
        Player { id: String },
        #[route("/account")]
        Account {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/privacy")]
        Privacy {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SITE_CONFIG: &str = include_str!("../filmhaven.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> SiteConfig {
    SiteConfig::from_toml(SITE_CONFIG).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}: {e}; using defaults", SiteConfig::filename());
        SiteConfig::default()
    })
}

fn cookie_jar() -> Arc<dyn CookieJar> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(store::DocumentCookieJar)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::MemoryCookieJar::new())
    }
}

fn local_storage() -> Arc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(store::LocalStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::MemoryKeyValueStore::new())
    }
}

#[component]
fn App() -> Element {
    let services = use_context_provider(|| Services::new(cookie_jar(), load_config()));
    let movies = use_context_provider(|| Signal::new(MovieCatalog::not_loaded()));
    catalog::use_catalog_loader(movies);

    use_hook(|| {
        let purge = purge_legacy_auth(&KvBridge::new(local_storage()), &services.watchlist);
        if purge.had_token {
            tracing::info!("Dropped a legacy login token; the user has to sign in again");
        }
    });

    rsx! {
        // Global app resources
        document::Stylesheet { href: MAIN_CSS }

        AuthProvider {
            MovieOverlayHost {
                Router::<Route> {}
            }
            CookiePopup {}
        }
    }
}

/// Navbar above every page. The listing page renders its own results, so
/// the navbar search there only submits.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let on_listing = matches!(route, Route::Movies { .. });

    rsx! {
        Navbar { search_dropdown: !on_listing }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
