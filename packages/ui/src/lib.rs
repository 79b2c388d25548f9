//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod animation;
pub use animation::spawn_fade;

mod timer;
pub use timer::{next_frame, sleep};

mod debounce;
pub use debounce::Debounce;

mod escape;

pub mod nav;
pub use nav::go_to;

mod services;
pub use services::{use_catalog, use_services, Services};

mod auth;
pub use auth::{
    refresh_auth, use_auth, AuthButton, AuthIcon, AuthProvider, AuthState, AuthView, LoginButton,
    LogoutButton, UserLogin,
};

pub mod search;
pub use search::{ResultAction, SearchBar, SearchDropdown, SearchPanel};

mod movie_overlay;
pub use movie_overlay::{
    finish_close, use_overlay, MovieOverlay, MovieOverlayHost, OverlayHandle, OverlayPhase,
    WatchlistButtonView,
};

mod movie_grid;
pub use movie_grid::{MovieCard, MovieGrid};

mod cookie_popup;
pub use cookie_popup::{banner_plan, dismiss_fade, CookiePopup};

mod navbar;
pub use navbar::Navbar;
