//! Movie detail overlay.
//!
//! [`MovieOverlayHost`] owns the "which movie is open" signal and renders at
//! most one [`MovieOverlay`]. Anything below it (search results, movie cards)
//! opens a movie through [`OverlayHandle`].
//!
//! Opening waits one frame before adding the `active` class so the CSS
//! transition runs; closing removes it and unmounts after the configured delay.

use std::time::Duration;

use dioxus::prelude::*;
use store::search::player_href;
use store::MovieId;

use crate::icons::{FaCheck, FaPlay, FaPlus, FaStar, FaXmark};
use crate::services::{use_catalog, use_services};
use crate::timer::{next_frame, sleep};
use crate::views::ModalOverlay;
use crate::Icon;

const OVERLAY_CSS: Asset = asset!("/assets/styling/overlay.css");

/// Handle for opening the overlay from anywhere under [`MovieOverlayHost`].
#[derive(Clone, Copy, PartialEq)]
pub struct OverlayHandle(Signal<Option<MovieId>>);

impl OverlayHandle {
    /// Show `id`, replacing any overlay already open.
    pub fn open(&mut self, id: MovieId) {
        self.0.set(Some(id));
    }

    pub fn close(&mut self) {
        self.0.set(None);
    }

    pub fn current(&self) -> Option<MovieId> {
        (self.0)()
    }
}

pub fn use_overlay() -> Option<OverlayHandle> {
    try_use_context::<OverlayHandle>()
}

/// Provides [`OverlayHandle`] to its children and renders the open overlay.
#[component]
pub fn MovieOverlayHost(children: Element) -> Element {
    let mut handle = use_context_provider(|| OverlayHandle(Signal::new(None)));

    rsx! {
        {children}
        if let Some(id) = handle.current() {
            MovieOverlay {
                key: "{id}",
                id: id,
                on_closed: move |_| handle.close(),
            }
        }
    }
}

/// Where an open overlay is in its show/hide transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Mounted, waiting one frame before the `active` class goes on.
    #[default]
    Opening,
    Open,
    /// `active` removed; unmounts once the close delay has passed.
    Closing,
}

impl OverlayPhase {
    pub fn is_active(self) -> bool {
        self == OverlayPhase::Open
    }

    /// The first frame was painted.
    pub fn shown(&mut self) {
        if *self == OverlayPhase::Opening {
            *self = OverlayPhase::Open;
        }
    }

    /// Start closing. Returns `false` if a close is already under way, so the
    /// close button, backdrop and Escape together unmount once.
    pub fn begin_close(&mut self) -> bool {
        if *self == OverlayPhase::Closing {
            return false;
        }
        *self = OverlayPhase::Closing;
        true
    }
}

/// Let the closing transition run for `delay`, then report the overlay gone.
pub async fn finish_close(delay: Duration, on_closed: impl FnOnce()) {
    sleep(delay).await;
    on_closed();
}

/// Label, icon and style of the watchlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchlistButtonView {
    pub label: &'static str,
    pub in_watchlist: bool,
    pub class: &'static str,
}

impl WatchlistButtonView {
    pub fn new(in_watchlist: bool) -> Self {
        if in_watchlist {
            Self {
                label: "Usuń z listy",
                in_watchlist,
                class: "btn btn-primary watchlist-button",
            }
        } else {
            Self {
                label: "Dodaj do listy",
                in_watchlist,
                class: "btn btn-secondary watchlist-button",
            }
        }
    }
}

#[component]
pub fn MovieOverlay(id: MovieId, on_closed: EventHandler<()>) -> Element {
    let services = use_services();
    let catalog = use_catalog();
    let mut phase = use_signal(OverlayPhase::default);
    let mut in_watchlist = use_signal(|| services.watchlist.is_in_watchlist(id));

    let close_delay = services.config.overlay.close_delay();
    let mut close = move || {
        if phase.write().begin_close() {
            spawn(finish_close(close_delay, move || on_closed.call(())));
        }
    };

    let Some(movie) = catalog.read().get(id).cloned() else {
        tracing::warn!("No movie at index {id}, closing overlay");
        spawn(async move { on_closed.call(()) });
        return rsx! {};
    };

    let watchlist = services.watchlist.clone();
    let toggle_watchlist = move |evt: MouseEvent| {
        evt.prevent_default();
        in_watchlist.set(watchlist.toggle(id));
    };

    let button = WatchlistButtonView::new(in_watchlist());
    let play_href = player_href(id);
    let overlay_class = if phase().is_active() {
        "movie-details-overlay active"
    } else {
        "movie-details-overlay"
    };

    rsx! {
        document::Stylesheet { href: OVERLAY_CSS }

        ModalOverlay {
            class: overlay_class,
            on_close: move |_| close(),
            on_mounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
                next_frame().await;
                phase.write().shown();
            },
            div {
                class: "movie-details-content",
                "data-movie-id": "{id}",
                button {
                    class: "movie-details-close",
                    onclick: move |_| close(),
                    Icon { icon: FaXmark, width: 20, height: 20 }
                }
                div {
                    class: "movie-details-header",
                    img {
                        class: "movie-details-poster",
                        src: "{movie.image_url}",
                        alt: "{movie.title}",
                    }
                    div {
                        class: "movie-details-info",
                        h1 { class: "movie-details-title", "{movie.title}" }
                        div {
                            class: "movie-details-meta",
                            span { class: "movie-details-genre", "{movie.genre}" }
                            span {
                                class: "movie-details-rating",
                                Icon { class: "star-icon", icon: FaStar, width: 14, height: 14 }
                                span { "{movie.rating}" }
                            }
                        }
                        p { class: "movie-details-description", "{movie.description}" }
                        div {
                            class: "movie-details-actions",
                            a {
                                class: "btn btn-primary play-button",
                                href: "{play_href}",
                                Icon { icon: FaPlay, width: 14, height: 14 }
                                span { "Odtwórz film" }
                            }
                            button {
                                class: button.class,
                                onclick: toggle_watchlist,
                                if button.in_watchlist {
                                    Icon { icon: FaCheck, width: 14, height: 14 }
                                } else {
                                    Icon { icon: FaPlus, width: 14, height: 14 }
                                }
                                span { "{button.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_overlay_becomes_active_after_first_frame() {
        let mut phase = OverlayPhase::default();
        assert!(!phase.is_active());
        phase.shown();
        assert!(phase.is_active());
    }

    #[test]
    fn test_repeated_close_triggers_close_once() {
        let mut phase = OverlayPhase::Open;
        assert!(phase.begin_close());
        assert!(!phase.is_active());
        assert!(!phase.begin_close());

        // A late first frame does not bring it back.
        phase.shown();
        assert_eq!(phase, OverlayPhase::Closing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmounts_only_after_close_delay() {
        let delay = store::config::OverlayConfig::default().close_delay();
        let start = Instant::now();
        let mut closed_at = None;

        finish_close(delay, || closed_at = Some(Instant::now())).await;

        assert_eq!(closed_at.map(|t| t - start), Some(Duration::from_millis(300)));
    }

    #[test]
    fn test_watchlist_button_reflects_membership() {
        let added = WatchlistButtonView::new(true);
        assert_eq!(added.label, "Usuń z listy");
        assert!(added.class.contains("btn-primary"));

        let missing = WatchlistButtonView::new(false);
        assert_eq!(missing.label, "Dodaj do listy");
        assert!(missing.class.contains("btn-secondary"));
    }
}
