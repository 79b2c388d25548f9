//! Navbar search: a toggle that opens a text box, a debounced filter and a
//! results dropdown.
//!
//! [`SearchPanel`] is the whole state machine. While closed nothing is
//! rendered except the toggle; while open the input is shown and at most one
//! dropdown exists, because showing a new outcome replaces the previous one.

use dioxus::core::Task;
use dioxus::prelude::*;
use store::search::{listing_href, player_href, search};
use store::{MovieId, SearchHit, SearchOutcome};

use crate::debounce::Debounce;
use crate::escape::{next_escape, release_escape};
use crate::icons::{FaMagnifyingGlass, FaXmark};
use crate::movie_overlay::OverlayHandle;
use crate::nav::go_to;
use crate::services::{use_catalog, use_services};
use crate::Icon;

const SEARCH_CSS: Asset = asset!("/assets/styling/search.css");

/// What clicking a search result does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultAction {
    /// Open the movie overlay on the current page.
    #[default]
    OpenOverlay,
    /// Go straight to the player page.
    NavigateToPlayer,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchPanel {
    #[default]
    Closed,
    Open {
        query: String,
        dropdown: Option<SearchOutcome>,
    },
}

impl SearchPanel {
    pub fn is_open(&self) -> bool {
        matches!(self, SearchPanel::Open { .. })
    }

    /// Closed → open with an empty query. Opening an open panel changes nothing.
    pub fn open(&mut self) {
        if !self.is_open() {
            *self = SearchPanel::Open {
                query: String::new(),
                dropdown: None,
            };
        }
    }

    /// Drop the input and any dropdown.
    pub fn close(&mut self) {
        *self = SearchPanel::Closed;
    }

    pub fn set_query(&mut self, value: String) {
        if let SearchPanel::Open { query, .. } = self {
            *query = value;
        }
    }

    pub fn query(&self) -> &str {
        match self {
            SearchPanel::Open { query, .. } => query,
            SearchPanel::Closed => "",
        }
    }

    /// Replace the dropdown with `outcome`. [`SearchOutcome::Cleared`] removes it.
    pub fn show(&mut self, outcome: SearchOutcome) {
        if let SearchPanel::Open { dropdown, .. } = self {
            *dropdown = match outcome {
                SearchOutcome::Cleared => None,
                other => Some(other),
            };
        }
    }

    pub fn clear_dropdown(&mut self) {
        self.show(SearchOutcome::Cleared);
    }

    pub fn dropdown(&self) -> Option<&SearchOutcome> {
        match self {
            SearchPanel::Open { dropdown, .. } => dropdown.as_ref(),
            SearchPanel::Closed => None,
        }
    }
}

/// Search toggle plus, once opened, the input and its dropdown.
///
/// On the listing page pass `dropdown: false`: that page renders the results
/// inline, so the box only submits.
#[component]
pub fn SearchBar(
    #[props(default = true)] dropdown: bool,
    #[props(default)] action: ResultAction,
) -> Element {
    let services = use_services();
    let catalog = use_catalog();
    let mut panel = use_signal(SearchPanel::default);
    let debounce = use_signal(Debounce::default);
    let mut escape_task = use_signal(|| Option::<Task>::None);

    let delay = services.config.search.debounce();
    let limit = services.config.search.max_results;

    let mut run_search = move |term: String| {
        if !dropdown {
            return;
        }
        let outcome = search(&catalog.read(), &term, limit);
        panel.write().show(outcome);
    };

    let mut close = move || {
        debounce.peek().cancel();
        if let Some(task) = escape_task.write().take() {
            task.cancel();
            release_escape();
        }
        panel.write().close();
    };

    let open = move |_: MouseEvent| {
        panel.write().open();
        if escape_task.peek().is_none() {
            let task = spawn(async move {
                let pressed = next_escape().await;
                escape_task.set(None);
                if pressed {
                    close();
                }
            });
            escape_task.set(Some(task));
        }
    };

    let oninput = move |evt: FormEvent| {
        let value = evt.value();
        panel.write().set_query(value.clone());
        let debounce = debounce.peek().clone();
        spawn(async move {
            if debounce.wait(delay).await {
                run_search(value.trim().to_string());
            }
        });
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let term = panel.read().query().trim().to_string();
        if term.is_empty() {
            return;
        }
        debounce.peek().cancel();
        run_search(term.clone());
        go_to(&listing_href(&term));
    };

    use_drop(move || {
        if escape_task.peek().is_some() {
            release_escape();
        }
    });

    let overlay = try_use_context::<OverlayHandle>();
    let on_pick = move |id: MovieId| {
        close();
        if let Some(mut overlay) = overlay.filter(|_| action == ResultAction::OpenOverlay) {
            overlay.open(id);
        } else {
            go_to(&player_href(id));
        }
    };

    let state = panel();
    let query = state.query().to_string();

    rsx! {
        document::Stylesheet { href: SEARCH_CSS }

        button {
            class: "search-toggle",
            title: "Szukaj",
            onclick: open,
            Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
        }

        if state.is_open() {
            form {
                class: "search-form",
                onsubmit: onsubmit,
                input {
                    r#type: "search",
                    class: "search-input",
                    placeholder: "Wyszukaj film...",
                    value: "{query}",
                    oninput: oninput,
                    onmounted: move |evt: MountedEvent| async move {
                        let _ = evt.set_focus(true).await;
                    },
                }
                button {
                    r#type: "button",
                    class: "search-close",
                    onclick: move |_| close(),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
            }
        }

        if let Some(outcome) = state.dropdown() {
            SearchDropdown {
                outcome: outcome.clone(),
                on_pick: on_pick,
            }
        }
    }
}

/// The single results dropdown under the navbar.
#[component]
pub fn SearchDropdown(outcome: SearchOutcome, on_pick: EventHandler<MovieId>) -> Element {
    let view_all = outcome.view_all_href();

    rsx! {
        div {
            class: "search-dropdown",
            div {
                class: "search-results",
                {match outcome {
                    SearchOutcome::Cleared => rsx! {},
                    SearchOutcome::NotLoaded => rsx! {
                        div {
                            class: "search-no-results",
                            p { "Filmy nie zostały jeszcze załadowane..." }
                        }
                    },
                    SearchOutcome::NoResults { term } => rsx! {
                        div {
                            class: "search-no-results",
                            p { "Nie znaleziono filmów dla: \"{term}\"" }
                        }
                    },
                    SearchOutcome::Results { hits, .. } => {
                        let count = hits.len();
                        rsx! {
                            div {
                                class: "search-results-header",
                                span { "Wyniki wyszukiwania ({count})" }
                            }
                            for hit in hits.iter() {
                                SearchResultRow {
                                    key: "{hit.index}",
                                    hit: hit.clone(),
                                    on_pick: on_pick,
                                }
                            }
                            if let Some(href) = view_all {
                                div {
                                    class: "search-results-footer",
                                    a { class: "view-all-results", href: "{href}", "Zobacz wszystkie wyniki" }
                                }
                            }
                        }
                    }
                }}
            }
        }
    }
}

#[component]
fn SearchResultRow(hit: SearchHit, on_pick: EventHandler<MovieId>) -> Element {
    let movie = &hit.movie;
    let index = hit.index;

    rsx! {
        div {
            class: "search-result-item",
            "data-movie-id": "{index}",
            onclick: move |_| on_pick.call(index),
            img {
                class: "search-result-poster",
                src: "{movie.image_url}",
                alt: "{movie.title}",
            }
            div {
                class: "search-result-info",
                h4 { class: "search-result-title", "{movie.title}" }
                p { class: "search-result-meta", "{movie.year} • {movie.rating}" }
                p { class: "search-result-genre", "{movie.genre}" }
            }
        }
    }
}
