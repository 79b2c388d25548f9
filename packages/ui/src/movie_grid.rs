//! Poster grid used by the home and listing pages.

use dioxus::prelude::*;
use store::search::player_href;
use store::SearchHit;

use crate::icons::FaStar;
use crate::movie_overlay::use_overlay;
use crate::nav::go_to;
use crate::search::ResultAction;
use crate::Icon;

#[component]
pub fn MovieGrid(hits: Vec<SearchHit>, #[props(default)] action: ResultAction) -> Element {
    rsx! {
        div {
            class: "movie-grid",
            for hit in hits.iter() {
                MovieCard { key: "{hit.index}", hit: hit.clone(), action: action }
            }
        }
    }
}

/// One poster. Clicking it behaves like picking a search result.
#[component]
pub fn MovieCard(hit: SearchHit, #[props(default)] action: ResultAction) -> Element {
    let overlay = use_overlay();
    let index = hit.index;
    let movie = &hit.movie;

    let onclick = move |_| match overlay.filter(|_| action == ResultAction::OpenOverlay) {
        Some(mut overlay) => overlay.open(index),
        None => go_to(&player_href(index)),
    };

    rsx! {
        div {
            class: "movie-card",
            "data-movie-id": "{index}",
            onclick: onclick,
            img { class: "movie-card-poster", src: "{movie.image_url}", alt: "{movie.title}" }
            div {
                class: "movie-card-info",
                h3 { class: "movie-card-title", "{movie.title}" }
                p {
                    class: "movie-card-meta",
                    "{movie.year} • {movie.genre} • "
                    Icon { icon: FaStar, width: 12, height: 12 }
                    " {movie.rating}"
                }
            }
        }
    }
}
