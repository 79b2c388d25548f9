//! Listing page for `/movies?search=<term>`: every match, no cap.

use dioxus::prelude::*;
use store::search::filter;
use ui::{use_catalog, MovieGrid};

#[component]
pub fn Movies(search: String) -> Element {
    let catalog = use_catalog();
    let term = search.trim().to_string();
    let hits = catalog
        .read()
        .movies()
        .map(|movies| filter(movies, &term, usize::MAX));

    let Some(hits) = hits else {
        return rsx! {
            p { class: "muted", "Filmy nie zostały jeszcze załadowane..." }
        };
    };
    let count = hits.len();

    rsx! {
        if term.is_empty() {
            h1 { "Wszystkie filmy" }
        } else {
            h1 { "Wyniki wyszukiwania dla: \"{term}\" ({count})" }
        }

        if hits.is_empty() {
            p { class: "muted", "Nie znaleziono filmów dla: \"{term}\"" }
        } else {
            MovieGrid { hits }
        }
    }
}
