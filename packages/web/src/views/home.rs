use dioxus::prelude::*;
use store::search::filter;
use ui::{use_catalog, MovieGrid};

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let hits = catalog
        .read()
        .movies()
        .map(|movies| filter(movies, "", usize::MAX));

    rsx! {
        section {
            class: "hero",
            h1 { "FilmHaven" }
            p { class: "muted", "Kliknij plakat, aby zobaczyć szczegóły i dodać film do swojej listy." }
        }

        {match hits {
            Some(hits) => rsx! { MovieGrid { hits } },
            None => rsx! { p { class: "muted", "Ładowanie filmów..." } },
        }}
    }
}
