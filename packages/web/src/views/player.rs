use dioxus::prelude::*;
use store::MovieId;
use ui::icons::{FaCheck, FaPlay, FaPlus};
use ui::{use_catalog, use_services, Icon, WatchlistButtonView};

#[component]
pub fn Player(id: String) -> Element {
    let services = use_services();
    let catalog = use_catalog();
    let id = id.trim().parse::<MovieId>().ok();
    let mut in_watchlist = use_signal(|| id.is_some_and(|id| services.watchlist.is_in_watchlist(id)));

    let Some((id, movie)) = id.and_then(|id| catalog.read().get(id).cloned().map(|m| (id, m))) else {
        return rsx! {
            div {
                class: "player",
                h1 { "Nie znaleziono filmu" }
                a { class: "btn btn-secondary", href: "/", "Wróć na stronę główną" }
            }
        };
    };

    let watchlist = services.watchlist.clone();
    let button = WatchlistButtonView::new(in_watchlist());

    rsx! {
        div {
            class: "player",
            div {
                class: "player-screen",
                style: "background-image: url('{movie.image_url}')",
                Icon { icon: FaPlay, width: 48, height: 48 }
            }
            h1 { "{movie.title}" }
            p { class: "muted", "{movie.year} • {movie.genre} • {movie.rating}" }
            p { "{movie.description}" }
            button {
                class: button.class,
                onclick: move |_| in_watchlist.set(watchlist.toggle(id)),
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
