//! Account page: who is logged in and what is on their watchlist.

use dioxus::prelude::*;
use store::search::player_href;
use ui::{use_auth, use_catalog, use_services, LogoutButton};

#[component]
pub fn Account() -> Element {
    let services = use_services();
    let auth = use_auth();
    let catalog = use_catalog();

    let Some(user) = auth().user else {
        return rsx! {
            h1 { "Moje konto" }
            p { class: "muted", "Nie jesteś zalogowany." }
            a { class: "btn btn-primary", href: "/login", "Zaloguj się" }
        };
    };

    let titles: Vec<(String, String)> = {
        let catalog = catalog.read();
        services
            .watchlist
            .get()
            .into_iter()
            .map(|id| {
                let title = catalog
                    .get(id)
                    .map(|m| m.title.clone())
                    .unwrap_or_else(|| format!("Film #{id}"));
                (player_href(id), title)
            })
            .collect()
    };

    rsx! {
        h1 { "Moje konto" }
        p { "Login: " strong { "{user.login}" } }
        if !user.email.is_empty() {
            p { "E-mail: {user.email}" }
        }

        h2 { "Moja lista" }
        if titles.is_empty() {
            p { class: "muted", "Twoja lista jest pusta." }
        } else {
            ul {
                class: "watchlist",
                for (href, title) in titles {
                    li { key: "{href}", a { href: "{href}", "{title}" } }
                }
            }
        }

        LogoutButton { class: "btn btn-secondary" }
    }
}
