use dioxus::prelude::*;

use crate::auth::{AuthButton, LoginButton, LogoutButton, UserLogin};
use crate::icons::{FaBars, FaFilm};
use crate::search::{ResultAction, SearchBar};
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

const LINKS: &[(&str, &str)] = &[("/", "Strona główna"), ("/movies", "Filmy"), ("/account", "Moja lista")];

/// Site header: brand, links, search and the auth controls.
///
/// `search_dropdown: false` turns the search box into a plain submit form, for
/// pages that show results themselves.
#[component]
pub fn Navbar(
    #[props(default = true)] search_dropdown: bool,
    #[props(default)] result_action: ResultAction,
) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }

        nav {
            class: "navbar",
            a {
                class: "navbar-brand",
                href: "/",
                Icon { icon: FaFilm, width: 22, height: 22 }
                span { "FilmHaven" }
            }
            ul {
                class: "navbar-links",
                for (href, label) in LINKS.iter() {
                    li { a { href: *href, "{label}" } }
                }
            }
            div {
                class: "navbar-actions",
                SearchBar { dropdown: search_dropdown, action: result_action }
                UserLogin {}
                AuthButton {}
                button {
                    class: "mobile-menu-toggle",
                    title: "Menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    Icon { icon: FaBars, width: 20, height: 20 }
                }
            }
        }

        div {
            class: if menu_open() { "mobile-menu active" } else { "mobile-menu" },
            for (href, label) in LINKS.iter() {
                a { href: *href, onclick: move |_| menu_open.set(false), "{label}" }
            }
            LoginButton {}
            LogoutButton {}
        }
    }
}
