//! Cookie-consent banner.
//!
//! Shown on every page load until dismissed. Dismissal writes the consent
//! cookie right away and fades the banner out before hiding it.

use dioxus::core::Task;
use dioxus::prelude::*;
use store::config::FadeConfig;
use store::{ConsentStore, Fade};

use crate::animation::spawn_fade;
use crate::services::use_services;

const COOKIE_POPUP_CSS: Asset = asset!("/assets/styling/cookie_popup.css");

/// The fade to run on page load, or `None` when the banner was dismissed.
pub fn banner_plan(consent: &ConsentStore, fade: &FadeConfig) -> Option<Fade> {
    consent.should_show().then(|| Fade::fade_in(fade))
}

/// Fade from wherever a fade-in got to down to fully hidden.
pub fn dismiss_fade(current: f32, fade: &FadeConfig) -> Fade {
    Fade::new(current, 0.0, fade.duration(), fade.frame())
}

#[component]
pub fn CookiePopup() -> Element {
    let services = use_services();
    let plan = use_hook(|| banner_plan(&services.consent, &services.config.fade));
    let mut visible = use_signal(|| plan.is_some());
    let opacity = use_signal(|| 0.0_f32);
    let mut fade_task = use_signal(|| Option::<Task>::None);

    use_hook(move || {
        if let Some(fade) = plan {
            fade_task.set(Some(spawn_fade(fade, opacity, || {})));
        }
    });

    use_drop(move || {
        if let Some(task) = fade_task.peek().as_ref() {
            task.cancel();
        }
    });

    let consent = services.consent.clone();
    let fade_config = services.config.fade.clone();
    let dismiss = move |_| {
        consent.dismiss();
        if let Some(task) = fade_task.write().take() {
            task.cancel();
        }
        let fade = dismiss_fade(*opacity.peek(), &fade_config);
        fade_task.set(Some(spawn_fade(fade, opacity, move || visible.set(false))));
    };

    if !visible() {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: COOKIE_POPUP_CSS }

        div {
            id: "cookiePopup",
            class: "cookie-popup",
            style: "opacity: {opacity}; display: block;",
            p { class: "cookie-popup-title", "Cookies." }
            p {
                class: "cookie-popup-text",
                "Ta strona wykorzystuje pliki cookie do przechowywania listy filmów do obejrzenia i poprawy funkcjonalności serwisu. "
                a { href: "/privacy", "Dowiedz się więcej" }
            }
            button {
                class: "btn btn-primary cookie-popup-button",
                onclick: dismiss,
                "Ok!"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use store::config::CookieConfig;
    use store::{CookieJar, MemoryCookieJar};

    #[test]
    fn test_banner_shown_until_dismissed() {
        let jar = MemoryCookieJar::new();
        let consent = ConsentStore::new(Arc::new(jar.clone()), &CookieConfig::default());
        let fade = FadeConfig::default();

        assert_eq!(banner_plan(&consent, &fade), Some(Fade::fade_in(&fade)));

        consent.dismiss();
        assert_eq!(jar.get("cookiePopupDismiss").unwrap().as_deref(), Some("1"));
        assert_eq!(banner_plan(&consent, &fade), None);
    }

    #[test]
    fn test_dismiss_mid_fade_starts_from_current_opacity() {
        let fade = dismiss_fade(0.4, &FadeConfig::default());
        assert_eq!(fade.opacity_at(0), 0.4);
        assert_eq!(fade.frames().last(), Some(0.0));
    }
}
