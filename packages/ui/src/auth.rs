//! Authentication context and the controls that reflect it.
//!
//! [`AuthProvider`] reads the session cookie once on mount. The controls
//! below only render what [`AuthView`] derives from that state; after a login
//! or logout in the same page call [`refresh_auth`] (logout reloads the page
//! anyway).

use dioxus::prelude::*;
use store::{SessionRecord, SessionStore};

use crate::icons::{FaCircleUser, FaRightToBracket};
use crate::nav::go_to;
use crate::services::use_services;
use crate::Icon;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionRecord>,
}

/// Which icon the navbar auth button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthIcon {
    UserCircle,
    LogIn,
}

/// What the auth controls should display for a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthView {
    pub show_login: bool,
    pub show_logout: bool,
    /// The session's login, empty when logged out.
    pub username: String,
    pub account_href: &'static str,
    pub icon: AuthIcon,
}

impl AuthView {
    pub fn from_session(user: Option<&SessionRecord>) -> Self {
        match user {
            Some(user) => Self {
                show_login: false,
                show_logout: true,
                username: user.login.clone(),
                account_href: "/account",
                icon: AuthIcon::UserCircle,
            },
            None => Self {
                show_login: true,
                show_logout: false,
                username: String::new(),
                account_href: "/login",
                icon: AuthIcon::LogIn,
            },
        }
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Re-read the session cookie into `state`.
pub fn refresh_auth(state: &mut Signal<AuthState>, session: &SessionStore) {
    let user = session.get();
    if state.peek().user != user {
        state.set(AuthState { user });
    }
}

/// Provider component that exposes the session as `Signal<AuthState>`.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let services = use_services();
    let auth_state = use_signal(|| AuthState {
        user: services.session.get(),
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Link to the login page, shown only while logged out.
#[component]
pub fn LoginButton(
    #[props(default = "Zaloguj się".to_string())] label: String,
    #[props(default = "login-button".to_string())] class: String,
) -> Element {
    let auth = use_auth();
    let view = AuthView::from_session(auth().user.as_ref());

    rsx! {
        a {
            class: "{class}",
            href: "/login",
            style: if view.show_login { "display: block" } else { "display: none" },
            "{label}"
        }
    }
}

/// Button to log out the current user, shown only while logged in.
#[component]
pub fn LogoutButton(
    #[props(default = "Wyloguj".to_string())] label: String,
    #[props(default = "logout-button".to_string())] class: String,
) -> Element {
    let services = use_services();
    let mut auth_state = use_auth();
    let view = AuthView::from_session(auth_state().user.as_ref());

    let onclick = move |_| {
        api::logout(&services.session);
        auth_state.set(AuthState::default());
        go_to("/");
    };

    rsx! {
        button {
            id: "logoutBtn",
            class: "{class}",
            style: if view.show_logout { "display: block" } else { "display: none" },
            onclick: onclick,
            "{label}"
        }
    }
}

/// The logged-in user's login, or nothing.
#[component]
pub fn UserLogin() -> Element {
    let auth = use_auth();
    let view = AuthView::from_session(auth().user.as_ref());

    rsx! {
        span { class: "user-login", "{view.username}" }
    }
}

/// Icon link to the account page (logged in) or the login page (logged out).
#[component]
pub fn AuthButton() -> Element {
    let auth = use_auth();
    let view = AuthView::from_session(auth().user.as_ref());

    rsx! {
        a {
            class: "auth-button",
            href: view.account_href,
            {match view.icon {
                AuthIcon::UserCircle => rsx! { Icon { icon: FaCircleUser, width: 20, height: 20 } },
                AuthIcon::LogIn => rsx! { Icon { icon: FaRightToBracket, width: 20, height: 20 } },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_view() {
        let view = AuthView::from_session(None);
        assert!(view.show_login);
        assert!(!view.show_logout);
        assert_eq!(view.username, "");
        assert_eq!(view.account_href, "/login");
        assert_eq!(view.icon, AuthIcon::LogIn);
    }

    #[test]
    fn test_logged_in_view() {
        let user = SessionRecord {
            id: 6.into(),
            login: "Naterek".to_string(),
            email: "bres.maksymilian@wp.pl".to_string(),
        };
        let view = AuthView::from_session(Some(&user));
        assert!(!view.show_login);
        assert!(view.show_logout);
        assert_eq!(view.username, "Naterek");
        assert_eq!(view.account_href, "/account");
        assert_eq!(view.icon, AuthIcon::UserCircle);
    }

    #[test]
    fn test_record_without_login_still_shows_logout() {
        let user = SessionRecord {
            id: "u-6".into(),
            ..Default::default()
        };
        let view = AuthView::from_session(Some(&user));
        assert!(view.show_logout);
        assert_eq!(view.username, "");
        assert_eq!(view.account_href, "/account");
    }
}
