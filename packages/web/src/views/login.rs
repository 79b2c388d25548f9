//! Login page view with an email/password form.

use dioxus::prelude::*;
use api::AuthClient;
use ui::{go_to, refresh_auth, use_auth, use_services};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in
    if auth().user.is_some() {
        go_to("/account");
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = services.session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match AuthClient::new().login(&email(), &password()).await {
                Ok(user) => {
                    session.set(&user);
                    refresh_auth(&mut auth, &session);
                    go_to("/");
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_login,

            h1 { "Zaloguj się" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            input {
                r#type: "email",
                placeholder: "E-mail",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Hasło",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Logowanie..." } else { "Zaloguj" }
            }

            p {
                class: "muted",
                "Nie masz konta? "
                a { href: "/register", "Zarejestruj się" }
            }
        }
    }
}
