//! Registration page view with email/password form.

use dioxus::prelude::*;
use api::AuthClient;
use ui::{go_to, use_auth};

/// Register page component.
///
/// Registration does not log the user in; on success the page says so and
/// points to the login form.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut registered = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth().user.is_some() {
        go_to("/account");
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if password() != confirm_password() {
                error.set(Some("Hasła nie są takie same".to_string()));
                return;
            }

            loading.set(true);
            let result = AuthClient::new()
                .register(&email(), &password(), &name())
                .await;
            loading.set(false);
            match result {
                Ok(user) => registered.set(Some(user.email)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    if let Some(email) = registered() {
        return rsx! {
            div {
                class: "auth-form",
                div { class: "form-success", "Konto {email} zostało utworzone." }
                a { class: "btn btn-primary", href: "/login", "Przejdź do logowania" }
            }
        };
    }

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_register,

            h1 { "Utwórz konto" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            input {
                r#type: "text",
                placeholder: "Imię i nazwisko",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                r#type: "email",
                placeholder: "E-mail",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Hasło (min. 8 znaków)",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Powtórz hasło",
                value: confirm_password(),
                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Tworzenie konta..." } else { "Zarejestruj się" }
            }

            p {
                class: "muted",
                "Masz już konto? "
                a { href: "/login", "Zaloguj się" }
            }
        }
    }
}
