use dioxus::prelude::*;

#[component]
pub fn Privacy() -> Element {
    rsx! {
        h1 { "Polityka prywatności" }
        p {
            "Serwis zapisuje w Twojej przeglądarce trzy pliki cookie: sesję logowania (7 dni), "
            "listę filmów do obejrzenia (365 dni) oraz informację o zamknięciu komunikatu o cookies (7 dni)."
        }
        p { "Dane te nie są wysyłane do żadnego serwera." }
    }
}
