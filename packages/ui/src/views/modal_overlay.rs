use dioxus::prelude::*;

/// A full-screen backdrop around modal content.
///
/// Clicking the backdrop (but not the content) or pressing Escape triggers
/// `on_close`. The backdrop takes focus on mount so Escape reaches it.
#[component]
pub fn ModalOverlay(
    #[props(into, default = "modal-overlay".to_string())] class: String,
    on_close: EventHandler<()>,
    #[props(default)] on_mounted: EventHandler<MountedEvent>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "{class}",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onmounted: move |evt: MountedEvent| on_mounted.call(evt),
            div {
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
