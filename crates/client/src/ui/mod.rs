use dioxus::prelude::*;

pub mod presentation;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // State must be created inside an active Dioxus runtime; services are
    // provided by the composition root (see `src/main.rs`).
    use_context_provider(presentation::state::ContactsState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("assets/main.css"),
        }

        presentation::views::PhonebookView {}
    }
}
