//! Filter input for narrowing the contact list by name.

use dioxus::prelude::*;

use crate::presentation::state::use_contacts_state;

/// Controlled input bound to the shared name filter.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_contacts_state();
    let filter = state.filter.read().clone();

    rsx! {
        p {
            class: "filter-bar",
            "Filter shown with "
            input {
                r#type: "text",
                value: "{filter}",
                oninput: move |e| state.filter.set(e.value()),
            }
        }
    }
}
