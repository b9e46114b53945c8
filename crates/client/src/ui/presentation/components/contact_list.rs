//! Contact list filtered by the shared name filter.

use dioxus::prelude::*;

use wirebook_domain::{Contact, ContactId};

use crate::presentation::state::use_contacts_state;

/// Props for ContactList
#[derive(Props, Clone, PartialEq)]
pub struct ContactListProps {
    pub on_delete: EventHandler<ContactId>,
}

/// Renders the filtered view of the contact book.
#[component]
pub fn ContactList(props: ContactListProps) -> Element {
    let state = use_contacts_state();
    let filter = state.filter.read().clone();
    let contacts = state.book.read().filtered(&filter);

    rsx! {
        div {
            class: "contact-list",
            for contact in contacts {
                ContactRow {
                    key: "{contact.id}",
                    contact: contact.clone(),
                    on_delete: props.on_delete,
                }
            }
        }
    }
}

/// Props for ContactRow
#[derive(Props, Clone, PartialEq)]
pub struct ContactRowProps {
    pub contact: Contact,
    pub on_delete: EventHandler<ContactId>,
}

/// One name/number line with its delete button.
#[component]
pub fn ContactRow(props: ContactRowProps) -> Element {
    let id = props.contact.id.clone();
    let on_delete = props.on_delete;

    rsx! {
        p {
            class: "contact-row",
            span { class: "contact-name", "{props.contact.name}" }
            " "
            span { class: "contact-number", "{props.contact.number}" }
            button {
                class: "delete-button",
                onclick: move |_| on_delete.call(id.clone()),
                "delete"
            }
        }
    }
}
