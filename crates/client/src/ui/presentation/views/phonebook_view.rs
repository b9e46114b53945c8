//! The phonebook page.
//!
//! Owns the control flow: load the list once at startup, filter it by
//! name, branch a submit into create or confirm-then-update, and route
//! delete clicks through a confirmation. The book is patched optimistically
//! after each mutation; a failed update drops the stale record.

use dioxus::prelude::*;

use wirebook_domain::ContactId;

use crate::infrastructure::spawn_task;
use crate::presentation::components::{
    ConfirmDialog, ContactForm, ContactList, FilterBar, NotificationToast,
};
use crate::presentation::services::use_contact_service;
use crate::presentation::state::{use_contacts_state, PendingConfirm};

/// The single page of the application.
#[component]
pub fn PhonebookView() -> Element {
    let state = use_contacts_state();
    let contacts_svc = use_contact_service();

    // Form state lives here so a successful create can clear it.
    let mut new_name = use_signal(String::new);
    let mut new_number = use_signal(String::new);
    let mut saving = use_signal(|| false);

    // Startup refresh: the local book is a cached mirror of server state.
    {
        let svc = contacts_svc.clone();
        let state_for_load = state.clone();
        use_effect(move || {
            let svc = svc.clone();
            let mut state = state_for_load.clone();
            spawn_task(async move {
                match svc.list_contacts().await {
                    Ok(contacts) => {
                        tracing::debug!("Loaded {} contacts", contacts.len());
                        state.set_contacts(contacts);
                    }
                    Err(e) => tracing::error!("Failed to load contacts: {}", e),
                }
            });
        });
    }

    // Submit: an exact name match prompts for a number update, anything
    // else creates a fresh contact.
    let on_submit = {
        let svc = contacts_svc.clone();
        let state_for_submit = state.clone();
        move |_| {
            let mut state = state_for_submit.clone();
            let name = new_name.read().trim().to_string();
            let number = new_number.read().trim().to_string();

            if name.is_empty() {
                state.show_error("Name is required");
                return;
            }
            if *saving.read() {
                return;
            }

            let existing = state.book.read().find_by_name(&name).cloned();
            if let Some(existing) = existing {
                state.request_confirm(PendingConfirm::UpdateNumber {
                    existing,
                    new_number: number,
                });
                return;
            }

            let svc = svc.clone();
            saving.set(true);
            spawn_task(async move {
                match svc.create_contact(&name, &number).await {
                    Ok(created) => {
                        let display_name = created.name.clone();
                        state.insert_contact(created);
                        new_name.set(String::new());
                        new_number.set(String::new());
                        state.show_success(format!(
                            "{} has been added to the phonebook",
                            display_name
                        ));
                    }
                    Err(e) => tracing::error!("Failed to create contact: {}", e),
                }
                saving.set(false);
            });
        }
    };

    // Delete click: look the contact up and ask before touching anything.
    let on_delete = {
        let state_for_delete = state.clone();
        move |id: ContactId| {
            let mut state = state_for_delete.clone();
            let contact = state.book.read().get(&id).cloned();
            if let Some(contact) = contact {
                state.request_confirm(PendingConfirm::Delete { contact });
            }
        }
    };

    // Confirmed: run the pending mutation.
    let on_confirm = {
        let svc = contacts_svc.clone();
        let state_for_confirm = state.clone();
        move |_| {
            let mut state = state_for_confirm.clone();
            let Some(action) = state.pending.read().clone() else {
                return;
            };
            state.clear_pending();

            match action {
                PendingConfirm::UpdateNumber {
                    existing,
                    new_number,
                } => {
                    let svc = svc.clone();
                    saving.set(true);
                    spawn_task(async move {
                        match svc.update_number(&existing, &new_number).await {
                            Ok(updated) => {
                                let display_name = updated.name.clone();
                                state.apply_update(updated);
                                state.show_success(format!(
                                    "Number has been updated for {}.",
                                    display_name
                                ));
                            }
                            Err(e) => {
                                if e.is_not_found() {
                                    tracing::info!(
                                        "Contact {} was already deleted server-side",
                                        existing.id
                                    );
                                } else {
                                    tracing::error!(
                                        "Failed to update contact {}: {}",
                                        existing.id,
                                        e
                                    );
                                }
                                // The record is stale either way; drop it.
                                state.show_error(format!(
                                    "Information for '{}' has already been deleted from the server",
                                    existing.name
                                ));
                                state.remove_contact(&existing.id);
                            }
                        }
                        saving.set(false);
                    });
                }
                PendingConfirm::Delete { contact } => {
                    // Optimistic: drop locally first, then tell the server.
                    state.remove_contact(&contact.id);
                    let svc = svc.clone();
                    spawn_task(async move {
                        if let Err(e) = svc.delete_contact(&contact.id).await {
                            tracing::error!("Failed to delete contact {}: {}", contact.id, e);
                        }
                    });
                }
            }
        }
    };

    let on_cancel = {
        let state_for_cancel = state.clone();
        move |_| {
            let mut state = state_for_cancel.clone();
            state.clear_pending();
        }
    };

    let pending = state.pending.read().clone();

    rsx! {
        div {
            class: "phonebook",
            h1 { "Phonebook" }

            NotificationToast {}
            FilterBar {}

            h2 { "Add a new entry" }
            ContactForm {
                name: new_name,
                number: new_number,
                busy: saving,
                on_submit: on_submit,
            }

            h2 { "Numbers" }
            ContactList { on_delete: on_delete }

            {
                match pending {
                    Some(PendingConfirm::UpdateNumber { ref existing, .. }) => rsx! {
                        ConfirmDialog {
                            title: "Update number",
                            message: format!(
                                "{} is already in the phonebook. Would you like to update their number?",
                                existing.name
                            ),
                            confirm_label: "update",
                            on_confirm: on_confirm,
                            on_cancel: on_cancel,
                        }
                    },
                    Some(PendingConfirm::Delete { ref contact }) => rsx! {
                        ConfirmDialog {
                            title: "Delete contact",
                            message: format!("Delete {}?", contact.name),
                            confirm_label: "delete",
                            on_confirm: on_confirm,
                            on_cancel: on_cancel,
                        }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
