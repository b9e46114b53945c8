//! Transient phonebook notification
//!
//! Shows a temporary banner after a mutation, e.g. "Ada has been added to
//! the phonebook" or the stale-record error after a failed update.
//! Auto-dismisses after a few seconds or on click.

use dioxus::prelude::*;

use crate::infrastructure::{sleep_ms, spawn_task};
use crate::presentation::state::{use_contacts_state, NOTIFICATION_DISMISS_MS};

/// Notification banner component
#[component]
pub fn NotificationToast() -> Element {
    let state = use_contacts_state();
    let notification = state.notification.read().clone();

    // Auto-dismiss timer; reruns whenever the notification signal changes.
    let state_dismiss = state.clone();
    use_effect(move || {
        let shown = state_dismiss.notification.read().clone();
        if shown.is_some() {
            let mut state = state_dismiss.clone();
            spawn_task(async move {
                sleep_ms(NOTIFICATION_DISMISS_MS).await;
                // A newer notification restarts the clock; only clear our own.
                if *state.notification.peek() == shown {
                    state.clear_notification();
                }
            });
        }
    });

    let state_click = state.clone();

    rsx! {
        if let Some(ref data) = notification {
            div {
                class: "notification {data.kind.css_class()}",
                onclick: move |_| {
                    let mut state = state_click.clone();
                    state.clear_notification();
                },
                "{data.message}"
            }
        }
    }
}
