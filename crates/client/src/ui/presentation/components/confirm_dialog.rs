//! Confirmation modal for overwriting or destructive actions.
//!
//! Stands in for the browser-native confirm dialog: nothing mutates until
//! the user answers. Clicking the overlay counts as cancel.

use dioxus::prelude::*;

/// Props for ConfirmDialog
#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub message: String,
    /// Label on the confirming button, e.g. "update" or "delete"
    pub confirm_label: String,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

/// Modal overlay with confirm and cancel buttons.
#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    let on_confirm = props.on_confirm;
    let on_cancel = props.on_cancel;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                onclick: |e| e.stop_propagation(),

                h2 { class: "modal-title", "{props.title}" }
                p { class: "modal-message", "{props.message}" }

                div {
                    class: "modal-actions",
                    button {
                        class: "cancel-button",
                        onclick: move |_| on_cancel.call(()),
                        "cancel"
                    }
                    button {
                        class: "confirm-button",
                        onclick: move |_| on_confirm.call(()),
                        "{props.confirm_label}"
                    }
                }
            }
        }
    }
}
