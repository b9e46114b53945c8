//! Entry form for adding a contact.
//!
//! The name/number signals are owned by the page so a successful create
//! can clear them; the form only renders and edits them.

use dioxus::prelude::*;

/// Props for ContactForm
#[derive(Props, Clone, PartialEq)]
pub struct ContactFormProps {
    pub name: Signal<String>,
    pub number: Signal<String>,
    /// Disables the add button while a mutation is in flight
    pub busy: ReadOnlySignal<bool>,
    pub on_submit: EventHandler<()>,
}

/// Name + number inputs and the add button.
#[component]
pub fn ContactForm(props: ContactFormProps) -> Element {
    let mut name = props.name;
    let mut number = props.number;
    let busy = props.busy;
    let on_submit = props.on_submit;

    rsx! {
        div {
            class: "contact-form",
            div {
                class: "form-row",
                label { "name: " }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }
            div {
                class: "form-row",
                label { "number: " }
                input {
                    r#type: "text",
                    value: "{number}",
                    oninput: move |e| number.set(e.value()),
                }
            }
            div {
                button {
                    class: "add-button",
                    disabled: busy(),
                    onclick: move |_| on_submit.call(()),
                    "add"
                }
            }
        }
    }
}
