//! Cabin management actions
//!
//! The "Add new cabin" and "Delete cabin" buttons each open a window in the
//! same modal scope, so only one of them is ever on screen.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use oasis_core::ModalConfig;

use super::modal::{
    Modal, ModalContentProps, ModalOpen, ModalWindow, use_modal, use_modal_opener,
};

/// Windows owned by the cabin actions scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinWindow {
    Form,
    ConfirmDelete,
}

#[component]
pub fn AddCabin(#[props(default)] config: ModalConfig) -> Element {
    rsx! {
        div { class: "cabin-actions",
            Modal::<CabinWindow> { config,
                CabinToolbar {}

                ModalWindow {
                    name: CabinWindow::Form,
                    content: move |props: ModalContentProps| rsx! {
                        CreateCabinForm { on_close_modal: props.on_close_modal }
                    },
                }
                ModalWindow {
                    name: CabinWindow::ConfirmDelete,
                    content: move |props: ModalContentProps| rsx! {
                        ConfirmDelete { resource: "cabin", on_close_modal: props.on_close_modal }
                    },
                }
            }
        }
    }
}

/// Trigger buttons, rendered apart from the windows they open
#[component]
fn CabinToolbar() -> Element {
    let modal = use_modal::<CabinWindow>("CabinToolbar");
    let form_open = modal.is_open(&CabinWindow::Form);
    let confirm_open = modal.is_open(&CabinWindow::ConfirmDelete);
    let open_confirm = use_modal_opener(CabinWindow::ConfirmDelete);

    rsx! {
        div { class: "cabin-toolbar",
            ModalOpen { opens: CabinWindow::Form,
                button {
                    class: "btn btn-primary",
                    "aria-expanded": "{form_open}",
                    "Add new cabin"
                }
            }
            button {
                class: "btn btn-danger",
                "aria-expanded": "{confirm_open}",
                onclick: move |e| open_confirm.call(e),
                "Delete cabin"
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Content
// ─────────────────────────────────────────────────────────────────────────────

/// New cabin form. Saving is handled elsewhere; this only collects input.
#[component]
pub fn CreateCabinForm(on_close_modal: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut max_capacity = use_signal(|| "2".to_string());
    let mut regular_price = use_signal(String::new);
    let mut description = use_signal(String::new);

    rsx! {
        form {
            class: "cabin-form",
            onsubmit: move |e| {
                e.prevent_default();
                tracing::info!(
                    name = %name(),
                    max_capacity = %max_capacity(),
                    regular_price = %regular_price(),
                    "cabin draft submitted"
                );
                on_close_modal.call(());
            },

            div { class: "modal-header",
                h3 { "Create New Cabin" }
            }

            div { class: "form-field",
                label { class: "form-label", "Cabin name" }
                input {
                    r#type: "text",
                    class: "input w-full",
                    value: "{name}",
                    oninput: move |e| name.set(e.value())
                }
            }

            div { class: "form-field",
                label { class: "form-label", "Maximum capacity" }
                input {
                    r#type: "number",
                    class: "input w-full",
                    value: "{max_capacity}",
                    oninput: move |e| max_capacity.set(e.value())
                }
            }

            div { class: "form-field",
                label { class: "form-label", "Regular price" }
                input {
                    r#type: "number",
                    class: "input w-full",
                    value: "{regular_price}",
                    oninput: move |e| regular_price.set(e.value())
                }
            }

            div { class: "form-field",
                label { class: "form-label", "Description" }
                textarea {
                    class: "input w-full",
                    value: "{description}",
                    oninput: move |e| description.set(e.value())
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_close_modal.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    "Create cabin"
                }
            }
        }
    }
}

#[component]
pub fn ConfirmDelete(resource: String, on_close_modal: EventHandler<()>) -> Element {
    rsx! {
        div { class: "confirm-delete",
            div { class: "modal-header",
                h3 { "Delete {resource}" }
            }
            p { "Are you sure you want to delete this {resource} permanently? This action cannot be undone." }

            div { class: "form-actions",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_close_modal.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: {
                        let resource = resource.clone();
                        move |_| {
                            tracing::info!(%resource, "delete confirmed");
                            on_close_modal.call(());
                        }
                    },
                    "Delete"
                }
            }
        }
    }
}
