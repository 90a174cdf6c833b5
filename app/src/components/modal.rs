//! Singleton modal manager for the admin UI.
//!
//! Compound components sharing one open-window slot through context:
//!
//! ```ignore
//! Modal::<CabinWindow> {
//!     ModalOpen { opens: CabinWindow::Form,
//!         button { "Add new cabin" }
//!     }
//!     ModalWindow {
//!         name: CabinWindow::Form,
//!         content: move |props: ModalContentProps| rsx! {
//!             CreateCabinForm { on_close_modal: props.on_close_modal }
//!         },
//!     }
//! }
//! ```
//!
//! Triggers and windows are matched only by name, so they can sit anywhere
//! under the same `Modal`. Opening a window closes whichever one was open.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use dioxus_logger::tracing;
use oasis_core::{
    ModalConfig, ModalError, OverlayState, OverlayStore, WindowBinding, WindowName, WindowPhase,
};
use wasm_bindgen::JsCast;

use super::outside_click::{DomRegion, mounted_region, use_outside_click};

/// Shared open-window state of one manager scope.
///
/// Access via `use_modal()` from any component under a `Modal`.
pub struct ModalManager<N: 'static> {
    state: Signal<OverlayState<N>>,
    config: Signal<ModalConfig>,
}

impl<N: 'static> Clone for ModalManager<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: 'static> Copy for ModalManager<N> {}

impl<N: WindowName> ModalManager<N> {
    fn new(config: ModalConfig) -> Self {
        Self {
            state: Signal::new(OverlayState::new()),
            config: Signal::new(config),
        }
    }

    /// Name of the open window. Subscribes the calling component.
    pub fn open_name(&self) -> Option<N> {
        self.state.read().open_name().cloned()
    }

    pub fn is_open(&self, name: &N) -> bool {
        self.state.read().is_open(name)
    }

    /// Open `name`, closing any other window. No-op if it is already open.
    pub fn open(&self, name: N) {
        self.open_window(name);
    }

    /// Close the open window. No-op if nothing is open.
    pub fn close(&self) {
        self.close_window();
    }

    pub fn config(&self) -> ModalConfig {
        self.config.read().clone()
    }

    /// Bring a window's binding up to date with the scope state
    fn sync_binding<R>(&self, binding: &mut WindowBinding<N, R>) -> Option<WindowPhase> {
        let state = self.state.read();
        binding.sync(&state)
    }
}

/// Only effective changes write the signal, so idempotent calls re-render nothing
impl<N: WindowName> OverlayStore<N> for ModalManager<N> {
    fn peek_state(&self) -> OverlayState<N> {
        OverlayState::clone(&self.state.peek())
    }

    fn write_state(&self, state: OverlayState<N>) {
        let mut signal = self.state;
        signal.set(state);
    }
}

/// Initialize a modal manager scope.
///
/// Call this once in the component that owns the scope, before any children
/// that open or render windows. `Modal` does this for you.
pub fn use_modal_provider<N: WindowName>(config: ModalConfig) -> ModalManager<N> {
    use_context_provider(move || ModalManager::new(config))
}

/// Get the nearest modal manager for window names of type `N`.
///
/// # Panics
/// If no `Modal::<N>` encloses the calling component. `component` names the
/// caller in the message.
pub fn use_modal<N: WindowName>(component: &'static str) -> ModalManager<N> {
    try_use_context::<ModalManager<N>>()
        .unwrap_or_else(|| panic!("{}", ModalError::OutsideScope { component }))
}

/// Click handler that opens `opens`, for attaching to your own element
/// instead of wrapping it in `ModalOpen`.
pub fn use_modal_opener<N: WindowName>(opens: N) -> EventHandler<MouseEvent> {
    let modal = use_modal::<N>("ModalOpen");
    use_callback(move |_: MouseEvent| modal.open(opens.clone()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Components
// ─────────────────────────────────────────────────────────────────────────────

/// Props for the Modal scope component
#[derive(Props, Clone, PartialEq)]
pub struct ModalProps<N: WindowName> {
    /// Behavior settings shared by every window in this scope
    #[props(default)]
    pub config: ModalConfig,
    pub children: Element,
    #[props(default)]
    names: PhantomData<N>,
}

/// Modal manager scope. Windows and triggers for names of type `N` must be
/// rendered somewhere inside it. Nested scopes are independent.
#[component]
pub fn Modal<N: WindowName>(props: ModalProps<N>) -> Element {
    use_modal_provider::<N>(props.config.clone());

    rsx! {
        {props.children}
    }
}

/// Makes its child open the window `opens` when clicked. Pass exactly one child.
///
/// The child is wrapped in a `span` with `display: contents`, so it adds no
/// box to the layout but is still a node in the DOM. When that matters
/// (selectors like `:first-child` or `button > span`), attach
/// [`use_modal_opener`] to your own element instead.
#[component]
pub fn ModalOpen<N: WindowName>(opens: N, children: Element) -> Element {
    let open = use_modal_opener(opens);

    rsx! {
        span {
            class: "modal-open",
            style: "display: contents",
            onclick: move |e| open.call(e),
            {children}
        }
    }
}

/// Injected into a window's content
#[derive(Clone, PartialEq)]
pub struct ModalContentProps {
    /// Closes the window (the scope's `close`)
    pub on_close_modal: EventHandler<()>,
}

/// A named window. Renders nothing unless `name` is the open window; then
/// renders `content` in the overlay layer with a close control, and closes on
/// clicks outside the window or on Escape.
#[component]
pub fn ModalWindow<N: WindowName>(
    name: N,
    content: Callback<ModalContentProps, Element>,
) -> Element {
    let modal = use_modal::<N>("ModalWindow");
    let config = modal.config();
    let close = use_callback(move |_: ()| modal.close());
    let region = use_outside_click(close, config.listen_capturing);
    let layer_id = use_hook(|| unique_layer_id(&config.layer_id));

    let binding: Rc<RefCell<WindowBinding<N, DomRegion>>> =
        use_hook(|| Rc::new(RefCell::new(WindowBinding::new(name.clone(), region))));
    binding.borrow_mut().rename(name.clone());
    if let Some(phase) = modal.sync_binding(&mut binding.borrow_mut()) {
        tracing::debug!(?name, ?phase, "modal window phase changed");
    }

    if !binding.borrow().is_shown() {
        return rsx! {};
    }

    let close_label = config.close_label;

    rsx! {
        OverlayLayer { layer_id, z_index: config.z_index, on_dismiss: close,
            div {
                class: "modal-window",
                onmounted: move |e: MountedEvent| {
                    if let Some(mounted) = mounted_region(&e) {
                        binding.borrow().bind(mounted);
                    }
                },

                button {
                    class: "modal-close",
                    r#type: "button",
                    "aria-label": "{close_label}",
                    onclick: move |_| close.call(()),
                    "×"
                }
                div { class: "modal-body",
                    {content.call(ModalContentProps { on_close_modal: close })}
                }
            }
        }
    }
}

static NEXT_LAYER: AtomicU64 = AtomicU64::new(0);

/// DOM id for one window's layer: `base` plus a per-window suffix, so two
/// windows sharing a name never share an id
fn unique_layer_id(base: &str) -> String {
    let n = NEXT_LAYER.fetch_add(1, Ordering::Relaxed);
    format!("{base}-{n}")
}

/// Top-level overlay layer.
///
/// A `<dialog>` opened with `showModal()`, which puts it in the browser's top
/// layer above all normal content whatever its ancestors' stacking contexts.
/// It covers the viewport; `::backdrop` dims the page behind it. Escape calls
/// `on_dismiss` instead of letting the browser close the dialog on its own.
#[component]
pub fn OverlayLayer(
    layer_id: String,
    z_index: u32,
    on_dismiss: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        dialog {
            id: "{layer_id}",
            class: "modal-backdrop",
            style: "z-index: {z_index};",
            onmounted: move |e: MountedEvent| show_in_top_layer(&e),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    e.prevent_default();
                    on_dismiss.call(());
                }
            },
            {children}
        }
    }
}

fn show_in_top_layer(event: &MountedEvent) {
    let Some(element) = event.data().downcast::<web_sys::Element>().cloned() else {
        return;
    };
    let Some(dialog) = element.dyn_ref::<web_sys::HtmlDialogElement>() else {
        return;
    };
    if !dialog.open()
        && let Err(err) = dialog.show_modal()
    {
        // Falls back to a plain fixed layer stacked by `z-index`
        tracing::warn!(?err, "top layer unavailable, showing modal layer in place");
        dialog.set_open(true);
    }
}
