//! Outside-click detection for the browser
//!
//! Registers one document-level `click` listener per mounted component and
//! invokes the handler whenever a click lands outside the bound element.
//! The registration lifecycle is the core's [`ListenerSlot`]: the listener is
//! removed on unmount and re-registered only when the requested event phase
//! changes. Handler changes are picked up in place so the listener never
//! calls a stale handler.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use oasis_core::{BoundRef, Containment, ListenPhase, ListenerHost, ListenerSlot};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// A DOM element guarded against outside clicks
#[derive(Clone)]
pub struct DomRegion(web_sys::Element);

impl DomRegion {
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }
}

impl Containment<web_sys::Event> for DomRegion {
    fn contains_target(&self, event: &web_sys::Event) -> bool {
        event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| self.0.contains(Some(&node)))
    }
}

/// Region for the element behind an `onmounted` event
pub fn mounted_region(event: &MountedEvent) -> Option<DomRegion> {
    event
        .data()
        .downcast::<web_sys::Element>()
        .cloned()
        .map(DomRegion::new)
}

/// Bind the returned region from an element's `onmounted` handler
pub fn bind_region(region: &BoundRef<DomRegion>, event: &MountedEvent) {
    if let Some(mounted) = mounted_region(event) {
        region.set(mounted);
    }
}

/// A registered document listener. Dropping it unregisters the listener.
struct DocumentListener {
    document: web_sys::Document,
    closure: Closure<dyn FnMut(web_sys::Event)>,
    phase: ListenPhase,
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback_and_bool(
            "click",
            self.closure.as_ref().unchecked_ref(),
            self.phase.is_capture(),
        );
    }
}

/// Registers outside-click listeners on the browser document
struct DocumentHost {
    region: BoundRef<DomRegion>,
    handler: Rc<RefCell<EventHandler<()>>>,
}

impl ListenerHost for DocumentHost {
    type Registration = DocumentListener;

    fn register(&self, phase: ListenPhase) -> Option<DocumentListener> {
        let document = web_sys::window()?.document()?;

        let region = self.region.clone();
        let handler = Rc::clone(&self.handler);
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if region.is_outside(&event) {
                let handler = *handler.borrow();
                handler.call(());
            }
        });

        document
            .add_event_listener_with_callback_and_bool(
                "click",
                closure.as_ref().unchecked_ref(),
                phase.is_capture(),
            )
            .ok()?;

        Some(DocumentListener {
            document,
            closure,
            phase,
        })
    }

    fn unregister(&self, listener: DocumentListener) {
        drop(listener);
    }
}

struct OutsideClickHook {
    listener: RefCell<ListenerSlot<DocumentHost>>,
}

impl OutsideClickHook {
    fn new(handler: EventHandler<()>) -> Self {
        Self {
            listener: RefCell::new(ListenerSlot::new(DocumentHost {
                region: BoundRef::new(),
                handler: Rc::new(RefCell::new(handler)),
            })),
        }
    }

    fn region(&self) -> BoundRef<DomRegion> {
        self.listener.borrow().host().region.clone()
    }

    fn refresh(&self, handler: EventHandler<()>, phase: ListenPhase) {
        let mut listener = self.listener.borrow_mut();
        *listener.host().handler.borrow_mut() = handler;

        listener.ensure(phase);
        if !listener.is_registered() {
            tracing::warn!("no document available, outside clicks will not be detected");
        }
    }

    fn detach(&self) {
        self.listener.borrow_mut().release();
    }
}

/// Invoke `handler` for clicks outside the element bound to the returned region.
///
/// `listen_capturing` selects the capture phase (the default everywhere in
/// this crate), so the check runs before any inner element's own click
/// handler. Until an element is bound, clicks are ignored.
pub fn use_outside_click(handler: EventHandler<()>, listen_capturing: bool) -> BoundRef<DomRegion> {
    let phase = ListenPhase::from_capturing(listen_capturing);
    let hook = use_hook(|| Rc::new(OutsideClickHook::new(handler)));
    hook.refresh(handler, phase);

    use_drop({
        let hook = Rc::clone(&hook);
        move || hook.detach()
    });

    hook.region()
}
