//! Outside-click detection
//!
//! A detector owns one document-level listener and a [`BoundRef`] naming the
//! region it guards. Every interaction whose target is not inside the bound
//! region invokes the handler. While nothing is bound the detector is inert.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::listener::{ListenerHost, ListenerSlot};
use super::{ListenPhase, ListenerId, NodeId, PointerEvent, PointerHub};

/// A region that can answer whether an interaction target lies inside it
pub trait Containment<T: ?Sized> {
    fn contains_target(&self, target: &T) -> bool;
}

impl Containment<PointerEvent> for NodeId {
    fn contains_target(&self, event: &PointerEvent) -> bool {
        event.path().contains(self)
    }
}

/// Late-bound reference to the guarded region.
///
/// Cloning shares the slot, so the listener and the renderer that binds the
/// region see the same value.
pub struct BoundRef<R> {
    slot: Rc<RefCell<Option<R>>>,
}

impl<R> BoundRef<R> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set(&self, region: R) {
        *self.slot.borrow_mut() = Some(region);
    }

    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn is_bound(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// True only when a region is bound and `target` falls outside it
    pub fn is_outside<T: ?Sized>(&self, target: &T) -> bool
    where
        R: Containment<T>,
    {
        match self.slot.borrow().as_ref() {
            Some(region) => !region.contains_target(target),
            None => false,
        }
    }
}

impl<R: Clone> BoundRef<R> {
    pub fn get(&self) -> Option<R> {
        self.slot.borrow().clone()
    }
}

impl<R> Clone for BoundRef<R> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<R> Default for BoundRef<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: fmt::Debug> fmt::Debug for BoundRef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundRef").field(&self.slot.borrow()).finish()
    }
}

/// Registers outside-click listeners on a [`PointerHub`]
struct HubListener {
    hub: Rc<PointerHub>,
    bound: BoundRef<NodeId>,
    handler: Rc<dyn Fn()>,
}

impl ListenerHost for HubListener {
    type Registration = ListenerId;

    fn register(&self, phase: ListenPhase) -> Option<ListenerId> {
        let bound = self.bound.clone();
        let handler = Rc::clone(&self.handler);
        Some(self.hub.add_listener(
            phase,
            Rc::new(move |event: &PointerEvent| {
                if bound.is_outside(event) {
                    tracing::trace!(target_node = ?event.target(), "outside click detected");
                    handler();
                }
            }),
        ))
    }

    fn unregister(&self, id: ListenerId) {
        self.hub.remove_listener(id);
    }
}

/// Headless outside-click detector registered on a [`PointerHub`].
///
/// Mounting registers exactly one listener; dropping removes it.
pub struct OutsideClick {
    listener: ListenerSlot<HubListener>,
}

impl OutsideClick {
    pub fn mount(hub: Rc<PointerHub>, handler: Rc<dyn Fn()>, phase: ListenPhase) -> Self {
        let mut listener = ListenerSlot::new(HubListener {
            hub,
            bound: BoundRef::new(),
            handler,
        });
        listener.ensure(phase);
        Self { listener }
    }

    /// Reference to bind the guarded region to
    pub fn bound(&self) -> &BoundRef<NodeId> {
        &self.listener.host().bound
    }

    pub fn phase(&self) -> ListenPhase {
        self.listener.phase().unwrap_or_default()
    }

    /// Swap in a new handler or phase.
    ///
    /// The listener is re-registered only when one of them actually changed,
    /// so repeated renders never stack listeners. Returns whether it did.
    pub fn update(&mut self, handler: Rc<dyn Fn()>, phase: ListenPhase) -> bool {
        if Rc::ptr_eq(&self.listener.host().handler, &handler) {
            return self.listener.ensure(phase);
        }
        self.listener.host_mut().handler = handler;
        self.listener.reregister(phase)
    }
}
