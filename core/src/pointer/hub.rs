//! Document-level pointer listener registry

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{ListenPhase, PointerEvent};

/// Identifies one registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler = Rc<dyn Fn(&PointerEvent)>;

struct Listener {
    id: ListenerId,
    phase: ListenPhase,
    handler: Handler,
}

/// Shared event stream every pointer interaction passes through.
///
/// Dispatch order mirrors the DOM: capture listeners, then the target's own
/// handler, then bubble listeners. Listeners removed mid-dispatch are skipped.
#[derive(Default)]
pub struct PointerHub {
    listeners: RefCell<Vec<Listener>>,
    next_id: Cell<u64>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, phase: ListenPhase, handler: Rc<dyn Fn(&PointerEvent)>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(Listener { id, phase, handler });
        tracing::trace!(?id, ?phase, "pointer listener added");
        id
    }

    /// Returns false if the listener was already gone
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|l| l.id != id);
        let removed = listeners.len() != before;
        if removed {
            tracing::trace!(?id, "pointer listener removed");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|l| l.id == id)
    }

    /// Snapshot so handlers are free to add or remove listeners while running
    fn snapshot(&self, phase: ListenPhase) -> Vec<(ListenerId, Handler)> {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.phase == phase)
            .map(|l| (l.id, Rc::clone(&l.handler)))
            .collect()
    }

    fn run_phase(&self, phase: ListenPhase, event: &PointerEvent) {
        for (id, handler) in self.snapshot(phase) {
            if self.is_registered(id) {
                handler(event);
            }
        }
    }

    /// Deliver one interaction. `at_target` is the clicked element's own handler.
    pub fn dispatch(&self, event: &PointerEvent, at_target: impl FnOnce()) {
        self.run_phase(ListenPhase::Capture, event);
        at_target();
        self.run_phase(ListenPhase::Bubble, event);
    }
}
