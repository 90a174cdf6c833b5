//! Headless modal manager scope
//!
//! [`ModalScope`] is the explicit state container behind one manager: it owns
//! the [`OverlayState`], re-syncs every registered window after each effective
//! mutation, and wires each window's outside-click detector to a shared
//! [`PointerHub`]. Handles are cheap clones of the scope, so triggers and
//! windows can live in unrelated parts of a view tree.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use oasis_types::ModalConfig;

use super::state::{OverlayState, Transition, WindowName};
use super::store::OverlayStore;
use super::window::{CloseModal, WindowBinding, WindowPhase, WindowSlot, WindowView};
use crate::config::listen_phase;
use crate::pointer::{ListenPhase, NodeId, OutsideClick, PointerHub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WindowId(u64);

struct Registered<N> {
    id: WindowId,
    binding: WindowBinding<N, NodeId>,
    container: NodeId,
}

impl<N: WindowName> Registered<N> {
    fn sync(&mut self, state: &OverlayState<N>) {
        if self.binding.sync(state) == Some(WindowPhase::Shown) {
            self.binding.bind(self.container);
        }
    }
}

struct ScopeInner<N> {
    hub: Rc<PointerHub>,
    phase: ListenPhase,
    state: RefCell<OverlayState<N>>,
    windows: RefCell<Vec<Registered<N>>>,
    next_window: Cell<u64>,
    renders: Cell<u64>,
}

/// One modal manager. Clones share the same state.
pub struct ModalScope<N> {
    inner: Rc<ScopeInner<N>>,
}

impl<N> Clone for ModalScope<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<N: WindowName> ModalScope<N> {
    /// Scope whose windows listen for outside clicks in the capture phase
    pub fn new(hub: Rc<PointerHub>) -> Self {
        Self::with_phase(hub, ListenPhase::Capture)
    }

    pub fn with_config(hub: Rc<PointerHub>, config: &ModalConfig) -> Self {
        Self::with_phase(hub, listen_phase(config))
    }

    pub fn with_phase(hub: Rc<PointerHub>, phase: ListenPhase) -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                hub,
                phase,
                state: RefCell::new(OverlayState::new()),
                windows: RefCell::new(Vec::new()),
                next_window: Cell::new(0),
                renders: Cell::new(0),
            }),
        }
    }

    pub fn open_name(&self) -> Option<N> {
        self.inner.state.borrow().open_name().cloned()
    }

    pub fn open(&self, name: N) -> Transition<N> {
        self.open_window(name)
    }

    pub fn close(&self) -> Transition<N> {
        self.close_window()
    }

    /// Number of times the windows were re-synced after a state change
    pub fn render_count(&self) -> u64 {
        self.inner.renders.get()
    }

    fn rerender(&self) {
        self.inner.renders.set(self.inner.renders.get() + 1);
        let state = self.inner.state.borrow();
        for window in self.inner.windows.borrow_mut().iter_mut() {
            window.sync(&state);
        }
    }

    /// Names of the windows currently on screen, in registration order
    pub fn shown_windows(&self) -> Vec<N> {
        self.inner
            .windows
            .borrow()
            .iter()
            .filter(|w| w.binding.is_shown())
            .map(|w| w.binding.slot().name().clone())
            .collect()
    }

    /// Close callback that does not keep the scope alive
    fn close_handle(&self) -> Rc<dyn Fn()> {
        let weak: Weak<ScopeInner<N>> = Rc::downgrade(&self.inner);
        Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                ModalScope { inner }.close();
            }
        })
    }

    /// Bind a clickable element to `open(opens)`
    pub fn trigger(&self, opens: N) -> Trigger<N> {
        Trigger {
            scope: self.clone(),
            opens,
        }
    }

    /// Mount a window renderer for `name` whose container is `container`.
    ///
    /// The window shows immediately if its name is already open.
    pub fn window(&self, name: N, container: NodeId) -> WindowHandle<N> {
        let id = WindowId(self.inner.next_window.get());
        self.inner.next_window.set(id.0 + 1);

        let detector = OutsideClick::mount(
            Rc::clone(&self.inner.hub),
            self.close_handle(),
            self.inner.phase,
        );

        let mut windows = self.inner.windows.borrow_mut();
        if windows.iter().any(|w| w.binding.slot().name() == &name) {
            tracing::warn!(?name, "two windows share a name; both will show together");
        }

        let mut registered = Registered {
            id,
            binding: WindowBinding::new(name, detector.bound().clone()),
            container,
        };
        registered.sync(&self.inner.state.borrow());
        windows.push(registered);

        WindowHandle {
            scope: self.clone(),
            id,
            detector,
        }
    }
}

impl<N: WindowName> OverlayStore<N> for ModalScope<N> {
    fn peek_state(&self) -> OverlayState<N> {
        self.inner.state.borrow().clone()
    }

    fn write_state(&self, state: OverlayState<N>) {
        *self.inner.state.borrow_mut() = state;
        self.rerender();
    }
}

/// A clickable element bound to opening one window
pub struct Trigger<N> {
    scope: ModalScope<N>,
    opens: N,
}

impl<N: WindowName> Trigger<N> {
    pub fn opens(&self) -> &N {
        &self.opens
    }

    pub fn activate(&self) -> Transition<N> {
        self.scope.open(self.opens.clone())
    }
}

/// A mounted window renderer. Dropping it unmounts the window and removes its
/// outside-click listener.
pub struct WindowHandle<N: WindowName> {
    scope: ModalScope<N>,
    id: WindowId,
    detector: OutsideClick,
}

impl<N: WindowName> WindowHandle<N> {
    fn with_slot<T>(&self, f: impl FnOnce(&WindowSlot<N>) -> T) -> Option<T> {
        self.scope
            .inner
            .windows
            .borrow()
            .iter()
            .find(|w| w.id == self.id)
            .map(|w| f(w.binding.slot()))
    }

    pub fn phase(&self) -> WindowPhase {
        self.with_slot(WindowSlot::phase).unwrap_or_default()
    }

    pub fn is_shown(&self) -> bool {
        self.phase() == WindowPhase::Shown
    }

    pub fn name(&self) -> Option<N> {
        self.with_slot(|slot| slot.name().clone())
    }

    /// Nothing when hidden; otherwise the guarded container and the close
    /// capability for the content
    pub fn render(&self) -> Option<WindowView<NodeId>> {
        if !self.is_shown() {
            return None;
        }
        let close = self.scope.close_handle();
        Some(WindowView {
            container: self.detector.bound().get()?,
            on_close_modal: CloseModal::new(move || close()),
        })
    }

    /// Activate the window's own close control
    pub fn press_close(&self) -> Transition<N> {
        self.scope.close()
    }
}

impl<N: WindowName> Drop for WindowHandle<N> {
    fn drop(&mut self) {
        self.scope
            .inner
            .windows
            .borrow_mut()
            .retain(|w| w.id != self.id);
    }
}
