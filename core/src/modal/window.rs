//! Per-window show/hide state machine

use std::fmt;
use std::rc::Rc;

use super::state::{OverlayState, WindowName};
use crate::pointer::BoundRef;

/// Visibility of one window renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPhase {
    #[default]
    Hidden,
    Shown,
}

/// Tracks whether a named window should currently be on screen.
///
/// A slot never decides visibility itself; it only follows the scope's
/// [`OverlayState`] whenever it is re-synced.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSlot<N> {
    name: N,
    phase: WindowPhase,
}

impl<N: WindowName> WindowSlot<N> {
    pub fn new(name: N) -> Self {
        Self {
            name,
            phase: WindowPhase::Hidden,
        }
    }

    pub fn name(&self) -> &N {
        &self.name
    }

    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    pub fn is_shown(&self) -> bool {
        self.phase == WindowPhase::Shown
    }

    /// Follow the scope state. Returns the new phase if it changed.
    pub fn sync(&mut self, state: &OverlayState<N>) -> Option<WindowPhase> {
        let next = if state.is_open(&self.name) {
            WindowPhase::Shown
        } else {
            WindowPhase::Hidden
        };
        if next == self.phase {
            return None;
        }
        tracing::trace!(name = ?self.name, ?next, "window phase changed");
        self.phase = next;
        Some(next)
    }
}

/// A window's slot together with the region its outside-click detector guards.
///
/// The region can only be bound while the window is shown and is cleared
/// whenever it is hidden, so a hidden window never reacts to clicks.
pub struct WindowBinding<N, R> {
    slot: WindowSlot<N>,
    region: BoundRef<R>,
}

impl<N: WindowName, R> WindowBinding<N, R> {
    pub fn new(name: N, region: BoundRef<R>) -> Self {
        Self {
            slot: WindowSlot::new(name),
            region,
        }
    }

    pub fn slot(&self) -> &WindowSlot<N> {
        &self.slot
    }

    pub fn region(&self) -> &BoundRef<R> {
        &self.region
    }

    pub fn is_shown(&self) -> bool {
        self.slot.is_shown()
    }

    /// Point the binding at another window name. It starts over hidden.
    /// Returns false if the name is unchanged.
    pub fn rename(&mut self, name: N) -> bool {
        if self.slot.name() == &name {
            return false;
        }
        self.slot = WindowSlot::new(name);
        self.region.clear();
        true
    }

    /// Follow the scope state. Returns the new phase if it changed.
    pub fn sync(&mut self, state: &OverlayState<N>) -> Option<WindowPhase> {
        let change = self.slot.sync(state);
        if !self.slot.is_shown() {
            self.region.clear();
        }
        change
    }

    /// Bind the guarded region. Ignored while hidden; returns whether it was bound.
    pub fn bind(&self, region: R) -> bool {
        if !self.slot.is_shown() {
            return false;
        }
        self.region.set(region);
        true
    }
}

/// Close capability handed to a window's content.
#[derive(Clone)]
pub struct CloseModal(Rc<dyn Fn()>);

impl CloseModal {
    pub fn new(close: impl Fn() + 'static) -> Self {
        Self(Rc::new(close))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for CloseModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloseModal")
    }
}

/// What a shown window puts on screen: the region guarded against outside
/// clicks and the close capability injected into the content.
#[derive(Debug, Clone)]
pub struct WindowView<R> {
    pub container: R,
    pub on_close_modal: CloseModal,
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::pointer::NodeTree;

    #[test]
    fn slot_starts_hidden() {
        let slot = WindowSlot::new("form");
        assert_eq!(slot.phase(), WindowPhase::Hidden);
        assert_eq!(slot.name(), &"form");
    }

    #[test]
    fn sync_follows_name_match() {
        let mut state = OverlayState::new();
        let mut slot = WindowSlot::new("form");

        assert_eq!(slot.sync(&state), None);
        state.open("form");
        assert_eq!(slot.sync(&state), Some(WindowPhase::Shown));
        assert_eq!(slot.sync(&state), None);

        state.open("other");
        assert_eq!(slot.sync(&state), Some(WindowPhase::Hidden));
        assert!(!slot.is_shown());
    }

    #[test]
    fn close_modal_invokes_the_wrapped_closure() {
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let close = CloseModal::new(move || c.set(c.get() + 1));
        close.clone().call();
        close.call();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn binding_refuses_region_while_hidden() {
        let binding = WindowBinding::new("form", BoundRef::new());
        assert!(!binding.bind(7));
        assert!(!binding.region().is_bound());
    }

    #[test]
    fn binding_clears_region_when_hidden_again() {
        let mut state = OverlayState::new();
        let mut binding = WindowBinding::new("form", BoundRef::new());

        state.open("form");
        assert_eq!(binding.sync(&state), Some(WindowPhase::Shown));
        assert!(binding.bind(7));
        assert_eq!(binding.region().get(), Some(7));

        // Re-syncing while still shown keeps the region
        assert_eq!(binding.sync(&state), None);
        assert!(binding.region().is_bound());

        state.open("other");
        assert_eq!(binding.sync(&state), Some(WindowPhase::Hidden));
        assert!(!binding.region().is_bound());
    }

    #[test]
    fn binding_region_is_shared_with_the_detector() {
        let tree = NodeTree::new();
        let body = tree.add_root();
        let container = tree.add_child(body);
        let outside = tree.add_child(body);

        let detector_side = BoundRef::new();
        let mut state = OverlayState::new();
        let mut binding = WindowBinding::new("form", detector_side.clone());

        state.open("form");
        binding.sync(&state);
        binding.bind(container);
        assert!(detector_side.is_outside(&tree.click(outside)));

        state.close();
        binding.sync(&state);
        assert!(!detector_side.is_outside(&tree.click(outside)));
    }

    #[test]
    fn rename_restarts_hidden() {
        let mut state = OverlayState::new();
        let mut binding = WindowBinding::new("form", BoundRef::new());
        state.open("form");
        binding.sync(&state);
        binding.bind(1);

        assert!(!binding.rename("form"));
        assert!(binding.is_shown());

        assert!(binding.rename("confirm"));
        assert!(!binding.is_shown());
        assert!(!binding.region().is_bound());
        assert_eq!(binding.slot().name(), &"confirm");
    }
}
