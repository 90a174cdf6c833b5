//! Where a manager keeps its open-window state

use super::state::{OverlayState, Transition, WindowName};

/// Storage for one scope's [`OverlayState`], such as a reactive signal.
///
/// Writing is what makes windows re-render, so the provided mutators only
/// write when a call actually changes the state.
pub trait OverlayStore<N: WindowName> {
    /// Current state, read without subscribing to it
    fn peek_state(&self) -> OverlayState<N>;

    /// Replace the state and notify everything that reads it
    fn write_state(&self, state: OverlayState<N>);

    fn open_window(&self, name: N) -> Transition<N> {
        self.update_state(|state| state.open(name))
    }

    fn close_window(&self) -> Transition<N> {
        self.update_state(OverlayState::close)
    }

    /// Apply `change` to a copy of the state; write it back only if it changed
    fn update_state(
        &self,
        change: impl FnOnce(&mut OverlayState<N>) -> Transition<N>,
    ) -> Transition<N> {
        let mut state = self.peek_state();
        let transition = change(&mut state);
        if transition.is_change() {
            self.write_state(state);
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct CountingStore {
        state: RefCell<OverlayState<&'static str>>,
        writes: Cell<u32>,
    }

    impl OverlayStore<&'static str> for CountingStore {
        fn peek_state(&self) -> OverlayState<&'static str> {
            self.state.borrow().clone()
        }

        fn write_state(&self, state: OverlayState<&'static str>) {
            self.writes.set(self.writes.get() + 1);
            *self.state.borrow_mut() = state;
        }
    }

    #[test]
    fn repeated_open_writes_once() {
        let store = CountingStore::default();

        assert!(store.open_window("form").is_change());
        assert_eq!(store.open_window("form"), Transition::Unchanged);
        assert_eq!(store.open_window("form"), Transition::Unchanged);

        assert_eq!(store.writes.get(), 1);
        assert_eq!(store.peek_state().open_name(), Some(&"form"));
    }

    #[test]
    fn close_when_closed_never_writes() {
        let store = CountingStore::default();

        assert_eq!(store.close_window(), Transition::Unchanged);
        assert_eq!(store.writes.get(), 0);

        store.open_window("form");
        store.close_window();
        store.close_window();
        assert_eq!(store.writes.get(), 2);
        assert!(!store.peek_state().is_any_open());
    }

    #[test]
    fn switching_windows_writes_each_time() {
        let store = CountingStore::default();

        store.open_window("a");
        let switched = store.open_window("b");

        assert_eq!(
            switched,
            Transition::Opened {
                previous: Some("a"),
                current: "b"
            }
        );
        assert_eq!(store.writes.get(), 2);
        assert!(store.peek_state().is_open(&"b"));
    }
}
