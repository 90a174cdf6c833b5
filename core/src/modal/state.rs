//! Single-slot overlay state

use std::fmt::Debug;

/// Identifier shared by a trigger and the window it opens.
///
/// Implemented for every cloneable, comparable type. Feature code normally
/// declares a small enum per manager so a typo in a window name is a compile
/// error rather than a window that silently never shows.
pub trait WindowName: Clone + PartialEq + Debug + 'static {}

impl<T: Clone + PartialEq + Debug + 'static> WindowName for T {}

/// Outcome of a mutator call on [`OverlayState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<N> {
    /// The call was idempotent; nothing needs to re-render
    Unchanged,
    /// A window opened, possibly replacing another
    Opened { previous: Option<N>, current: N },
    /// The open window closed
    Closed { previous: N },
}

impl<N> Transition<N> {
    pub fn is_change(&self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

/// Name of the one window currently open in a manager scope, if any.
///
/// Opening a name replaces whatever was open before, so at most one window is
/// ever open per scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState<N> {
    open_name: Option<N>,
}

impl<N: WindowName> OverlayState<N> {
    pub fn new() -> Self {
        Self { open_name: None }
    }

    pub fn open_name(&self) -> Option<&N> {
        self.open_name.as_ref()
    }

    pub fn is_open(&self, name: &N) -> bool {
        self.open_name.as_ref() == Some(name)
    }

    pub fn is_any_open(&self) -> bool {
        self.open_name.is_some()
    }

    pub fn open(&mut self, name: N) -> Transition<N> {
        if self.is_open(&name) {
            tracing::trace!(?name, "open ignored, window already open");
            return Transition::Unchanged;
        }
        let previous = self.open_name.replace(name.clone());
        tracing::debug!(?name, ?previous, "modal window opened");
        Transition::Opened {
            previous,
            current: name,
        }
    }

    pub fn close(&mut self) -> Transition<N> {
        match self.open_name.take() {
            Some(previous) => {
                tracing::debug!(?previous, "modal window closed");
                Transition::Closed { previous }
            }
            None => {
                tracing::trace!("close ignored, no window open");
                Transition::Unchanged
            }
        }
    }
}

impl<N: WindowName> Default for OverlayState<N> {
    fn default() -> Self {
        Self::new()
    }
}
