//! Listener lifecycle shared by every outside-click detector
//!
//! A [`ListenerHost`] knows how to register a detector's listener somewhere
//! (the headless [`PointerHub`](super::PointerHub), or the browser document).
//! [`ListenerSlot`] owns at most one such registration and decides when it
//! has to be replaced.

use super::ListenPhase;

/// Place a detector's listener can be registered with
pub trait ListenerHost {
    /// Whatever is needed to undo one registration
    type Registration;

    /// Register the listener for `phase`. `None` if there is nowhere to register it.
    fn register(&self, phase: ListenPhase) -> Option<Self::Registration>;

    fn unregister(&self, registration: Self::Registration);
}

/// Holds at most one live registration on a [`ListenerHost`].
///
/// Dropping the slot unregisters the listener.
pub struct ListenerSlot<H: ListenerHost> {
    host: H,
    active: Option<(ListenPhase, H::Registration)>,
}

impl<H: ListenerHost> ListenerSlot<H> {
    pub fn new(host: H) -> Self {
        Self { host, active: None }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Phase of the live registration
    pub fn phase(&self) -> Option<ListenPhase> {
        self.active.as_ref().map(|(phase, _)| *phase)
    }

    pub fn is_registered(&self) -> bool {
        self.active.is_some()
    }

    /// Keep exactly one listener registered for `phase`.
    ///
    /// Nothing happens when it already is. Returns whether a new registration
    /// was made.
    pub fn ensure(&mut self, phase: ListenPhase) -> bool {
        if self.phase() == Some(phase) {
            return false;
        }
        self.reregister(phase)
    }

    /// Replace the live registration, if any, with a fresh one for `phase`.
    ///
    /// The old listener is removed before the new one is added. Returns
    /// whether the host accepted the new registration.
    pub fn reregister(&mut self, phase: ListenPhase) -> bool {
        self.release();
        self.active = self.host.register(phase).map(|registration| (phase, registration));
        self.active.is_some()
    }

    /// Returns false if nothing was registered
    pub fn release(&mut self) -> bool {
        match self.active.take() {
            Some((_, registration)) => {
                self.host.unregister(registration);
                true
            }
            None => false,
        }
    }
}

impl<H: ListenerHost> Drop for ListenerSlot<H> {
    fn drop(&mut self) {
        self.release();
    }
}
