//! Pointer interaction plumbing
//!
//! This module provides:
//! - **Tree**: a minimal node arena used to answer "is this target inside that region"
//! - **Hub**: the document-level listener registry that pointer events are dispatched through
//! - **Listener**: the registration lifecycle every detector shares, behind [`ListenerHost`]
//! - **Outside click**: a detector that fires a handler for interactions outside a bound region
//!
//! The browser adapter in the UI crate uses the real DOM instead of the tree
//! and hub, and implements [`ListenerHost`] for the document so it shares
//! [`ListenerSlot`], [`BoundRef`] and [`ListenPhase`] with the headless
//! detector here.

mod hub;
pub mod listener;
pub mod outside;
mod tree;

pub use hub::{ListenerId, PointerHub};
pub use listener::{ListenerHost, ListenerSlot};
pub use outside::{BoundRef, Containment, OutsideClick};
pub use tree::{NodeId, NodeTree, PointerEvent};

/// Event phase a document-level listener is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListenPhase {
    /// Runs before the target's own handlers
    #[default]
    Capture,
    /// Runs after the target's own handlers
    Bubble,
}

impl ListenPhase {
    pub fn from_capturing(listen_capturing: bool) -> Self {
        if listen_capturing {
            ListenPhase::Capture
        } else {
            ListenPhase::Bubble
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, ListenPhase::Capture)
    }
}
