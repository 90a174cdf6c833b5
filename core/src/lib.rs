//! Platform-agnostic core of the Oasis modal manager.
//!
//! The UI crate renders with Dioxus; everything that decides *whether* a
//! window is on screen, and when it should close, lives here and is tested
//! without a browser.

pub mod config;
pub mod error;
pub mod modal;
pub mod pointer;

// Re-exports for convenience
pub use config::{listen_phase, load_modal_config};
pub use error::{ConfigError, ModalError};
pub use modal::{
    CloseModal, ModalScope, OverlayState, OverlayStore, Transition, Trigger, WindowBinding,
    WindowHandle, WindowName, WindowPhase, WindowSlot, WindowView,
};
pub use oasis_types::ModalConfig;
pub use pointer::{
    BoundRef, Containment, ListenPhase, ListenerHost, ListenerId, ListenerSlot, NodeId, NodeTree,
    OutsideClick, PointerEvent, PointerHub,
};
