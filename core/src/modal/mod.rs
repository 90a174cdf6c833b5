//! Singleton modal manager
//!
//! This module provides:
//! - **State**: the single open-window slot shared by a manager scope
//! - **Window**: the per-renderer Hidden/Shown state machine and close capability
//! - **Store**: the seam a manager keeps its state behind, writing only on real changes
//! - **Scope**: a headless manager wiring triggers, windows and outside clicks together
//!
//! # Flow
//!
//! ```text
//!   Trigger(opens = x) ──activate──▶ OverlayState.open(x)
//!                                         │
//!                                    re-sync slots
//!                                         │
//!            ┌────────────────────────────┴───────────────────┐
//!            ▼                                                ▼
//!   Window(name = x): Shown                       Window(name ≠ x): Hidden
//!            │
//!   close control / outside click / content's on_close_modal
//!            │
//!            ▼
//!   OverlayState.close() ──▶ every window Hidden
//! ```

pub mod scope;
mod state;
mod store;
mod window;

#[cfg(test)]
mod scope_tests;

pub use scope::{ModalScope, Trigger, WindowHandle};
pub use state::{OverlayState, Transition, WindowName};
pub use store::OverlayStore;
pub use window::{CloseModal, WindowBinding, WindowPhase, WindowSlot, WindowView};
