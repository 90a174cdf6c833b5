//! UI Components
//!
//! The modal manager and the outside-click hook it is built on, plus the
//! cabin actions page that uses them.

pub mod cabins;
pub mod modal;
pub mod outside_click;

pub use cabins::{AddCabin, CabinWindow, ConfirmDelete, CreateCabinForm};
pub use modal::{
    Modal, ModalContentProps, ModalManager, ModalOpen, ModalWindow, OverlayLayer, use_modal,
    use_modal_opener, use_modal_provider,
};
pub use outside_click::{DomRegion, bind_region, mounted_region, use_outside_click};
