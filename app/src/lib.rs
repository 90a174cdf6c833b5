//! Oasis admin frontend
//!
//! Dioxus presentation layer over `oasis-core`: the compound modal
//! components, the browser outside-click hook, and the pages built on them.

#![allow(non_snake_case)]

pub mod app;
pub mod components;

pub use app::App;
