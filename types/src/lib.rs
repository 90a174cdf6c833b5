//! Shared configuration types for Oasis
//!
//! This crate contains serializable configuration types that are shared between
//! the platform-agnostic modal core (oasis-core) and the WASM frontend (oasis-ui).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Modal Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Behavior settings for a modal manager scope.
///
/// Every field has a serde default, so an empty document (or no document at
/// all) yields the stock behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalConfig {
    /// Listen for outside clicks in the capture phase (before target handlers run)
    #[serde(default = "default_true")]
    pub listen_capturing: bool,
    /// Stacking order of the overlay layer when the browser top layer is unavailable
    #[serde(default = "default_z_index")]
    pub z_index: u32,
    /// Accessible label of the window's close control
    #[serde(default = "default_close_label")]
    pub close_label: String,
    /// DOM id prefix of overlay layer elements; each window adds its own suffix
    #[serde(default = "default_layer_id")]
    pub layer_id: String,
}

/// Default function for serde that returns true
pub fn default_true() -> bool {
    true
}

fn default_z_index() -> u32 {
    1000
}

fn default_close_label() -> String {
    "Close".to_string()
}

fn default_layer_id() -> String {
    "modal-layer".to_string()
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            listen_capturing: true,
            z_index: default_z_index(),
            close_label: default_close_label(),
            layer_id: default_layer_id(),
        }
    }
}
