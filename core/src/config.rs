//! Modal configuration loading

use oasis_types::ModalConfig;

use crate::error::ConfigError;
use crate::pointer::ListenPhase;

/// Parse a modal configuration from a TOML document.
///
/// Missing keys fall back to their defaults; an empty document is valid.
pub fn load_modal_config(source: &str) -> Result<ModalConfig, ConfigError> {
    let config: ModalConfig =
        toml::from_str(source).map_err(|source| ConfigError::Parse { source })?;
    tracing::debug!(?config, "modal configuration loaded");
    Ok(config)
}

/// Event phase the outside-click listener should use for this configuration
pub fn listen_phase(config: &ModalConfig) -> ListenPhase {
    ListenPhase::from_capturing(config.listen_capturing)
}
