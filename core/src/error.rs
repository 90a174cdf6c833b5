//! Error types for the modal manager

use thiserror::Error;

/// Programming errors in how the compound modal components are assembled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error("{component} must be rendered inside a modal manager scope")]
    OutsideScope { component: &'static str },
}

/// Errors while loading a modal configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse modal configuration TOML")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_scope_names_the_component() {
        let err = ModalError::OutsideScope {
            component: "ModalOpen",
        };
        assert_eq!(
            err.to_string(),
            "ModalOpen must be rendered inside a modal manager scope"
        );
    }
}
