//! Top-level error type
//!
//! Aggregates the per-module errors surfaced during bootstrap. All are
//! fatal configuration or environment mismatches; none are retried.

use thiserror::Error;

use crate::config::ConfigError;
use crate::instance::InstanceError;
use crate::window::WindowError;

/// Any failure surfaced by the bootstrap sequence
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Windowing subsystem or surface failure
    #[error("window error: {0}")]
    Window(#[from] WindowError),

    /// Capability negotiation or instance creation failure
    #[error("instance error: {0}")]
    Instance(#[from] InstanceError),

    /// Configuration loading failure
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        let err = BootstrapError::from(WindowError::InitializationFailed);
        assert_eq!(err.to_string(), "window error: GLFW initialization failed");

        let err = BootstrapError::from(InstanceError::MissingValidationLayer(
            "VK_LAYER_KHRONOS_validation".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "instance error: Missing validation layer: VK_LAYER_KHRONOS_validation"
        );
    }
}
