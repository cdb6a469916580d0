//! Bootstrap configuration
//!
//! All startup knobs live in one serializable struct so both validation
//! branches can be exercised at runtime without rebuilding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Startup configuration for the window and the Vulkan instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Application name passed to the driver in `VkApplicationInfo`
    pub app_name: String,
    /// Window title bar text
    pub window_title: String,
    /// Window client area width in pixels
    pub width: u32,
    /// Window client area height in pixels
    pub height: u32,
    /// Enable validation layers and the debug messenger
    pub enable_validation: bool,
    /// Validation layers to request when `enable_validation` is set.
    /// Any layer listed here that the runtime does not provide is a
    /// fatal bootstrap error.
    pub validation_layers: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            app_name: "Hello, Triangle".to_string(),
            window_title: "Vulkan".to_string(),
            width: 800,
            height: 600,
            enable_validation: cfg!(debug_assertions),
            validation_layers: vec!["VK_LAYER_KHRONOS_validation".to_string()],
        }
    }
}

impl BootstrapConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tutorial_values() {
        let config = BootstrapConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.app_name, "Hello, Triangle");
        assert_eq!(
            config.validation_layers,
            vec!["VK_LAYER_KHRONOS_validation".to_string()]
        );
    }

    #[test]
    fn test_toml_round_trip_preserves_toggle() {
        let mut config = BootstrapConfig::default();
        config.enable_validation = true;
        config.validation_layers = vec!["VK_LAYER_KHRONOS_validation".to_string()];

        let text = toml::to_string(&config).unwrap();
        let parsed: BootstrapConfig = toml::from_str(&text).unwrap();

        assert!(parsed.enable_validation);
        assert_eq!(parsed.validation_layers, config.validation_layers);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let parsed: BootstrapConfig =
            toml::from_str("enable_validation = false\nwidth = 1280").unwrap();

        assert!(!parsed.enable_validation);
        assert_eq!(parsed.width, 1280);
        assert_eq!(parsed.height, 600);
    }
}
