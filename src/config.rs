use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bridge: BridgeConfig,
}

/// Limits on the bridge length accepted at the size prompt.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub min_size: usize,
    pub max_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bridge: BridgeConfig::default(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            min_size: 3,
            max_size: 20,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bridge.min_size == 0 {
            return Err(ConfigError::Validation(
                "bridge.min_size must be > 0".into(),
            ));
        }
        if self.bridge.min_size > self.bridge.max_size {
            return Err(ConfigError::Validation(
                "bridge.min_size must be <= bridge.max_size".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bridge.min_size, 3);
        assert_eq!(config.bridge.max_size, 20);
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [bridge]
            min_size = 1
            max_size = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.bridge.min_size, 1);
        assert_eq!(config.bridge.max_size, 10);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[bridge]\nmax_size = 12\n").unwrap();
        assert_eq!(config.bridge.min_size, 3);
        assert_eq!(config.bridge.max_size, 12);
    }

    #[test]
    fn test_zero_min_size_rejected() {
        let mut config = AppConfig::default();
        config.bridge.min_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = AppConfig::default();
        config.bridge.min_size = 10;
        config.bridge.max_size = 5;
        assert!(config.validate().is_err());
    }
}
