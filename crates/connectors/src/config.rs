//! Connector configuration types
//!
//! Each connector defines its own config struct here.
//! Configs are parsed from raw TOML values provided by the embedding
//! application.

use crate::error::ConnectorError;
use serde::Deserialize;
use std::path::PathBuf;

/// Default vendor page size per sub-query
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Lodging connector configuration
///
/// One instance per connected account. The session directory holds vendor
/// session material for that account and must not be shared between
/// instances; `disconnect` removes it recursively.
///
/// # Example
///
/// ```toml
/// [connectors.lodging_main]
/// type = "lodging"
/// session_dir = "/var/lib/footprint/sessions/lodging_main"
/// page_size = 50    # optional, default: 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LodgingConnectorConfig {
    /// Directory holding this instance's vendor session material
    pub session_dir: PathBuf,

    /// Vendor page size per sub-query (default: 50)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl LodgingConnectorConfig {
    /// Create a config with the default page size
    pub fn new(session_dir: impl Into<PathBuf>) -> Result<Self, ConnectorError> {
        let config = Self {
            session_dir: session_dir.into(),
            page_size: DEFAULT_PAGE_SIZE,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse config from raw TOML value
    pub fn from_toml(value: &toml::Value) -> Result<Self, ConnectorError> {
        let config: LodgingConnectorConfig =
            value.clone().try_into().map_err(|e: toml::de::Error| {
                ConnectorError::Config(format!("invalid lodging config: {}", e))
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConnectorError> {
        if self.session_dir.as_os_str().is_empty() {
            return Err(ConnectorError::Config(
                "lodging session_dir is required".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(ConnectorError::Config(
                "lodging page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lodging_config_new() {
        let config = LodgingConnectorConfig::new("/var/lib/footprint/sessions/a").unwrap();
        assert_eq!(
            config.session_dir,
            PathBuf::from("/var/lib/footprint/sessions/a")
        );
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_lodging_config_from_toml() {
        let toml_str = r#"
session_dir = "/var/lib/footprint/sessions/lodging_main"
page_size = 25
"#;
        let value: toml::Value = toml::from_str(toml_str).unwrap();
        let config = LodgingConnectorConfig::from_toml(&value).unwrap();

        assert_eq!(
            config.session_dir,
            PathBuf::from("/var/lib/footprint/sessions/lodging_main")
        );
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_lodging_config_default_page_size() {
        let toml_str = r#"session_dir = "/tmp/lodging""#;
        let value: toml::Value = toml::from_str(toml_str).unwrap();
        let config = LodgingConnectorConfig::from_toml(&value).unwrap();
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_lodging_config_missing_session_dir() {
        let value: toml::Value = toml::from_str("page_size = 10").unwrap();
        let result = LodgingConnectorConfig::from_toml(&value);
        assert!(matches!(result, Err(ConnectorError::Config(_))));
    }

    #[test]
    fn test_lodging_config_empty_session_dir() {
        let value: toml::Value = toml::from_str(r#"session_dir = """#).unwrap();
        let result = LodgingConnectorConfig::from_toml(&value);
        assert!(matches!(result, Err(ConnectorError::Config(_))));
    }

    #[test]
    fn test_lodging_config_zero_page_size() {
        let toml_str = r#"
session_dir = "/tmp/lodging"
page_size = 0
"#;
        let value: toml::Value = toml::from_str(toml_str).unwrap();
        let result = LodgingConnectorConfig::from_toml(&value);
        assert!(matches!(result, Err(ConnectorError::Config(_))));
    }
}
