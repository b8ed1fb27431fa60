use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_port, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub endpoint: EndpointSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointSection {
    pub port: Option<u16>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded endpoint config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(port) = self.endpoint.port {
            validate_port("endpoint.port", port)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn port(&self) -> Option<u16> {
        self.endpoint.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EndpointError;
    use tempfile::TempDir;

    #[test]
    fn test_parse_endpoint_port() {
        let config = TomlConfig::from_toml_str("[endpoint]\nport = 55433\n").unwrap();
        assert_eq!(config.port(), Some(55433));
    }

    #[test]
    fn test_missing_section_means_no_port() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.port(), None);
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let err = TomlConfig::from_toml_str("[endpoint]\nport = 0\n").unwrap_err();
        assert!(matches!(err, EndpointError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_out_of_range_port_is_toml_error() {
        let err = TomlConfig::from_toml_str("[endpoint]\nport = 70000\n").unwrap_err();
        assert!(matches!(err, EndpointError::TomlError(_)));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("endpoint.toml");
        std::fs::write(&path, "[endpoint]\nport = 8080\n").unwrap();

        let config = TomlConfig::from_file(&path).unwrap();
        assert_eq!(config.port(), Some(8080));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = TomlConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, EndpointError::IoError(_)));
    }
}
