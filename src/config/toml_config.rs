use crate::domain::ports::ReactorConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based endpoint settings for deployments where the CLI flags are not
/// practical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub url: String,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

impl ReactorConfig for TomlConfig {
    fn pricing_url(&self) -> &str {
        &self.pricing.url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.pricing.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("pricing.url", &self.pricing.url)?;
        if let Some(seconds) = self.pricing.timeout_seconds {
            validate_positive_number("pricing.timeout_seconds", seconds, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [pricing]
            url = "https://ops.example.com/admin/shipping/invoice/get-prices/"
            timeout_seconds = 10
            "#,
        )
        .unwrap();

        assert_eq!(
            config.pricing_url(),
            "https://ops.example.com/admin/shipping/invoice/get-prices/"
        );
        assert_eq!(config.timeout_seconds(), Some(10));
    }

    #[test]
    fn test_timeout_is_optional() {
        let config = TomlConfig::from_toml_str(
            r#"
            [pricing]
            url = "http://localhost:8000/admin/shipping/invoice/get-prices/"
            "#,
        )
        .unwrap();

        assert_eq!(config.timeout_seconds(), None);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = TomlConfig::from_toml_str(
            r#"
            [pricing]
            url = "ftp://example.com/prices"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(TomlConfig::from_toml_str("pricing = ").is_err());
    }
}
