use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Storefront configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    pub storefront: StorefrontConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub name: String,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl ShopConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: ShopConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn currency(&self) -> &str {
        self.storefront.currency.as_deref().unwrap_or("KSh")
    }
}

impl ConfigProvider for ShopConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.source.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for ShopConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_positive_number("source.timeout_seconds", self.timeout_seconds(), 1)?;
        Ok(())
    }
}
