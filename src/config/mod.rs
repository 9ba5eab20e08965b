#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::ShopConfig;

use crate::domain::ports::ConfigProvider;

/// Effective settings after merging CLI flags and the optional config file.
#[derive(Debug, Clone)]
pub struct ShopSettings {
    pub storefront_name: String,
    pub currency: String,
    pub api_endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl ShopSettings {
    pub fn from_file(config: ShopConfig) -> Self {
        Self {
            storefront_name: config.storefront.name.clone(),
            currency: config.currency().to_string(),
            api_endpoint: config.source.endpoint.clone(),
            api_key: config.source.api_key.clone(),
            timeout_seconds: config.timeout_seconds(),
        }
    }
}

impl ConfigProvider for ShopSettings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}
