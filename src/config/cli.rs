use crate::config::toml_config::ShopConfig;
use crate::config::ShopSettings;
use crate::domain::model::DateMode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "exam-shop")]
#[command(about = "Browse examination papers from the shop backend and build a cart")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:54321/rest/v1/exams")]
    pub api_endpoint: String,

    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Optional TOML config file; its [source] table wins over the flags above")]
    pub config: Option<String>,

    #[arg(long, default_value = "", help = "Free-text search over subject, paper code and description")]
    pub query: String,

    #[arg(long, value_enum, default_value_t = FilterArg::Today)]
    pub filter: FilterArg,

    #[arg(long, help = "Show exams on this exact date (YYYY-MM-DD)")]
    pub date: Option<NaiveDate>,

    #[arg(long, value_delimiter = ',', help = "Exam ids to put in the cart")]
    pub add: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum FilterArg {
    Today,
    ThisWeek,
    NextWeek,
    All,
}

impl CliConfig {
    /// The date mode the flags describe. An explicit `--date` means an exact
    /// day lookup regardless of `--filter`, matching how picking a calendar
    /// date works in the storefront.
    pub fn date_mode(&self) -> Option<DateMode> {
        if self.date.is_some() {
            return Some(DateMode::Custom);
        }
        match self.filter {
            FilterArg::Today => Some(DateMode::Today),
            FilterArg::ThisWeek => Some(DateMode::ThisWeek),
            FilterArg::NextWeek => Some(DateMode::NextWeek),
            FilterArg::All => None,
        }
    }

    /// Resolves the effective settings, reading the TOML config file when
    /// one was given.
    pub fn settings(&self) -> Result<ShopSettings> {
        match &self.config {
            Some(path) => {
                let file = ShopConfig::from_path(path)?;
                file.validate()?;
                Ok(ShopSettings::from_file(file))
            }
            None => {
                self.validate()?;
                Ok(ShopSettings {
                    storefront_name: "Exam Shop".to_string(),
                    currency: "KSh".to_string(),
                    api_endpoint: self.api_endpoint.clone(),
                    api_key: self.api_key.clone(),
                    timeout_seconds: self.timeout_seconds,
                })
            }
        }
    }
}

impl ConfigProvider for CliConfig {
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

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
