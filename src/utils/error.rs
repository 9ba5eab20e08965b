use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Backend returned status {status}")]
    BackendError { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ShopError>;
