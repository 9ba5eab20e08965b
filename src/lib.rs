pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{ShopConfig, ShopSettings};

pub use adapters::RestExamSource;
pub use core::{engine::StorefrontEngine, slideshow::Slideshow, store::Storefront};
pub use domain::model::{DateMode, Exam, FilterCriteria};
pub use domain::services::cart::{AddOutcome, Cart};
pub use utils::error::{Result, ShopError};
