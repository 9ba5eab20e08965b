pub mod engine;
pub mod slideshow;
pub mod store;

pub use crate::domain::model::{DateMode, Exam, FilterCriteria};
pub use crate::domain::ports::{ConfigProvider, ExamSource};
pub use crate::utils::error::Result;
