use crate::domain::model::Exam;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The single read operation against the exam backend: all records,
/// ordered by exam date ascending.
#[async_trait]
pub trait ExamSource: Send + Sync {
    async fn list_exams(&self) -> Result<Vec<Exam>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}
